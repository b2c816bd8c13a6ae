//! # Interactive Session
//!
//! The menu loop as an explicit state machine. Each call to [`Session::step`] performs
//! one transition:
//!
//! ```text
//! Main ──"2", id found──▶ Edit(id) ──one sub-action──▶ Main
//! Main ──"5", id found──▶ ConfirmDelete(id) ──Y / N──▶ Main
//!                         ConfirmDelete(id) ──other──▶ ConfirmDelete(id)
//! Main ──"0" or end of input──▶ Exit
//! ```
//!
//! Every other main-menu action (add, show, list, unknown input) returns to `Main`.
//!
//! The session reads from any `BufRead` and writes to any `Write`. End of input at
//! any prompt behaves like the exit command: the pending action is dropped and the
//! farewell is printed.

use crate::api::CrmApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::CrmConfig;
use crate::error::{CrmError, Result};
use crate::menu::{
    Confirmation, EditChoice, MainChoice, CONFIRM_DELETE_PROMPT, EDIT_MENU, MAIN_MENU,
};
use crate::model::CustomerId;
use crate::render::{format_customer, format_customer_list, format_message};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const FAREWELL: &str = "Bye!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Main,
    Edit(CustomerId),
    ConfirmDelete(CustomerId),
    Exit,
}

pub struct Session<S: DataStore, R: BufRead, W: Write> {
    api: CrmApi<S>,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Session<InMemoryStore, R, W> {
    /// A fresh in-memory session, seeded according to `config`.
    pub fn from_config(config: &CrmConfig, input: R, output: W) -> Result<Self> {
        let api = if config.seed {
            CrmApi::seeded(InMemoryStore::new())?
        } else {
            CrmApi::new(InMemoryStore::new())
        };
        Ok(Self::new(api, input, output, config.color))
    }
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: CrmApi<S>, input: R, output: W, color: bool) -> Self {
        Self {
            api,
            input,
            output,
            color,
        }
    }

    pub fn api(&self) -> &CrmApi<S> {
        &self.api
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the exit command or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!(customers = self.api.customer_count(), "session started");
        let mut state = State::Main;
        while state != State::Exit {
            state = self.step(state)?;
        }
        info!(customers = self.api.customer_count(), "session ended");
        Ok(())
    }

    pub fn step(&mut self, state: State) -> Result<State> {
        debug!(?state, "step");
        match state {
            State::Main => self.main_menu(),
            State::Edit(id) => self.edit_menu(id),
            State::ConfirmDelete(id) => self.confirm_delete(id),
            State::Exit => Ok(State::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<State> {
        self.say("")?;
        self.say(MAIN_MENU)?;
        let Some(line) = self.prompt("Choose: ")? else {
            return self.end_of_input();
        };

        match line.parse::<MainChoice>() {
            Ok(MainChoice::Add) => self.add_customer(),
            Ok(MainChoice::Edit) => self.begin_edit(),
            Ok(MainChoice::Show) => self.show_customer(),
            Ok(MainChoice::List) => self.list_customers(),
            Ok(MainChoice::Delete) => self.begin_delete(),
            Ok(MainChoice::Exit) => {
                self.say(FAREWELL)?;
                Ok(State::Exit)
            }
            Err(unknown) => {
                debug!(choice = %unknown.0, "unknown main menu choice");
                self.say("Unknown choice")?;
                Ok(State::Main)
            }
        }
    }

    fn add_customer(&mut self) -> Result<State> {
        let id = self.api.next_id();
        self.say(&format!("Generated Customer id: {}", id))?;
        if let Err(err) = self.api.ensure_id_free(&id) {
            self.report(err)?;
            return Ok(State::Main);
        }

        let Some(name) = self.prompt("Name: ")? else {
            return self.end_of_input();
        };
        let Some(email) = self.prompt("Email: ")? else {
            return self.end_of_input();
        };

        let result = self.api.add_customer(id, name.trim(), email.trim());
        self.finish(result)
    }

    fn begin_edit(&mut self) -> Result<State> {
        let Some(id) = self.prompt_id()? else {
            return self.end_of_input();
        };
        if let Err(err) = self.api.get_customer(&id).map(|_| ()) {
            self.report(err)?;
            return Ok(State::Main);
        }
        Ok(State::Edit(id))
    }

    fn edit_menu(&mut self, id: CustomerId) -> Result<State> {
        let name = match self.api.get_customer(&id).map(|c| c.name().to_string()) {
            Ok(name) => name,
            Err(err) => {
                self.report(err)?;
                return Ok(State::Main);
            }
        };

        self.say(&format!("Edit customer: {}", name))?;
        self.say(EDIT_MENU)?;
        let Some(line) = self.prompt("Choose option: ")? else {
            return self.end_of_input();
        };
        let choice = match line.parse::<EditChoice>() {
            Ok(choice) => choice,
            Err(unknown) => {
                debug!(choice = %unknown.0, "unknown edit menu choice");
                self.say("Unknown choice.")?;
                return Ok(State::Main);
            }
        };

        let Some(value) = self.prompt(choice.prompt())? else {
            return self.end_of_input();
        };
        let result = self.api.edit_customer(&id, choice.into_action(&value));
        self.finish(result)
    }

    fn show_customer(&mut self) -> Result<State> {
        let Some(id) = self.prompt_id()? else {
            return self.end_of_input();
        };
        match self.api.show_customer(&id) {
            Ok(result) => {
                for customer in &result.listed_customers {
                    self.say(&format_customer(customer))?;
                }
                self.emit(&result.messages)?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(State::Main)
    }

    fn list_customers(&mut self) -> Result<State> {
        let result = self.api.list_customers();
        if let Ok(listed) = &result {
            for line in format_customer_list(&listed.listed_customers) {
                self.say(&line)?;
            }
        }
        self.finish(result)
    }

    fn begin_delete(&mut self) -> Result<State> {
        let Some(id) = self.prompt_id()? else {
            return self.end_of_input();
        };
        match self.api.show_customer(&id) {
            Ok(result) => {
                self.say("Found customer:")?;
                for customer in &result.listed_customers {
                    self.say(&format_customer(customer))?;
                }
                Ok(State::ConfirmDelete(id))
            }
            Err(err) => {
                self.report(err)?;
                Ok(State::Main)
            }
        }
    }

    fn confirm_delete(&mut self, id: CustomerId) -> Result<State> {
        let Some(answer) = self.prompt(CONFIRM_DELETE_PROMPT)? else {
            return self.end_of_input();
        };

        match answer.parse::<Confirmation>() {
            Ok(Confirmation::Yes) => {
                let result = self.api.delete_customer(&id);
                self.finish(result)
            }
            Ok(Confirmation::No) => {
                debug!(%id, "delete cancelled");
                self.emit(&[CmdMessage::info("Action cancelled.")])?;
                Ok(State::Main)
            }
            Err(_) => {
                self.say("Invalid input. Please type Y or N.")?;
                Ok(State::ConfirmDelete(id))
            }
        }
    }

    // --- I/O helpers ---

    /// Prints `label` without a newline and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_id(&mut self) -> Result<Option<CustomerId>> {
        Ok(self
            .prompt("Customer id: ")?
            .map(|line| CustomerId::new(line.trim())))
    }

    /// Reads one line, decoding invalid UTF-8 lossily rather than failing.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut buf = String::from_utf8_lossy(&bytes).into_owned();
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn emit(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let line = format_message(message, self.color);
            self.say(&line)?;
        }
        Ok(())
    }

    /// Prints domain errors and keeps going; terminal I/O errors end the session.
    fn report(&mut self, err: CrmError) -> Result<()> {
        match err {
            CrmError::Io(_) => Err(err),
            CrmError::DuplicateId(_) => {
                self.emit(&[CmdMessage::error(format!("{} (try again).", err))])
            }
            CrmError::CustomerNotFound(_) => self.emit(&[CmdMessage::error(err.to_string())]),
        }
    }

    fn finish(&mut self, result: Result<CmdResult>) -> Result<State> {
        match result {
            Ok(result) => self.emit(&result.messages)?,
            Err(err) => self.report(err)?,
        }
        Ok(State::Main)
    }

    fn end_of_input(&mut self) -> Result<State> {
        debug!("end of input, exiting");
        self.say("")?;
        self.say(FAREWELL)?;
        Ok(State::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestSession = Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

    fn session(script: &str, seed: bool) -> TestSession {
        let config = CrmConfig::default().with_seed(seed).with_color(false);
        Session::from_config(&config, Cursor::new(script.as_bytes().to_vec()), Vec::new())
            .unwrap()
    }

    /// Runs `script` against a seeded session, returning it and its output.
    fn run_script(script: &str) -> (TestSession, String) {
        let mut s = session(script, true);
        s.run().unwrap();
        let output = String::from_utf8(s.output.clone()).unwrap();
        (s, output)
    }

    fn store_len(s: &TestSession) -> usize {
        s.api().customer_count()
    }

    #[test]
    fn exit_prints_farewell() {
        let (_, out) = run_script("0\n");
        assert!(out.contains("Mini-CRM"));
        assert!(out.contains("Choose: "));
        assert!(out.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn end_of_input_at_main_menu_exits() {
        let (s, out) = run_script("");
        assert!(out.contains("Bye!"));
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn end_of_input_mid_add_drops_action() {
        let (s, out) = run_script("1\nDana\n");
        assert!(out.contains("Generated Customer id: C-0004"));
        assert!(out.contains("Bye!"));
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn unknown_choice_returns_to_menu() {
        let (s, out) = run_script("9\nhello\n0\n");
        assert_eq!(out.matches("Unknown choice").count(), 2);
        assert_eq!(out.matches("Mini-CRM").count(), 3);
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn add_then_show_new_customer() {
        let (s, out) = run_script("1\nDana\ndana@x.com\n3\nC-0004\n0\n");
        assert!(out.contains("Generated Customer id: C-0004"));
        assert!(out.contains("Customer added with id C-0004 and email."));
        assert!(out.contains("C-0004  Dana"));
        assert!(out.contains("emails: dana@x.com"));
        assert_eq!(store_len(&s), 4);
    }

    #[test]
    fn add_without_email() {
        let (s, out) = run_script("1\n  Eve  \n\n0\n");
        assert!(out.contains("Customer added with id C-0004."));
        let eve = s.api().get_customer(&"C-0004".into()).unwrap();
        assert_eq!(eve.name(), "Eve");
        assert!(eve.emails().is_empty());
    }

    #[test]
    fn sequential_adds_get_increasing_ids() {
        let (s, out) = run_script("1\nA\n\n1\nB\n\n1\nC\n\n0\n");
        for id in ["C-0004", "C-0005", "C-0006"] {
            assert!(out.contains(&format!("Generated Customer id: {}", id)));
        }
        assert_eq!(store_len(&s), 6);
    }

    #[test]
    fn show_missing_customer() {
        let (_, out) = run_script("3\nC-0099\n0\n");
        assert!(out.contains("Customer not found: C-0099"));
    }

    #[test]
    fn show_trims_the_id() {
        let (_, out) = run_script("3\n  C-0001 \n0\n");
        assert!(out.contains("C-0001  Alice"));
        assert!(out.contains("emails: alice@example.com"));
    }

    #[test]
    fn list_prints_one_line_per_customer_sorted() {
        let (_, out) = run_script("4\n0\n");
        let lines: Vec<&str> = out.lines().filter(|l| l.contains("emails: ")).collect();
        assert_eq!(lines.len(), 3);
        // the first line shares its row with the unechoed "Choose: " prompt
        assert!(lines[0].ends_with("C-0001 (Alice)    emails: 1, tags: 0, notes: 0"));
        assert!(lines[1].starts_with("C-0002 (Bob)"));
        assert!(lines[2].starts_with("C-0003 (Charlie)"));
    }

    #[test]
    fn list_empty_store() {
        let mut s = session("4\n0\n", false);
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("No customers."));
    }

    #[test]
    fn edit_add_tag_twice_keeps_one() {
        let (s, out) = run_script("2\nC-0001\n2\nvip\n2\nC-0001\n2\n vip \n0\n");
        assert!(out.contains("Edit customer: Alice"));
        assert_eq!(out.matches("Tag added.").count(), 2);
        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.tags(), ["vip"]);
    }

    #[test]
    fn edit_change_name() {
        let (s, _) = run_script("2\nC-0002\n1\n  Robert \n0\n");
        let bob = s.api().get_customer(&"C-0002".into()).unwrap();
        assert_eq!(bob.name(), "Robert");
    }

    #[test]
    fn edit_note_keeps_raw_text() {
        let (s, _) = run_script("2\nC-0001\n3\n  call back  \n0\n");
        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.notes(), ["  call back  "]);
    }

    #[test]
    fn edit_remove_missing_email() {
        let (s, out) = run_script("2\nC-0001\n7\nnobody@x.com\n0\n");
        assert!(out.contains("Email not found."));
        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.emails(), ["alice@example.com"]);
    }

    #[test]
    fn edit_remove_existing_email() {
        let (s, out) = run_script("2\nC-0001\n7\nalice@example.com\n0\n");
        assert!(out.contains("Email removed."));
        assert!(s
            .api()
            .get_customer(&"C-0001".into())
            .unwrap()
            .emails()
            .is_empty());
    }

    #[test]
    fn edit_unknown_customer() {
        let (_, out) = run_script("2\nC-0404\n0\n");
        assert!(out.contains("Customer not found: C-0404"));
        assert!(!out.contains("Edit customer:"));
    }

    #[test]
    fn edit_unknown_option_does_not_reprompt() {
        let (_, out) = run_script("2\nC-0001\n9\n0\n");
        assert!(out.contains("Unknown choice."));
        assert_eq!(out.matches("Choose option: ").count(), 1);
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn delete_with_yes() {
        let (s, out) = run_script("1\nDana\n\n5\nC-0002\nY\n3\nC-0002\n0\n");
        assert!(out.contains("Found customer:"));
        assert!(out.contains("C-0002  Bob"));
        assert!(out.contains("Customer has been deleted."));
        assert!(out.contains("Customer not found: C-0002"));
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn delete_with_no() {
        let (s, out) = run_script("1\nDana\n\n5\nC-0002\nn\n0\n");
        assert!(out.contains("Action cancelled."));
        assert_eq!(store_len(&s), 4);
    }

    #[test]
    fn delete_reprompts_until_yes_or_no() {
        let (s, out) = run_script("5\nC-0003\nmaybe\n\nyes\ny\n0\n");
        assert_eq!(out.matches("Invalid input. Please type Y or N.").count(), 3);
        assert_eq!(out.matches(CONFIRM_DELETE_PROMPT).count(), 4);
        assert_eq!(store_len(&s), 2);
    }

    #[test]
    fn delete_missing_customer() {
        let (s, out) = run_script("5\nC-0042\n0\n");
        assert!(out.contains("Customer not found: C-0042"));
        assert!(!out.contains(CONFIRM_DELETE_PROMPT));
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let (_, out) = run_script("1\nDana\n\n5\nC-0004\nY\n1\nEve\n\n0\n");
        assert!(out.contains("Generated Customer id: C-0005"));
    }

    #[test]
    fn end_of_input_during_confirmation() {
        let (s, out) = run_script("5\nC-0001\n");
        assert!(out.contains("Bye!"));
        assert_eq!(store_len(&s), 3);
    }

    #[test]
    fn step_transitions() {
        let mut s = session("2\nC-0001\n", true);
        let next = s.step(State::Main).unwrap();
        assert_eq!(next, State::Edit(CustomerId::from("C-0001")));

        let mut s = session("5\nC-0001\nx\nN\n", true);
        let confirm = s.step(State::Main).unwrap();
        assert_eq!(confirm, State::ConfirmDelete(CustomerId::from("C-0001")));
        let again = s.step(confirm).unwrap();
        assert_eq!(again, State::ConfirmDelete(CustomerId::from("C-0001")));
        assert_eq!(s.step(again).unwrap(), State::Main);

        assert_eq!(s.step(State::Exit).unwrap(), State::Exit);
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let (s, _) = run_script("2\r\nC-0001\r\n3\r\nnote\r\n0\r\n");
        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.notes(), ["note"]);
    }

    #[test]
    fn end_of_input_at_edit_value_prompt() {
        let (s, out) = run_script("2\nC-0001\n2\n");
        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.name(), "Alice");
        assert!(alice.tags().is_empty());
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut input = b"2\nC-0001\n3\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'x', b'\n']);
        input.extend_from_slice(b"4\n0\n");

        let config = CrmConfig::default().with_color(false);
        let mut s = Session::from_config(&config, Cursor::new(input), Vec::new()).unwrap();
        s.run().unwrap();
        let out = String::from_utf8(s.output.clone()).unwrap();

        let alice = s.api().get_customer(&"C-0001".into()).unwrap();
        assert_eq!(alice.notes(), ["\u{FFFD}\u{FFFD}x"]);
        assert!(out.contains("notes: 1"));
        assert!(out.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn taken_generated_id_is_shown_then_rejected() {
        use crate::model::Customer;
        use crate::store::IdSequence;

        let mut store = InMemoryStore::new();
        store
            .insert_customer(Customer::new("C-0004".into(), "Squatter"))
            .unwrap();
        let api = CrmApi::with_ids(store, IdSequence::starting_at(4));
        let mut s = Session::new(api, Cursor::new(b"1\n0\n".to_vec()), Vec::new(), false);
        s.run().unwrap();
        let out = String::from_utf8(s.output.clone()).unwrap();

        let generated = out.find("Generated Customer id: C-0004").unwrap();
        let rejected = out
            .find("Customer already exists: C-0004 (try again).")
            .unwrap();
        assert!(generated < rejected);
        assert!(!out.contains("Name: "));
        assert_eq!(store_len(&s), 1);
    }
}
