use crate::commands::{CmdMessage, MessageLevel};
use crate::model::Customer;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NONE_MARKER: &str = "(none)";

/// Full record, one field per line.
pub fn format_customer(customer: &Customer) -> String {
    let mut out = format!("{}  {}\n", customer.id(), customer.name());
    out.push_str(&format!("  emails: {}\n", join_or_none(customer.emails())));
    out.push_str(&format!("  tags:   {}\n", join_or_none(customer.tags())));
    if customer.notes().is_empty() {
        out.push_str(&format!("  notes:  {}", NONE_MARKER));
    } else {
        out.push_str("  notes:");
        for note in customer.notes() {
            out.push_str(&format!("\n    - {}", note));
        }
    }
    out
}

/// One summary line per customer, names padded to a common display width.
pub fn format_customer_list(customers: &[Customer]) -> Vec<String> {
    let name_width = customers
        .iter()
        .map(|c| c.name().width())
        .max()
        .unwrap_or(0);

    customers
        .iter()
        .map(|c| {
            let padding = name_width.saturating_sub(c.name().width());
            format!(
                "{} ({}){}  emails: {}, tags: {}, notes: {}",
                c.id(),
                c.name(),
                " ".repeat(padding),
                c.emails().len(),
                c.tags().len(),
                c.notes().len()
            )
        })
        .collect()
}

pub fn format_message(message: &CmdMessage, color: bool) -> String {
    if !color {
        return message.content.clone();
    }
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_MARKER.to_string()
    } else {
        values.join(", ")
    }
}
