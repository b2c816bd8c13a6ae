//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every customer operation, whatever UI drives it.
//!
//! `CrmApi` owns the store and the id sequence. Business rules live in
//! `commands/*.rs`; the API only dispatches and returns structured `CmdResult`s. It
//! never writes to a terminal.
//!
//! ## Generic Over DataStore
//!
//! `CrmApi<S: DataStore>` works with any backend. The binary and the tests both use
//! `CrmApi<InMemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::model::{Customer, CustomerId};
use crate::seed;
use crate::store::{DataStore, IdSequence};

pub struct CrmApi<S: DataStore> {
    store: S,
    ids: IdSequence,
}

impl<S: DataStore> CrmApi<S> {
    /// Wraps `store`, continuing the id sequence after whatever it already holds.
    pub fn new(store: S) -> Self {
        let ids = IdSequence::after(&store);
        Self { store, ids }
    }

    /// Wraps `store` after loading the demo customers into it.
    pub fn seeded(mut store: S) -> Result<Self> {
        seed::load_demo_customers(&mut store)?;
        Ok(Self::new(store))
    }

    /// Wraps `store` with an explicit id sequence.
    pub fn with_ids(store: S, ids: IdSequence) -> Self {
        Self { store, ids }
    }

    /// Draws the next id. The counter advances whether or not the id turns out free.
    pub fn next_id(&mut self) -> CustomerId {
        commands::add::next_id(&mut self.ids)
    }

    pub fn ensure_id_free(&self, id: &CustomerId) -> Result<()> {
        commands::add::ensure_free(&self.store, id)
    }

    pub fn add_customer(
        &mut self,
        id: CustomerId,
        name: &str,
        email: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, id, name, email)
    }

    pub fn edit_customer(
        &mut self,
        id: &CustomerId,
        action: EditAction,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, action)
    }

    pub fn show_customer(&self, id: &CustomerId) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete_customer(&mut self, id: &CustomerId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn get_customer(&self, id: &CustomerId) -> Result<&Customer> {
        self.store.get_customer(id)
    }

    pub fn customer_count(&self) -> usize {
        self.store.len()
    }
}

pub use commands::{CmdMessage, CmdResult, EditAction, MessageLevel};
