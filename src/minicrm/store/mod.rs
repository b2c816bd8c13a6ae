//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the keyed collection of customers so that the
//! command layer never depends on a concrete container.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `HashMap`-backed storage, the only backend. Records
//!   live for the lifetime of the process.
//!
//! ## Ordering
//!
//! Stores make no promise about iteration order. Callers that display customers
//! sort by [`CustomerId`] themselves.
//!
//! ## Id Generation
//!
//! [`IdSequence`] hands out `C-%04d` ids from a counter that only moves forward.
//! Deleting a customer never frees its id for reuse.

use crate::error::Result;
use crate::model::{Customer, CustomerId};

pub mod memory;

/// Abstract interface for customer storage.
pub trait DataStore {
    /// Insert a new customer. Fails with `DuplicateId` if the id is taken.
    fn insert_customer(&mut self, customer: Customer) -> Result<()>;

    /// Get a customer by id
    fn get_customer(&self, id: &CustomerId) -> Result<&Customer>;

    /// Get a customer by id for in-place mutation
    fn get_customer_mut(&mut self, id: &CustomerId) -> Result<&mut Customer>;

    /// All customers, in no particular order
    fn list_customers(&self) -> Vec<&Customer>;

    /// Remove a customer, returning it
    fn delete_customer(&mut self, id: &CustomerId) -> Result<Customer>;

    fn contains(&self, id: &CustomerId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Monotonic generator of customer ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSequence {
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Starts one past the highest generated-style id already in `store`.
    pub fn after<S: DataStore>(store: &S) -> Self {
        let highest = store
            .list_customers()
            .iter()
            .filter_map(|c| c.id().number())
            .max()
            .unwrap_or(0);
        Self::starting_at(highest + 1)
    }

    /// Returns the current value formatted as an id, then advances.
    pub fn next_id(&mut self) -> CustomerId {
        let id = CustomerId::from_number(self.next);
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}
