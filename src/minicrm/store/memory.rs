use super::DataStore;
use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert_customer(&mut self, customer: Customer) -> Result<()> {
        if self.customers.contains_key(customer.id()) {
            return Err(CrmError::DuplicateId(customer.id().clone()));
        }
        self.customers.insert(customer.id().clone(), customer);
        Ok(())
    }

    fn get_customer(&self, id: &CustomerId) -> Result<&Customer> {
        self.customers
            .get(id)
            .ok_or_else(|| CrmError::CustomerNotFound(id.clone()))
    }

    fn get_customer_mut(&mut self, id: &CustomerId) -> Result<&mut Customer> {
        self.customers
            .get_mut(id)
            .ok_or_else(|| CrmError::CustomerNotFound(id.clone()))
    }

    fn list_customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    fn delete_customer(&mut self, id: &CustomerId) -> Result<Customer> {
        self.customers
            .remove(id)
            .ok_or_else(|| CrmError::CustomerNotFound(id.clone()))
    }

    fn contains(&self, id: &CustomerId) -> bool {
        self.customers.contains_key(id)
    }

    fn len(&self) -> usize {
        self.customers.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` customers numbered from `C-0001`, each with one email.
        pub fn with_customers(mut self, count: u32) -> Self {
            for n in 1..=count {
                let mut customer =
                    Customer::new(CustomerId::from_number(n), &format!("Customer {}", n));
                customer.add_email(&format!("customer{}@example.com", n));
                self.store.insert_customer(customer).unwrap();
            }
            self
        }

        pub fn with_customer(mut self, id: &str, name: &str) -> Self {
            let customer = Customer::new(CustomerId::from(id), name);
            self.store.insert_customer(customer).unwrap();
            self
        }
    }
}
