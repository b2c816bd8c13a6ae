use crate::error::Result;
use crate::model::{Customer, CustomerId};
use crate::store::DataStore;
use tracing::debug;

/// Demo customers present at startup: (number, name, email).
const DEMO_CUSTOMERS: &[(u32, &str, &str)] = &[
    (1, "Alice", "alice@example.com"),
    (2, "Bob", "bob@example.com"),
    (3, "Charlie", "charlie@example.com"),
];

pub fn demo_customers() -> Vec<Customer> {
    DEMO_CUSTOMERS
        .iter()
        .map(|&(n, name, email)| {
            let mut customer = Customer::new(CustomerId::from_number(n), name);
            customer.add_email(email);
            customer
        })
        .collect()
}

pub fn load_demo_customers<S: DataStore>(store: &mut S) -> Result<()> {
    for customer in demo_customers() {
        debug!(id = %customer.id(), "seeding customer");
        store.insert_customer(customer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::IdSequence;

    #[test]
    fn test_seeds_three_customers() {
        let mut store = InMemoryStore::new();
        load_demo_customers(&mut store).unwrap();
        assert_eq!(store.len(), 3);

        let bob = store.get_customer(&"C-0002".into()).unwrap();
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.emails(), ["bob@example.com"]);
        assert!(bob.tags().is_empty());
        assert!(bob.notes().is_empty());
    }

    #[test]
    fn test_counter_starts_after_seed() {
        let mut store = InMemoryStore::new();
        load_demo_customers(&mut store).unwrap();
        assert_eq!(IdSequence::after(&store).peek(), 4);
    }

    #[test]
    fn test_seeding_twice_fails() {
        let mut store = InMemoryStore::new();
        load_demo_customers(&mut store).unwrap();
        assert!(load_demo_customers(&mut store).is_err());
    }
}
