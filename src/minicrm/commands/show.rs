use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CustomerId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &CustomerId) -> Result<CmdResult> {
    let customer = store.get_customer(id)?.clone();
    Ok(CmdResult::default().with_listed_customers(vec![customer]))
}
