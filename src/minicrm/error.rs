use crate::model::CustomerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Customer already exists: {0}")]
    DuplicateId(CustomerId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CrmError>;
