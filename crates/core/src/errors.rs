use thiserror::Error;

/// Failures the catalog store can signal.
///
/// Lookups by id are the only fallible operations; every other input is
/// defaulted rather than rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no product with id {id}")]
    NotFound { id: u64 },
}
