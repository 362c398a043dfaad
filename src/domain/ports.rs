use crate::domain::model::PersonName;
use crate::utils::error::Result;

/// Structural check over a whole batch of parsed names. Fails on the first
/// invalid record; an empty batch is valid.
pub trait NameValidator: Send + Sync {
    fn validate(&self, names: &[PersonName]) -> Result<()>;
}

/// Orders a batch of names by last name, then joined given names. Returns
/// a new sequence; the input is never mutated.
pub trait SortStrategy: Send + Sync {
    fn sort(&self, names: &[PersonName]) -> Vec<PersonName>;
}

/// Emits an already-sorted batch to one destination, one display-form name
/// per line.
pub trait WriteStrategy: Send + Sync {
    fn write(&self, names: &[PersonName]) -> Result<()>;
}
