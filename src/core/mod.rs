pub mod parser;
pub mod processor;
pub mod sort;
pub mod validator;
pub mod write;

pub use crate::domain::model::PersonName;
pub use crate::domain::ports::{NameValidator, SortStrategy, WriteStrategy};
pub use crate::utils::error::Result;
