pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::processor::NameSortProcessor;
pub use crate::core::sort::{create_sort_strategy, SortStrategyKind};
pub use crate::core::validator::PersonNameValidator;
pub use crate::core::write::{create_write_strategy, WriteStrategyKind, DEFAULT_OUTPUT_FILE};
pub use crate::domain::model::PersonName;
pub use crate::domain::ports::{NameValidator, SortStrategy, WriteStrategy};
pub use crate::utils::error::{Result, SorterError};
