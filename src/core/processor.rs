use crate::core::parser;
use crate::domain::ports::{NameValidator, SortStrategy, WriteStrategy};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::fs;
use std::path::Path;

/// Orchestrates one run of the pipeline: read, parse, validate, sort, then
/// fan out to every configured write strategy. Fail-fast at every step;
/// nothing is written once a step has failed. Holds no state across runs.
pub struct NameSortProcessor<V: NameValidator> {
    validator: V,
    sort_strategy: Box<dyn SortStrategy>,
    write_strategies: Vec<Box<dyn WriteStrategy>>,
    monitor: SystemMonitor,
}

impl<V: NameValidator> NameSortProcessor<V> {
    pub fn new(
        validator: V,
        sort_strategy: Box<dyn SortStrategy>,
        write_strategies: Vec<Box<dyn WriteStrategy>>,
    ) -> Self {
        Self::new_with_monitoring(validator, sort_strategy, write_strategies, false)
    }

    pub fn new_with_monitoring(
        validator: V,
        sort_strategy: Box<dyn SortStrategy>,
        write_strategies: Vec<Box<dyn WriteStrategy>>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            validator,
            sort_strategy,
            write_strategies,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn process(&self, input_path: impl AsRef<Path>) -> Result<()> {
        let input_path = input_path.as_ref();
        tracing::info!("Starting processing for file: {}", input_path.display());

        let contents = fs::read_to_string(input_path)?;
        let names = parser::parse_names(&contents);
        tracing::info!("Parsed {} names from input", names.len());
        self.monitor.log_stats("Parse");

        self.validator.validate(&names)?;
        tracing::info!("Validation completed");
        self.monitor.log_stats("Validate");

        let sorted = self.sort_strategy.sort(&names);
        tracing::info!("Sorted {} names", sorted.len());
        self.monitor.log_stats("Sort");

        for writer in &self.write_strategies {
            writer.write(&sorted)?;
        }
        tracing::info!(
            "Output written to {} destination(s)",
            self.write_strategies.len()
        );
        self.monitor.log_final_stats();

        Ok(())
    }
}
