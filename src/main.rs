use clap::Parser;
use name_sorter::core::sort::{create_sort_strategy, SortStrategyKind};
use name_sorter::core::write::{create_write_strategy, WriteStrategyKind};
use name_sorter::utils::{logger, validation::Validate};
use name_sorter::{CliConfig, NameSortProcessor, PersonNameValidator};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting name-sorter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // No input path means usage info only, not an error.
    let Some(input_path) = config.input_path.clone() else {
        println!("Usage: name-sorter <input-file-path>");
        return;
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let processor = build_processor(&config);

    match processor.process(&input_path) {
        Ok(()) => {
            tracing::info!("✅ Name sorting completed successfully!");
            println!("✅ Name sorting completed successfully!");
            let writes_file = config
                .write_to
                .iter()
                .any(|tag| WriteStrategyKind::from_tag(tag) == WriteStrategyKind::File);
            if writes_file {
                println!("📁 Output saved to: {}", config.output_path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Name sorting failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

/// Composition root: builds the validator, the configured sort strategy and
/// the write strategy list, and hands them to the processor.
fn build_processor(config: &CliConfig) -> NameSortProcessor<PersonNameValidator> {
    let sort_strategy = create_sort_strategy(SortStrategyKind::from_tag(&config.sort_strategy));
    let write_strategies = config
        .write_to
        .iter()
        .map(|tag| {
            create_write_strategy(
                WriteStrategyKind::from_tag(tag),
                Some(config.output_path.as_str()),
            )
        })
        .collect();

    NameSortProcessor::new_with_monitoring(
        PersonNameValidator,
        sort_strategy,
        write_strategies,
        config.monitor,
    )
}
