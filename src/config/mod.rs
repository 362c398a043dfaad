use crate::core::write::DEFAULT_OUTPUT_FILE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "name-sorter")]
#[command(about = "Sorts a list of person names by last name, then given names")]
pub struct CliConfig {
    #[arg(
        value_name = "INPUT_FILE",
        help = "Path to the input file, one name per line"
    )]
    pub input_path: Option<String>,

    #[arg(
        long,
        default_value = "sequential",
        help = "Sort strategy: sequential, parallel or merge"
    )]
    pub sort_strategy: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, help = "Path for the file destination")]
    pub output_path: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "console,file",
        help = "Comma-separated destinations: console, file"
    )]
    pub write_to: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system resource monitoring")]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sort_strategy", &self.sort_strategy)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_list("write_to", &self.write_to)?;
        Ok(())
    }
}
