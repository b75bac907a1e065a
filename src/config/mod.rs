pub mod cli;
pub mod toml_config;

pub const DEFAULT_INPUT_PATH: &str = "../index.html";
pub const DEFAULT_OUTPUT_PATH: &str = "src/app/page.tsx";

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "html-to-page")]
#[command(about = "Convert a static HTML page into a Next.js page component")]
pub struct CliConfig {
    /// Source HTML document [default: ../index.html]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Page file to write [default: src/app/page.tsx]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Keep HTML comments in the generated page
    #[arg(long)]
    pub keep_comments: bool,

    /// Print the generated page instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the substitution rules as JSON and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn strip_comments(&self) -> bool {
        !self.keep_comments
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_io_paths(self.input_path(), self.output_path())
    }
}
