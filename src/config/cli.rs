use crate::config::DemoConfig;
use crate::core::demos::DemoKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_duplicates, validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "small-lambdas")]
#[command(about = "Closures, function paths and constructor paths as values")]
pub struct CliConfig {
    /// Optional TOML file overriding the demo inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Demo to run; repeat to run several. Runs all four when omitted
    #[arg(short, long = "demo", value_enum)]
    pub demos: Vec<DemoKind>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 未指定 --demo 時依序執行全部
    pub fn selected_demos(&self) -> Vec<DemoKind> {
        if self.demos.is_empty() {
            DemoKind::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }

    pub fn load_demo_config(&self) -> Result<DemoConfig> {
        match &self.config {
            Some(path) => DemoConfig::from_file(path),
            None => Ok(DemoConfig::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_no_duplicates("demo", &self.demos)
    }
}
