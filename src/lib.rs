pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::config::DemoConfig;
pub use crate::core::{
    collection::init_collection,
    demos::DemoKind,
    runner::{DemoReport, DemoRunner, TracingObserver},
};
pub use crate::utils::error::{LambdaError, Result};
