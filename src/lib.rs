pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::service::Service;
pub use crate::core::walkthrough::{render_reports, Walkthrough};
pub use crate::domain::model::{DemoReport, LoggerBackend, Principle, WalkthroughPlan};
pub use crate::domain::ports::{AreaCalculator, Logger, Order, Shape, WalkthroughOptions};
pub use crate::utils::error::{KataError, Result};
