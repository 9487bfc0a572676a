pub mod file_manager;
pub mod service;
pub mod walkthrough;

pub use crate::domain::model::{DemoReport, LoggerBackend, Principle, WalkthroughPlan};
pub use crate::domain::ports::{AreaCalculator, Logger, Shape, WalkthroughOptions};
pub use crate::utils::error::Result;
