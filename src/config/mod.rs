pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{LoggerBackend, WalkthroughPlan};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kata")]
#[command(about = "A guided tour of the SOLID principles as Rust trait hierarchies")]
pub struct CliConfig {
    /// Principles to demonstrate: comma-separated names (srp,ocp,lsp,isp,dip) or "all"
    #[arg(long, default_value = "all", value_delimiter = ',')]
    pub principles: Vec<String>,

    /// Logger backend the dependency-inversion demo injects: "file" or "database"
    #[arg(long, default_value = "file")]
    pub logger_backend: String,

    #[arg(long, help = "Emit demo reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Load walkthrough options from a TOML file instead")]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn plan(&self) -> Result<WalkthroughPlan> {
        let principles = toml_config::resolve_principles(&self.principles)?;
        let logger_backend: LoggerBackend = self.logger_backend.parse()?;

        Ok(WalkthroughPlan {
            principles,
            logger_backend,
            json: self.json,
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.plan()?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
