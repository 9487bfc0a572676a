use crate::utils::error::KataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five principles the walkthrough can demonstrate, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single-responsibility",
            Principle::OpenClosed => "open-closed",
            Principle::LiskovSubstitution => "liskov-substitution",
            Principle::InterfaceSegregation => "interface-segregation",
            Principle::DependencyInversion => "dependency-inversion",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility Principle",
            Principle::OpenClosed => "Open/Closed Principle",
            Principle::LiskovSubstitution => "Liskov Substitution Principle",
            Principle::InterfaceSegregation => "Interface Segregation Principle",
            Principle::DependencyInversion => "Dependency Inversion Principle",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Principle {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srp" | "single-responsibility" => Ok(Principle::SingleResponsibility),
            "ocp" | "open-closed" => Ok(Principle::OpenClosed),
            "lsp" | "liskov-substitution" => Ok(Principle::LiskovSubstitution),
            "isp" | "interface-segregation" => Ok(Principle::InterfaceSegregation),
            "dip" | "dependency-inversion" => Ok(Principle::DependencyInversion),
            other => Err(KataError::InvalidConfigValueError {
                field: "principles".to_string(),
                value: other.to_string(),
                reason: "expected one of: srp, ocp, lsp, isp, dip (or the full kebab-case names)"
                    .to_string(),
            }),
        }
    }
}

/// Which illustrative logger backend the dependency-inversion demo injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerBackend {
    File,
    Database,
}

impl fmt::Display for LoggerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerBackend::File => f.write_str("file"),
            LoggerBackend::Database => f.write_str("database"),
        }
    }
}

impl FromStr for LoggerBackend {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(LoggerBackend::File),
            "database" => Ok(LoggerBackend::Database),
            other => Err(KataError::InvalidConfigValueError {
                field: "logger_backend".to_string(),
                value: other.to_string(),
                reason: "expected 'file' or 'database'".to_string(),
            }),
        }
    }
}

/// Summary of one demonstration, emitted by the walkthrough runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub principle: Principle,
    pub headline: String,
    pub detail: String,
}

/// Fully resolved walkthrough options, produced from CLI or TOML configuration
/// after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkthroughPlan {
    pub principles: Vec<Principle>,
    pub logger_backend: LoggerBackend,
    pub json: bool,
}

impl crate::domain::ports::WalkthroughOptions for WalkthroughPlan {
    fn principles(&self) -> &[Principle] {
        &self.principles
    }

    fn logger_backend(&self) -> LoggerBackend {
        self.logger_backend
    }

    fn json_output(&self) -> bool {
        self.json
    }
}
