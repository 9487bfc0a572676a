use crate::domain::model::{LoggerBackend, Principle, WalkthroughPlan};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub walkthrough: WalkthroughSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkthroughSection {
    pub principles: Option<Vec<String>>,
    pub logger_backend: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the raw sections into a validated plan. Absent fields fall
    /// back to the same defaults the CLI uses: all principles, file backend,
    /// text output.
    pub fn plan(&self) -> Result<WalkthroughPlan> {
        let principles = match self.walkthrough.principles.as_deref() {
            None => Principle::ALL.to_vec(),
            Some(names) => resolve_principles(names)?,
        };

        let logger_backend = match self.walkthrough.logger_backend.as_deref() {
            None => LoggerBackend::File,
            Some(name) => name.parse()?,
        };

        let json = self.output.as_ref().and_then(|o| o.json).unwrap_or(false);

        Ok(WalkthroughPlan {
            principles,
            logger_backend,
            json,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(names) = &self.walkthrough.principles {
            resolve_principles(names)?;
        }
        if let Some(name) = &self.walkthrough.logger_backend {
            name.parse::<LoggerBackend>()?;
        }
        Ok(())
    }
}

/// Expands "all" and parses principle names, dropping duplicates while
/// keeping canonical order.
pub(crate) fn resolve_principles(names: &[String]) -> Result<Vec<Principle>> {
    if names.is_empty() {
        return Err(KataError::MissingConfigError {
            field: "principles".to_string(),
        });
    }

    let mut selected = Vec::new();

    for name in names {
        if name.trim().eq_ignore_ascii_case("all") {
            return Ok(Principle::ALL.to_vec());
        }
        let principle: Principle = name.parse()?;
        if !selected.contains(&principle) {
            selected.push(principle);
        }
    }

    selected.sort_by_key(|p| Principle::ALL.iter().position(|q| q == p));
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_toml_str() {
        let toml_content = r#"
            [walkthrough]
            principles = ["srp", "dip"]
            logger_backend = "database"

            [output]
            json = true
        "#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let plan = config.plan().unwrap();

        assert_eq!(
            plan.principles,
            vec![
                Principle::SingleResponsibility,
                Principle::DependencyInversion
            ]
        );
        assert_eq!(plan.logger_backend, LoggerBackend::Database);
        assert!(plan.json);
    }

    #[test]
    fn test_config_defaults_when_fields_absent() {
        let toml_content = r#"
            [walkthrough]
        "#;

        let plan = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .plan()
            .unwrap();

        assert_eq!(plan.principles, Principle::ALL.to_vec());
        assert_eq!(plan.logger_backend, LoggerBackend::File);
        assert!(!plan.json);
    }

    #[test]
    fn test_config_rejects_unknown_values() {
        let bad_backend = r#"
            [walkthrough]
            logger_backend = "syslog"
        "#;
        assert!(TomlConfig::from_toml_str(bad_backend).is_err());

        let bad_principle = r#"
            [walkthrough]
            principles = ["srp", "grasp"]
        "#;
        assert!(TomlConfig::from_toml_str(bad_principle).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[walkthrough]\nprinciples = [\"ocp\"]\nlogger_backend = \"file\""
        )
        .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let plan = config.plan().unwrap();

        assert_eq!(plan.principles, vec![Principle::OpenClosed]);
    }

    #[test]
    fn test_config_rejects_empty_principle_list() {
        let toml_content = r#"
            [walkthrough]
            principles = []
        "#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_resolve_principles_expands_all_and_dedupes() {
        let all = resolve_principles(&["all".to_string()]).unwrap();
        assert_eq!(all, Principle::ALL.to_vec());

        let deduped =
            resolve_principles(&["dip".to_string(), "srp".to_string(), "dip".to_string()])
                .unwrap();
        assert_eq!(
            deduped,
            vec![
                Principle::SingleResponsibility,
                Principle::DependencyInversion
            ]
        );
    }
}
