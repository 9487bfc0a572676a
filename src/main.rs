use clap::Parser;
use solid_kata::utils::{logger, validation::Validate};
use solid_kata::{render_reports, CliConfig, TomlConfig, Walkthrough};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting solid-kata walkthrough");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(2);
    }

    let plan = match &cli.config {
        Some(path) => {
            tracing::info!("Loading walkthrough options from {}", path);
            match TomlConfig::from_file(path).and_then(|c| c.plan()) {
                Ok(plan) => plan,
                Err(e) => {
                    tracing::error!("Failed to load config file: {}", e);
                    eprintln!("{}", e.user_friendly_message());
                    eprintln!("Suggestion: {}", e.recovery_suggestion());
                    std::process::exit(exit_code(&e));
                }
            }
        }
        None => cli.plan()?,
    };

    let json = plan.json || cli.json;
    let walkthrough = Walkthrough::new(plan);

    match walkthrough.run() {
        Ok(reports) => {
            tracing::info!("Walkthrough completed: {} demonstrations", reports.len());
            print!("{}", render_reports(&reports, json)?);
        }
        Err(e) => {
            tracing::error!("Walkthrough failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn exit_code(e: &solid_kata::KataError) -> i32 {
    match e.severity() {
        solid_kata::utils::error::ErrorSeverity::Low => 0,
        solid_kata::utils::error::ErrorSeverity::Medium => 2,
        solid_kata::utils::error::ErrorSeverity::High => 1,
        solid_kata::utils::error::ErrorSeverity::Critical => 3,
    }
}
