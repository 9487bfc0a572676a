//! Walkthrough runner: executes the demonstrations selected by the
//! configuration port and collects one report per principle.

use crate::adapters::loggers::{DatabaseLogger, FileLogger};
use crate::adapters::orders::DigitalOrder;
use crate::adapters::shapes::{Circle, Rectangle, Square, Triangle};
use crate::core::file_manager::{FileManager, FileParser, FileReader, FileWriter};
use crate::core::service::Service;
use crate::domain::model::{DemoReport, LoggerBackend, Principle};
use crate::domain::ports::{
    AreaCalculator, OrderShipper, PaymentProcessor, Shape, WalkthroughOptions,
};
use crate::utils::error::Result;

pub struct Walkthrough<C: WalkthroughOptions> {
    config: C,
}

impl<C: WalkthroughOptions> Walkthrough<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs the selected demonstrations in canonical order.
    pub fn run(&self) -> Result<Vec<DemoReport>> {
        let mut reports = Vec::new();

        for principle in Principle::ALL
            .iter()
            .copied()
            .filter(|p| self.config.principles().contains(p))
        {
            tracing::info!("Demonstrating: {}", principle.title());
            let report = match principle {
                Principle::SingleResponsibility => self.single_responsibility()?,
                Principle::OpenClosed => self.open_closed(),
                Principle::LiskovSubstitution => self.liskov_substitution(),
                Principle::InterfaceSegregation => self.interface_segregation(),
                Principle::DependencyInversion => self.dependency_inversion(),
            };
            reports.push(report);
        }

        Ok(reports)
    }

    fn single_responsibility(&self) -> Result<DemoReport> {
        let manager = FileManager::new();
        let content = manager.read_file("input.txt")?;
        manager.write_file("output.txt", &content)?;
        let records = manager.parse_file("input.txt")?;

        // The same three operations, one type each.
        let _ = FileReader::new().read_file("input.txt")?;
        FileWriter::new().write_file("output.txt", &content)?;
        let _ = FileParser::new().parse_file("input.txt")?;

        Ok(DemoReport {
            principle: Principle::SingleResponsibility,
            headline: "One type per responsibility beats one type with three".to_string(),
            detail: format!(
                "FileManager bundles read, write, and parse ({} records); \
                 FileReader, FileWriter, and FileParser carry one concern each",
                records.len()
            ),
        })
    }

    fn open_closed(&self) -> DemoReport {
        let calculators: [&dyn AreaCalculator; 2] = [&Rectangle, &Circle];
        let total: f64 = calculators.iter().map(|c| c.calculate_area()).sum();

        DemoReport {
            principle: Principle::OpenClosed,
            headline: "New variants extend the area capability without modifying it".to_string(),
            detail: format!(
                "{} variants computed a combined placeholder area of {}",
                calculators.len(),
                total
            ),
        }
    }

    fn liskov_substitution(&self) -> DemoReport {
        let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Triangle), Box::new(Square)];
        let areas: Vec<f64> = shapes.iter().map(|s| s.calculate_area()).collect();

        DemoReport {
            principle: Principle::LiskovSubstitution,
            headline: "Every variant stands in for the base shape capability".to_string(),
            detail: format!("substituted {} variants; areas: {:?}", shapes.len(), areas),
        }
    }

    fn interface_segregation(&self) -> DemoReport {
        let order = DigitalOrder;
        order.process_payment();
        order.ship_order();

        DemoReport {
            principle: Principle::InterfaceSegregation,
            headline: "Clients depend only on the interfaces they use".to_string(),
            detail: "DigitalOrder implements payment and shipping but not the stock check \
                     the wide order interface would force on it"
                .to_string(),
        }
    }

    fn dependency_inversion(&self) -> DemoReport {
        let backend = self.config.logger_backend();
        match backend {
            LoggerBackend::File => Service::new(FileLogger).do_something(),
            LoggerBackend::Database => Service::new(DatabaseLogger).do_something(),
        }

        DemoReport {
            principle: Principle::DependencyInversion,
            headline: "The service depends on the logging capability, not a backend".to_string(),
            detail: format!("performed the unit of work with the '{}' backend", backend),
        }
    }
}

/// Renders reports as human-readable text or pretty-printed JSON.
pub fn render_reports(reports: &[DemoReport], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "== {} ==\n{}\n{}\n\n",
            report.principle.title(),
            report.headline,
            report.detail
        ));
    }
    Ok(out)
}
