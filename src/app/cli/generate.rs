//! Generate command implementation.

use std::io::Read;
use std::path::PathBuf;

use crate::app::api::{self, GenerateOutcome, GenerationReport};
use crate::domain::{AppError, ApplicationInjection, ServiceConfiguration};

pub fn run_generate(
    config: Option<PathBuf>,
    dest: Option<PathBuf>,
    standalone: bool,
    json: bool,
) -> Result<(), AppError> {
    let configuration = read_configuration(config)?;
    let dest = match dest {
        Some(dest) => dest,
        None => std::env::current_dir()?,
    };

    if standalone {
        let report = api::generate_standalone_at(&dest, &configuration)?;
        if json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }
        return Ok(());
    }

    let outcome = api::generate_at(&dest, &configuration)?;
    if json {
        print_json(&outcome)
    } else {
        print_report(&outcome.report);
        print_parent(&outcome);
        Ok(())
    }
}

pub(super) fn read_configuration(path: Option<PathBuf>) -> Result<ServiceConfiguration, AppError> {
    match path {
        Some(path) => api::read_service_configuration(&path),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            ServiceConfiguration::from_json_str(&content, "<stdin>")
        }
    }
}

fn print_json<S: serde::Serialize>(value: &S) -> Result<(), AppError> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| AppError::json("<report>", e))?;
    println!("{}", content);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    if report.services.is_empty() {
        println!("✅ No services enabled; wrote empty credential mappings");
    } else {
        println!("✅ Generated {} service(s)", report.services.len());
        for (i, key) in report.services.iter().enumerate() {
            println!("  {}. {}", i + 1, key);
        }
    }

    println!("\nFiles:");
    for file in &report.files {
        println!("  • {}", file);
    }

    let dropped = report.dropped_keys();
    if !dropped.is_empty() {
        println!("\n⚠️  Dropped {} credential key(s):", dropped.len());
        for key in dropped {
            println!("  • {}", key);
        }
    }
}

fn print_parent(outcome: &GenerateOutcome) {
    let parent = &outcome.parent;
    if !parent.dependencies.is_empty() {
        println!("\nPackage dependencies:");
        for dependency in &parent.dependencies {
            println!("  {}", dependency);
        }
    }
    if !parent.modules.is_empty() {
        println!("\nTarget modules:");
        println!("  {}", parent.modules.join(", "));
    }
    if !parent.application.is_empty() {
        println!("\nApplication code:");
        for injection in &parent.application {
            let slot = match injection {
                ApplicationInjection::ServiceImport(_) => "import",
                ApplicationInjection::ServiceVariable(_) => "variable",
                ApplicationInjection::Service(_) => "init",
            };
            println!("  [{}] {}", slot, injection.code());
        }
    }
}
