//! Remap command implementation.

use std::path::PathBuf;

use super::generate::read_configuration;
use crate::domain::AppError;
use crate::domain::paths::LOCALDEV_CONFIG_FILE;

pub fn run_remap(config: Option<PathBuf>, dest: Option<PathBuf>) -> Result<(), AppError> {
    let configuration = read_configuration(config)?;
    let dest = match dest {
        Some(dest) => dest,
        None => std::env::current_dir()?,
    };

    let finalized = crate::app::api::remap_at(&dest, &configuration)?;

    println!(
        "✅ Regrouped {} instance(s) in {}",
        finalized.extraction.credentials.len(),
        LOCALDEV_CONFIG_FILE
    );
    for prefix in finalized.mappings.prefixes() {
        println!("  • {}", prefix);
    }

    let dropped: Vec<&str> = finalized.extraction.dropped_keys().collect();
    if !dropped.is_empty() {
        println!("\n⚠️  Dropped {} credential key(s):", dropped.len());
        for key in dropped {
            println!("  • {}", key);
        }
    }
    Ok(())
}
