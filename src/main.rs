//! partbench - Electronic component catalog
//!
//! Encodes resistor color codes and applies component parameters from
//! CSV files and spreadsheets.

use partbench::{config::Config, error::Result, CatalogApp};
use tracing::{error, info};

fn main() -> Result<()> {
    // Parse configuration and initialize logging
    let config = Config::from_args().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    info!("Running {:?}", config.action);

    let mut app = CatalogApp::new(config);
    let stdout = std::io::stdout();

    match app.run(&mut stdout.lock()) {
        Ok(()) => {
            info!("Selected component: {}", app.store().selected());
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
