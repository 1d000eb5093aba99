use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use folio_core::{portfolio::sample_portfolio, AppConfig};

pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    let portfolio_path = config.portfolio_path();

    for path in [&config_path, &portfolio_path] {
        ensure_writable(path, force)?;
    }

    config.save_to(&config_path)?;
    info!("Wrote {}", config_path.display());
    println!("Config:    {}", config_path.display());

    sample_portfolio().save(&portfolio_path)?;
    info!("Wrote {}", portfolio_path.display());
    println!("Portfolio: {}", portfolio_path.display());

    println!("\nEdit the portfolio file, then run:");
    println!("  folio");
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse --force to overwrite it.",
            path.display()
        );
    }
    Ok(())
}
