use anyhow::{Context, Result};

use folio_core::{AppConfig, Portfolio, SegmentMapper};
use folio_tui::themes::THEME_NAMES;

pub fn run(config: &AppConfig) -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("Config:    {} (ok)", config_path.display());
    } else {
        println!("Config:    {} (missing, using defaults)", config_path.display());
    }

    if !THEME_NAMES.contains(&config.ui.theme.as_str()) {
        println!(
            "Warning:   unknown theme \"{}\", expected one of {}",
            config.ui.theme,
            THEME_NAMES.join(", ")
        );
    }

    let portfolio_path = config.portfolio_path();
    let portfolio = Portfolio::load(&portfolio_path)
        .with_context(|| format!("Invalid portfolio at {}", portfolio_path.display()))?;
    let source = if portfolio_path.exists() {
        "ok"
    } else {
        "missing, using sample"
    };
    println!("Portfolio: {} ({})", portfolio_path.display(), source);

    let mapper =
        SegmentMapper::with_margin(portfolio.segment_count()?, config.showcase.clamp_margin);
    println!(
        "Showcase:  {} projects, {} rows each, clamp margin {}",
        mapper.count().get(),
        config.showcase.rows_per_project,
        mapper.margin()
    );

    Ok(())
}
