use anyhow::Result;

use folio_core::{AppConfig, Portfolio, SegmentMapper};

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let portfolio = Portfolio::load(&config.portfolio_path())?;

    if json {
        println!("{}", portfolio.to_json()?);
        return Ok(());
    }

    let mapper =
        SegmentMapper::with_margin(portfolio.segment_count()?, config.showcase.clamp_margin);

    println!("Projects ({}):\n", portfolio.projects.len());

    for (i, (project, checkpoint)) in portfolio
        .projects
        .iter()
        .zip(mapper.checkpoints())
        .enumerate()
    {
        println!("  {:02}. {}  [checkpoint {:.0}%]", i + 1, project.title, checkpoint * 100.0);
        if !project.tech.is_empty() {
            println!("    Tech: {}", project.tech.join(", "));
        }
        if let Some(github) = &project.github {
            println!("    GitHub: {}", github);
        }
        if let Some(demo) = &project.demo {
            println!("    Demo: {}", demo);
        }
        println!();
    }

    Ok(())
}
