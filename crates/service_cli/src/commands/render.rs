//! Render command implementation
//!
//! Samples the log-option payoff and draws it to the configured output.

use payoff_chart::render::render;
use payoff_core::payoff::LogOptionPayoff;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the render command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Starting render...");
    info!("  Output: {}", config.output.display());
    info!("  Size: {}x{}", config.plot.width, config.plot.height);

    let payoff = LogOptionPayoff::default();
    let series = payoff.sample()?;
    info!("Evaluated {} segments", series.len());

    let layout = render(&series, &config.plot, &config.output)?;

    info!(
        x_ticks = layout.x_ticks.len(),
        y_ticks = layout.y_ticks.len(),
        features = layout.features().len(),
        "Render complete"
    );
    Ok(())
}
