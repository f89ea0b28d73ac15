//! Check command implementation
//!
//! Verifies the payoff is continuous at every segment boundary and that the
//! sampled legs line up without overlapping.

use payoff_core::payoff::{ContinuityCheck, LogOptionPayoff, SampleSet, CONTINUITY_TOLERANCE};
use payoff_core::types::PayoffError;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Fail on the first boundary whose jump exceeds `tolerance`.
pub fn verify(checks: &[ContinuityCheck], tolerance: f64) -> Result<()> {
    match checks.iter().find(|check| !check.is_continuous(tolerance)) {
        Some(check) => Err(CliError::ContinuityViolation {
            boundary: check.boundary,
            gap: check.gap(),
        }),
        None => Ok(()),
    }
}

/// Fail if a sampled leg ends past the start of the next one.
pub fn verify_legs(series: &[SampleSet<f64>]) -> Result<()> {
    for pair in series.windows(2) {
        if let (Some((left_end, _)), Some((right_start, _))) = (pair[0].last(), pair[1].first()) {
            if left_end > right_start {
                return Err(PayoffError::NonContiguousSegments {
                    left_end,
                    right_start,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking payoff continuity (tolerance {:e})...", CONTINUITY_TOLERANCE);

    let payoff = LogOptionPayoff::default();
    let checks = payoff.continuity_checks()?;

    for check in &checks {
        if check.is_continuous(CONTINUITY_TOLERANCE) {
            info!(
                boundary = check.boundary,
                left = check.left_limit,
                right = check.right_value,
                "Boundary continuous"
            );
        } else {
            warn!(
                boundary = check.boundary,
                gap = check.gap(),
                "Boundary discontinuous"
            );
        }
        println!(
            "x = {:<10.6} left = {:<12.9} right = {:<12.9} gap = {:e}",
            check.boundary,
            check.left_limit,
            check.right_value,
            check.gap()
        );
    }

    verify(&checks, CONTINUITY_TOLERANCE)?;

    verify_legs(&payoff.sample()?)?;

    info!("All {} boundaries continuous", checks.len());
    Ok(())
}
