//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual and the context string the
//! caller supplies, so a scenario that fails mid-script names the step.

use kettle_geom::ProfilePoint;
use kettle_types::DimensionSet;

use crate::helpers::HarnessError;

/// Assert two values agree within a tolerance.
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:.4} ± {:.4}, got {:.4}",
                ctx, expected, tol, actual,
            ),
        })
    }
}

/// Assert a value lies in an inclusive range.
pub fn assert_in_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {} = {:.4} outside [{:.4}, {:.4}]",
                ctx, name, value, min, max,
            ),
        })
    }
}

/// Assert the derived-height identity holds on a dimension set.
pub fn assert_height_identity(dim: &DimensionSet, ctx: &str) -> Result<(), HarnessError> {
    assert_close(
        dim.overall_height_mm,
        dim.body_height_mm + dim.head_height_mm - dim.head_neck_overlap_mm,
        0.01,
        ctx,
    )
}

/// Assert a silhouette rises monotonically and stays above the radius
/// floor.
pub fn assert_profile_sane(profile: &[ProfilePoint], ctx: &str) -> Result<(), HarnessError> {
    if profile.len() < 2 {
        return Err(HarnessError::AssertionFailed {
            detail: format!("[{}] profile has {} samples", ctx, profile.len()),
        });
    }
    for (i, pair) in profile.windows(2).enumerate() {
        if pair[1].height_mm < pair[0].height_mm {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] height drops {:.3} -> {:.3} at sample {}",
                    ctx, pair[0].height_mm, pair[1].height_mm, i + 1,
                ),
            });
        }
    }
    for (i, p) in profile.iter().enumerate() {
        if p.radius_mm < kettle_geom::MIN_PROFILE_RADIUS_MM {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] radius {:.3} below floor at sample {}",
                    ctx, p.radius_mm, i,
                ),
            });
        }
    }
    Ok(())
}
