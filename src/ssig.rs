use crate::error::{Error, Result};
use closed01::Closed01;

/// Balances the mIoU and sGED distributions on RPLAN.
pub const DEFAULT_GAMMA: f32 = 0.4;

pub(crate) fn check_gamma(gamma: f32) -> Result<f32> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(Error::InvalidGamma(gamma))
    }
}

/// SSIG: `0.5 * (miou + sged^gamma)`.
///
/// `sged` is a graph similarity already in `[0, 1]` (see
/// [`EditDistance::similarity`](crate::EditDistance::similarity)), not a
/// distance. [`FloorPlanScorer`](crate::FloorPlanScorer) passes the
/// single-pair [`iou`](crate::iou) as `miou`; callers wanting a
/// class-averaged mask term can pass [`mean_iou`](crate::mean_iou) instead.
pub fn ssig(miou: Closed01<f32>, sged: Closed01<f32>, gamma: f32) -> Result<Closed01<f32>> {
    let gamma = check_gamma(gamma)?;
    let score = 0.5 * (miou.get() + sged.get().powf(gamma));
    Ok(Closed01::new(score.min(1.0)))
}
