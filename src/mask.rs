//! Pixel-mask similarity between label images.

use crate::error::{Error, Result};
use crate::graph_traits::Category;
use closed01::Closed01;
use ndarray::{ArrayView2, ArrayView3};

/// Background code of RPLAN label images.
pub const RPLAN_BACKGROUND: Category = 12;

/// Which pixels count towards the union of two masks. Codes below `code`
/// are foreground; pixels equal to `code` count only when `include` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub code: Category,
    pub include: bool,
}

impl Default for Background {
    fn default() -> Self {
        Background {
            code: RPLAN_BACKGROUND,
            include: false,
        }
    }
}

impl Background {
    #[inline]
    fn selects(&self, c: Category) -> bool {
        c < self.code || (self.include && c == self.code)
    }
}

fn check_shapes(query: &ArrayView2<Category>, key: &ArrayView2<Category>) -> Result<()> {
    if query.dim() != key.dim() {
        return Err(Error::ShapeMismatch {
            query: query.dim(),
            key: key.dim(),
        });
    }
    Ok(())
}

/// Intersection-over-Union of two label images of the same shape.
///
/// A pixel is in the union if either image selects it (see [`Background`]);
/// it is in the intersection if it is in the union and both images agree.
pub fn iou(
    query: ArrayView2<Category>,
    key: ArrayView2<Category>,
    background: Background,
) -> Result<Closed01<f32>> {
    check_shapes(&query, &key)?;

    let mut union = 0usize;
    let mut intersection = 0usize;
    for (&q, &k) in query.iter().zip(key.iter()) {
        if background.selects(q) || background.selects(k) {
            union += 1;
            if q == k {
                intersection += 1;
            }
        }
    }

    if union == 0 {
        return Err(Error::EmptyUnion);
    }
    Ok(Closed01::new(intersection as f32 / union as f32))
}

/// IoU of `query` against every candidate, in candidate order. Stops at the
/// first candidate that cannot be scored.
pub fn ious<'a, I>(
    query: ArrayView2<Category>,
    keys: I,
    background: Background,
) -> Result<Vec<Closed01<f32>>>
where
    I: IntoIterator<Item = ArrayView2<'a, Category>>,
{
    keys.into_iter()
        .map(|key| iou(query.view(), key, background))
        .collect()
}

/// Like [`ious`] for candidates stacked along the first axis.
pub fn ious_stacked(
    query: ArrayView2<Category>,
    keys: ArrayView3<Category>,
    background: Background,
) -> Result<Vec<Closed01<f32>>> {
    ious(query, keys.outer_iter(), background)
}

/// Class-averaged IoU of a predicted segmentation against the ground truth.
///
/// Classes absent from `truth` are skipped; `smooth` is added to both
/// numerator and denominator of every per-class ratio and must be a
/// non-negative finite number.
pub fn mean_iou(
    pred: ArrayView2<Category>,
    truth: ArrayView2<Category>,
    classes: &[Category],
    smooth: f32,
) -> Result<Closed01<f32>> {
    check_shapes(&pred, &truth)?;
    if !(smooth.is_finite() && smooth >= 0.0) {
        return Err(Error::InvalidSmoothing(smooth));
    }

    let mut sum = 0.0f32;
    let mut present = 0usize;
    for &c in classes {
        let mut in_truth = 0usize;
        let mut intersection = 0usize;
        let mut union = 0usize;
        for (&p, &t) in pred.iter().zip(truth.iter()) {
            let (is_p, is_t) = (p == c, t == c);
            in_truth += is_t as usize;
            intersection += (is_p && is_t) as usize;
            union += (is_p || is_t) as usize;
        }
        if in_truth == 0 {
            continue;
        }
        sum += (intersection as f32 + smooth) / (union as f32 + smooth);
        present += 1;
    }

    if present == 0 {
        return Err(Error::NoClassesPresent);
    }
    Ok(Closed01::new((sum / present as f32).min(1.0)))
}
