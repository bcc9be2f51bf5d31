use crate::error::{Error, Result};
use crate::graph_traits::AttributedGraph;
use crate::matching::MatchMode;
use crate::score_norm::DistanceNorm;
use closed01::Closed01;

/// Outcome of an edit distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistance {
    /// Number of unit-cost edit operations.
    pub distance: usize,
    /// `false` when the distance is only an upper bound, e.g. because the
    /// search budget ran out or an approximate solver was used.
    pub exact: bool,
    /// Search states expanded to find the distance.
    pub expanded: usize,
    /// Node counts of the two compared graphs.
    pub nodes: (usize, usize),
}

impl EditDistance {
    /// The distance, optionally divided by `|V1| * |V2|`.
    pub fn normalized(&self, norm: DistanceNorm) -> Result<f32> {
        match norm {
            DistanceNorm::Raw => Ok(self.distance as f32),
            DistanceNorm::NodeProduct => {
                let (n1, n2) = self.nonempty_nodes()?;
                Ok(self.distance as f32 / (n1 * n2) as f32)
            }
        }
    }

    /// sGED: `exp(-2 * GED / (|V1| + |V2|))`. Identical graphs score 1.
    pub fn similarity(&self) -> Result<Closed01<f32>> {
        let (n1, n2) = self.nonempty_nodes()?;
        let s = (-2.0 * self.distance as f32 / (n1 + n2) as f32).exp();
        Ok(Closed01::new(s))
    }

    fn nonempty_nodes(&self) -> Result<(usize, usize)> {
        match self.nodes {
            (0, _) | (_, 0) => Err(Error::EmptyGraph),
            nodes => Ok(nodes),
        }
    }
}

/// Computes the edit distance between two attributed graphs under the
/// unit cost model of [`MatchMode`].
pub trait EditDistanceSolver {
    fn solve<G: AttributedGraph>(&self, a: &G, b: &G, mode: MatchMode) -> Result<EditDistance>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn distance(distance: usize, nodes: (usize, usize)) -> EditDistance {
        EditDistance {
            distance,
            exact: true,
            expanded: 0,
            nodes,
        }
    }

    #[test]
    fn normalization() {
        let d = distance(3, (2, 4));
        assert_eq!(3.0, d.normalized(DistanceNorm::Raw).unwrap());
        assert_relative_eq!(0.375, d.normalized(DistanceNorm::NodeProduct).unwrap());
    }

    #[test]
    fn similarity_transform() {
        assert_eq!(1.0, distance(0, (3, 3)).similarity().unwrap().get());
        assert_relative_eq!(
            (-0.5f32).exp(),
            distance(2, (4, 4)).similarity().unwrap().get()
        );
    }

    #[test]
    fn empty_graphs_are_rejected() {
        let d = distance(3, (0, 2));
        assert!(matches!(d.similarity(), Err(Error::EmptyGraph)));
        assert!(matches!(
            d.normalized(DistanceNorm::NodeProduct),
            Err(Error::EmptyGraph)
        ));
        assert_eq!(3.0, d.normalized(DistanceNorm::Raw).unwrap());
    }
}
