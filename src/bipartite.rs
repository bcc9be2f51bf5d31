//! Approximate edit distance by optimal node assignment.
//!
//! Nodes are matched with the Hungarian method on a square cost matrix of
//! size `|V1| + |V2|`:
//!
//! ```text
//!            | V2            | insert
//!     -------+---------------+--------------
//!     V1     | substitutions | deletions (diagonal)
//!     delete | insertions    | 0
//! ```
//!
//! Substitution costs include half of the cheapest pairing of incident edges.
//! The returned distance is the true cost of the edit path induced by the
//! assignment, hence an upper bound of the exact distance.

use crate::edit_distance::{EditDistance, EditDistanceSolver};
use crate::edit_problem::EditProblem;
use crate::error::{Error, Result};
use crate::graph_traits::AttributedGraph;
use crate::matching::MatchMode;
use munkres::{solve_assignment, WeightMatrix};

/// Stands in for infinity, which the assignment solver cannot handle.
const FORBIDDEN: f64 = 1e9;

#[derive(Debug, Clone, Copy, Default)]
pub struct BipartiteSolver;

impl BipartiteSolver {
    pub(crate) fn node_mapping(&self, problem: &EditProblem) -> Result<Vec<Option<usize>>> {
        let (n1, n2) = (problem.n1(), problem.n2());
        if n1 == 0 || n2 == 0 {
            return Ok(vec![None; n1]);
        }

        let n = n1 + n2;
        let mut weights = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let w = match (row < n1, col < n2) {
                    (true, true) => problem.substitution_estimate(row, col),
                    (true, false) if col - n2 == row => problem.deletion_estimate(row),
                    (false, true) if row - n1 == col => problem.insertion_estimate(col),
                    (false, false) => 0.0,
                    _ => FORBIDDEN,
                };
                weights.push(w);
            }
        }

        let mut weights = WeightMatrix::from_row_vec(n, weights);
        let assignment = solve_assignment(&mut weights).map_err(Error::Assignment)?;

        let mut mapping = vec![None; n1];
        for pos in assignment {
            if pos.row < n1 && pos.column < n2 {
                mapping[pos.row] = Some(pos.column);
            }
        }
        Ok(mapping)
    }
}

impl EditDistanceSolver for BipartiteSolver {
    fn solve<G: AttributedGraph>(&self, a: &G, b: &G, mode: MatchMode) -> Result<EditDistance> {
        let problem = EditProblem::new(a, b, mode);
        let mapping = self.node_mapping(&problem)?;
        let distance = problem.path_cost(&mapping);
        let bound = problem.lower_bound(0, &vec![false; problem.n2()]);
        Ok(EditDistance {
            distance,
            exact: distance <= bound,
            expanded: 0,
            nodes: (problem.n1(), problem.n2()),
        })
    }
}
