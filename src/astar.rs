//! Exact edit distance by best-first search over node mappings.
//!
//! Nodes of the first graph are mapped in index order. Every search state is
//! a partial mapping with its accumulated cost and an admissible estimate of
//! the rest. The bipartite solver provides the initial upper bound; states
//! that cannot beat it are pruned.

use crate::bipartite::BipartiteSolver;
use crate::edit_distance::{EditDistance, EditDistanceSolver};
use crate::edit_problem::EditProblem;
use crate::error::{Error, Result};
use crate::graph_traits::AttributedGraph;
use crate::matching::MatchMode;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::iter;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSolver {
    max_expansions: Option<usize>,
}

impl AStarSolver {
    /// Unbounded search. Exponential in the worst case.
    pub fn new() -> AStarSolver {
        AStarSolver::default()
    }

    /// Stops after `max_expansions` states and returns the best edit path
    /// found so far, flagged as not exact.
    pub fn with_budget(max_expansions: Option<usize>) -> Result<AStarSolver> {
        if max_expansions == Some(0) {
            return Err(Error::InvalidBudget);
        }
        Ok(AStarSolver { max_expansions })
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

#[derive(Debug)]
struct State {
    cost: usize,
    bound: usize,
    mapping: Vec<Option<usize>>,
    used: Vec<bool>,
}

impl State {
    fn estimate(&self) -> usize {
        self.cost + self.bound
    }
}

// BinaryHeap is a max-heap: lowest estimate first, deeper states break ties.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate()
            .cmp(&self.estimate())
            .then_with(|| self.mapping.len().cmp(&other.mapping.len()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl EditDistanceSolver for AStarSolver {
    fn solve<G: AttributedGraph>(&self, a: &G, b: &G, mode: MatchMode) -> Result<EditDistance> {
        let problem = EditProblem::new(a, b, mode);
        let (n1, n2) = (problem.n1(), problem.n2());
        let finish = |distance: usize, exact: bool, expanded: usize| {
            debug!(distance, exact, expanded, "graph edit distance");
            EditDistance {
                distance,
                exact,
                expanded,
                nodes: (n1, n2),
            }
        };

        let root_used = vec![false; n2];
        if n1 == 0 {
            return Ok(finish(problem.completion_cost(&root_used), true, 0));
        }

        let initial = BipartiteSolver.node_mapping(&problem)?;
        let mut best = problem.path_cost(&initial);
        let root_bound = problem.lower_bound(0, &root_used);
        if best <= root_bound {
            return Ok(finish(best, true, 0));
        }

        let mut open = BinaryHeap::new();
        open.push(State {
            cost: 0,
            bound: root_bound,
            mapping: Vec::with_capacity(n1),
            used: root_used,
        });

        let mut expanded = 0;
        while let Some(state) = open.pop() {
            if state.estimate() >= best {
                break;
            }
            if let Some(max) = self.max_expansions {
                if expanded >= max {
                    warn!(
                        max_expansions = max,
                        distance = best,
                        "edit distance budget exhausted, returning upper bound"
                    );
                    return Ok(finish(best, false, expanded));
                }
            }
            expanded += 1;

            let depth = state.mapping.len();
            let targets = (0..n2)
                .filter(|&v| !state.used[v])
                .map(Some)
                .chain(iter::once(None));
            for target in targets {
                let cost = state.cost + problem.step_cost(&state.mapping, target);
                let mut used = state.used.clone();
                if let Some(v) = target {
                    used[v] = true;
                }

                if depth + 1 == n1 {
                    best = best.min(cost + problem.completion_cost(&used));
                    continue;
                }

                let bound = problem.lower_bound(depth + 1, &used);
                if cost + bound < best {
                    let mut mapping = state.mapping.clone();
                    mapping.push(target);
                    open.push(State {
                        cost,
                        bound,
                        mapping,
                        used,
                    });
                }
            }
        }

        Ok(finish(best, true, expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AccessGraph, GraphBuilder};

    const ROOM: u32 = 1;

    fn graph(num_nodes: usize, edges: &[(usize, usize)]) -> AccessGraph {
        let mut b = GraphBuilder::new();
        for i in 0..num_nodes {
            b.add_node(i, ROOM).unwrap();
        }
        for &(i, j) in edges {
            b.add_adjacency(i, j).unwrap();
        }
        b.graph()
    }

    #[test]
    fn zero_budget_is_invalid() {
        assert!(matches!(
            AStarSolver::with_budget(Some(0)),
            Err(Error::InvalidBudget)
        ));
        assert_eq!(None, AStarSolver::new().max_expansions());
    }

    #[test]
    fn path_versus_star() {
        // same node and edge counts, different wiring: one edge must move
        let path = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let star = graph(4, &[(0, 1), (0, 2), (0, 3)]);

        let d = AStarSolver::new()
            .solve(&path, &star, MatchMode::STRUCTURE)
            .unwrap();
        assert_eq!(2, d.distance);
        assert!(d.exact);
        assert_eq!((4, 4), d.nodes);
    }

    #[test]
    fn exhausted_budget_returns_upper_bound() {
        let path = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let star = graph(4, &[(0, 1), (0, 2), (0, 3)]);

        let d = AStarSolver::with_budget(Some(1))
            .unwrap()
            .solve(&path, &star, MatchMode::STRUCTURE)
            .unwrap();
        assert!(!d.exact);
        assert_eq!(1, d.expanded);
        assert!(d.distance >= 2);
    }

    #[test]
    fn first_graph_empty() {
        let empty = graph(0, &[]);
        let pair = graph(2, &[(0, 1)]);

        let d = AStarSolver::new()
            .solve(&empty, &pair, MatchMode::ATTRIBUTED)
            .unwrap();
        assert_eq!(3, d.distance);
        assert!(d.exact);
    }
}
