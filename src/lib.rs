//! Similarity scores for generated floor plans.
//!
//! * mask similarity: Intersection-over-Union of two label images,
//! * graph similarity: graph edit distance (GED) between access graphs whose
//!   nodes are rooms and whose edges are door or adjacency connections,
//!   turned into a similarity by `sGED = exp(-2 GED / (|V1| + |V2|))`,
//! * SSIG, the composite `0.5 * (mIoU + sGED^gamma)`.

mod astar;
mod bipartite;
mod config;
mod edit_distance;
mod edit_problem;
mod error;
pub mod graph;
mod graph_traits;
mod mask;
mod matching;
mod score_norm;
mod scorer;
mod ssig;

use closed01::Closed01;
pub use {
    astar::*, bipartite::*, config::*, edit_distance::*, error::*, graph_traits::*, mask::*,
    matching::*, score_norm::*, scorer::*, ssig::*,
};

/// Exact graph edit distance, optionally normalized.
pub fn ged_score<G: AttributedGraph>(
    a: &G,
    b: &G,
    mode: MatchMode,
    norm: DistanceNorm,
) -> Result<f32> {
    AStarSolver::new().solve(a, b, mode)?.normalized(norm)
}

/// sGED of the exact graph edit distance.
pub fn sged_score<G: AttributedGraph>(a: &G, b: &G, mode: MatchMode) -> Result<Closed01<f32>> {
    AStarSolver::new().solve(a, b, mode)?.similarity()
}
