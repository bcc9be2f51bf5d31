use crate::astar::AStarSolver;
use crate::config::ScoringConfig;
use crate::edit_distance::{EditDistance, EditDistanceSolver};
use crate::error::Result;
use crate::graph_traits::{AttributedGraph, Category};
use crate::mask::{iou, ious};
use crate::ssig::ssig;
use closed01::Closed01;
use ndarray::ArrayView2;
use tracing::trace;

/// A floor plan as seen by the scorer: its label image and access graph.
#[derive(Debug)]
pub struct FloorPlan<'a, G> {
    pub image: ArrayView2<'a, Category>,
    pub graph: &'a G,
}

impl<'a, G> FloorPlan<'a, G> {
    pub fn new(image: ArrayView2<'a, Category>, graph: &'a G) -> Self {
        FloorPlan { image, graph }
    }
}

/// Scores of one floor-plan pair.
#[derive(Debug, Clone, Copy)]
pub struct FloorPlanSimilarity {
    /// Single-pair, background-aware [`iou`] of the two label images. This
    /// is the mask term fed to SSIG, not the class-averaged
    /// [`mean_iou`](crate::mean_iou).
    pub iou: Closed01<f32>,
    pub sged: Closed01<f32>,
    pub ssig: Closed01<f32>,
    pub ged: EditDistance,
}

/// Scores floor-plan pairs with a fixed configuration.
#[derive(Debug, Clone)]
pub struct FloorPlanScorer<S = AStarSolver> {
    config: ScoringConfig,
    solver: S,
}

impl FloorPlanScorer<AStarSolver> {
    /// Uses the exact solver, bounded by `config.max_expansions`.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        let solver = AStarSolver::with_budget(config.max_expansions)?;
        FloorPlanScorer::with_solver(config, solver)
    }
}

impl<S: EditDistanceSolver> FloorPlanScorer<S> {
    /// Scores with `solver` as given. `config.max_expansions` is validated
    /// but not applied; a budget belongs to the solver passed in.
    pub fn with_solver(config: ScoringConfig, solver: S) -> Result<Self> {
        config.validate()?;
        Ok(FloorPlanScorer { config, solver })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score<G: AttributedGraph>(
        &self,
        reference: FloorPlan<G>,
        generated: FloorPlan<G>,
    ) -> Result<FloorPlanSimilarity> {
        let iou = iou(reference.image, generated.image, self.config.background())?;
        let ged = self
            .solver
            .solve(reference.graph, generated.graph, self.config.match_mode())?;
        let sged = ged.similarity()?;
        let ssig = ssig(iou, sged, self.config.gamma)?;
        trace!(
            iou = iou.get(),
            ged = ged.distance,
            exact = ged.exact,
            ssig = ssig.get(),
            "scored floor plan pair"
        );
        Ok(FloorPlanSimilarity {
            iou,
            sged,
            ssig,
            ged,
        })
    }

    /// IoU of one image against many candidates, in candidate order.
    pub fn iou_batch<'a, I>(
        &self,
        query: ArrayView2<Category>,
        candidates: I,
    ) -> Result<Vec<Closed01<f32>>>
    where
        I: IntoIterator<Item = ArrayView2<'a, Category>>,
    {
        ious(query, candidates, self.config.background())
    }
}
