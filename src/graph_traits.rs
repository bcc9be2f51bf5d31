//! Traits that represent an abstract access graph upon which the edit distance operates.

use petgraph::{graph::NodeIndex, Graph as PetGraph, Undirected};

/// Room-type code of a node, or the category of a label-image pixel.
pub type Category = u32;

/// Abstract representation of the edges of a node. Used by the algorithm.
pub trait Edges {
    /// The number of edges
    fn num_edges(&self) -> usize;

    /// Returns the node at the other end of the nth edge
    fn nth_edge(&self, n: usize) -> Option<usize>;

    /// Returns whether the nth edge is a door connection (`false` means
    /// the rooms are merely adjacent).
    fn nth_edge_door(&self, n: usize) -> Option<bool>;
}

/// Abstract representation of an undirected, attributed graph. Node indices
/// are dense in `0..num_nodes()`.
pub trait AttributedGraph {
    type EDGE: Edges;

    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn category(&self, node_idx: usize) -> Category;
    fn edges_of(&self, node_idx: usize) -> &Self::EDGE;

    fn node_degree(&self, node_idx: usize) -> usize {
        self.edges_of(node_idx).num_edges()
    }

    /// The door flag of the edge between `a` and `b`, if there is one.
    fn door_between(&self, a: usize, b: usize) -> Option<bool> {
        let edges = self.edges_of(a);
        (0..edges.num_edges())
            .find(|&k| edges.nth_edge(k) == Some(b))
            .and_then(|k| edges.nth_edge_door(k))
    }

    /// Every edge once, as `(smaller index, larger index, door)`.
    fn edge_list(&self) -> Vec<(usize, usize, bool)> {
        let mut list = Vec::with_capacity(self.num_edges());
        for i in 0..self.num_nodes() {
            let edges = self.edges_of(i);
            for k in 0..edges.num_edges() {
                match (edges.nth_edge(k), edges.nth_edge_door(k)) {
                    (Some(j), Some(door)) if i < j => list.push((i, j, door)),
                    _ => {}
                }
            }
        }
        list
    }

    fn to_petgraph(&self) -> PetGraph<Category, bool, Undirected> {
        let mut graph = PetGraph::with_capacity(self.num_nodes(), self.num_edges());
        for i in 0..self.num_nodes() {
            let idx = graph.add_node(self.category(i));
            debug_assert!(idx.index() == i);
        }
        for (i, j, door) in self.edge_list() {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), door);
        }
        graph
    }
}
