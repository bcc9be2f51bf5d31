use super::graph_traits::{AttributedGraph, Category, Edges};
use crate::error::{Error, Result};
use petgraph::{EdgeType, Graph as PetGraph};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct Edge {
    pointing_node: usize,
    door: bool,
}

impl Edge {
    pub fn new(node_idx: usize, door: bool) -> Edge {
        Edge {
            pointing_node: node_idx,
            door,
        }
    }

    pub fn target(&self) -> usize {
        self.pointing_node
    }

    pub fn is_door(&self) -> bool {
        self.door
    }
}

#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl Edges for EdgeList {
    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn nth_edge(&self, n: usize) -> Option<usize> {
        self.edges.get(n).map(Edge::target)
    }

    #[inline]
    fn nth_edge_door(&self, n: usize) -> Option<bool> {
        self.edges.get(n).map(Edge::is_door)
    }
}

/// A room of the floor plan together with its connections.
#[derive(Debug, Clone)]
pub struct Node {
    edges: EdgeList,
    category: Category,
}

impl Node {
    pub fn new(edges: EdgeList, category: Category) -> Node {
        Node { edges, category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    fn connects_to(&self, node_idx: usize) -> bool {
        self.edges.edges.iter().any(|e| e.target() == node_idx)
    }
}

/// Undirected access graph of a floor plan: nodes are rooms labelled with
/// their category, edges are door or adjacency connections.
#[derive(Debug, Clone, Default)]
pub struct AccessGraph {
    nodes: Vec<Node>,
    num_edges: usize,
}

impl AccessGraph {
    pub fn new() -> AccessGraph {
        AccessGraph::default()
    }

    /// Imports a `petgraph` graph. Directed graphs are read as undirected:
    /// a pair of opposite edges `a -> b`, `b -> a` collapses into one and the
    /// first door flag wins. Repeating an edge in the same direction, or any
    /// duplicate in an undirected graph, is a `DuplicateEdge` error.
    pub fn from_petgraph<Ty: EdgeType>(pg: &PetGraph<Category, bool, Ty>) -> Result<AccessGraph> {
        let mut graph = AccessGraph::new();
        for i in pg.node_indices() {
            graph.push_node(pg[i]);
        }
        let mut seen = BTreeSet::new();
        for edge in pg.raw_edges() {
            let (a, b) = (edge.source().index(), edge.target().index());
            if a == b {
                return Err(Error::SelfLoop(a.to_string()));
            }
            if !seen.insert((a, b)) {
                return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
            }
            if graph.nodes[a].connects_to(b) {
                if pg.is_directed() {
                    continue;
                }
                return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
            }
            graph.connect(a, b, edge.weight);
        }
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, category: Category) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(EdgeList::default(), category));
        idx
    }

    fn connect(&mut self, a: usize, b: usize, door: bool) {
        self.nodes[a].edges.edges.push(Edge::new(b, door));
        self.nodes[b].edges.edges.push(Edge::new(a, door));
        self.num_edges += 1;
    }
}

impl AttributedGraph for AccessGraph {
    type EDGE = EdgeList;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    fn category(&self, node_idx: usize) -> Category {
        self.nodes[node_idx].category()
    }

    #[inline]
    fn edges_of(&self, node_idx: usize) -> &Self::EDGE {
        &self.nodes[node_idx].edges
    }
}

/// Builds an [`AccessGraph`] from externally identified rooms.
#[derive(Debug)]
pub struct GraphBuilder<K: Ord + Debug> {
    // maps node_id to index into graph.nodes
    node_map: BTreeMap<K, usize>,
    graph: AccessGraph,
}

impl<K: Ord + Debug> Default for GraphBuilder<K> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl<K: Ord + Debug> GraphBuilder<K> {
    pub fn new() -> GraphBuilder<K> {
        GraphBuilder {
            node_map: BTreeMap::new(),
            graph: AccessGraph::new(),
        }
    }

    pub fn graph(self) -> AccessGraph {
        self.graph
    }

    /// Returns the dense index of the new node.
    pub fn add_node(&mut self, node_id: K, category: Category) -> Result<usize> {
        match self.node_map.entry(node_id) {
            Entry::Vacant(e) => {
                let next_id = self.graph.push_node(category);
                e.insert(next_id);
                Ok(next_id)
            }
            Entry::Occupied(e) => Err(Error::DuplicateNode(format!("{:?}", e.key()))),
        }
    }

    pub fn add_door(&mut self, a: K, b: K) -> Result<()> {
        self.add_edge(a, b, true)
    }

    pub fn add_adjacency(&mut self, a: K, b: K) -> Result<()> {
        self.add_edge(a, b, false)
    }

    pub fn add_edge(&mut self, a: K, b: K, door: bool) -> Result<()> {
        let a_idx = self.index_of(&a)?;
        let b_idx = self.index_of(&b)?;
        if a_idx == b_idx {
            return Err(Error::SelfLoop(format!("{:?}", a)));
        }
        if self.graph.nodes[a_idx].connects_to(b_idx) {
            return Err(Error::DuplicateEdge(format!("{:?}", a), format!("{:?}", b)));
        }
        self.graph.connect(a_idx, b_idx, door);
        Ok(())
    }

    fn index_of(&self, node_id: &K) -> Result<usize> {
        self.node_map
            .get(node_id)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", node_id)))
    }
}
