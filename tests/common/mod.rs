#![allow(dead_code)]

use asexp::sexp::Sexp;
use floor_plan_similarity::graph::{AccessGraph, GraphBuilder};
use floor_plan_similarity::Category;
use graph_io_gml::parse_gml;
use std::fs::File;
use std::io::Read;

pub const LIVING: Category = 0;
pub const MASTER: Category = 1;
pub const KITCHEN: Category = 2;
pub const BATHROOM: Category = 3;
pub const BALCONY: Category = 9;

fn convert_category(n: Option<&Sexp>) -> Option<Category> {
    n.and_then(|se| se.get_float()).map(|f| f as Category)
}

fn convert_door(w: Option<&Sexp>) -> Option<bool> {
    match w {
        Some(s) => s.get_float().map(|f| f > 0.5),
        None => {
            // plain adjacency
            Some(false)
        }
    }
}

/// Loads a GML access graph: node weights are categories, edge weights
/// `1.0` for doors and `0.0` for adjacency.
pub fn load_graph(graph_file: &str) -> AccessGraph {
    let graph_str = {
        let mut graph_file = File::open(graph_file).unwrap();
        let mut graph_str = String::new();
        let _ = graph_file.read_to_string(&mut graph_str).unwrap();
        graph_str
    };

    let graph = parse_gml(&graph_str, &convert_category, &convert_door).unwrap();
    AccessGraph::from_petgraph(&graph).unwrap()
}

/// Builds a graph from `(category)` nodes indexed by position and
/// `(a, b, door)` edges.
pub fn graph(categories: &[Category], edges: &[(usize, usize, bool)]) -> AccessGraph {
    let mut b = GraphBuilder::new();
    for (i, &c) in categories.iter().enumerate() {
        b.add_node(i, c).unwrap();
    }
    for &(i, j, door) in edges {
        b.add_edge(i, j, door).unwrap();
    }
    b.graph()
}

/// A small apartment: living room connected to everything by doors, the
/// balcony also adjacent to the master bedroom.
pub fn apartment() -> AccessGraph {
    graph(
        &[LIVING, MASTER, KITCHEN, BATHROOM, BALCONY],
        &[
            (0, 1, true),
            (0, 2, true),
            (0, 3, true),
            (0, 4, true),
            (1, 4, false),
        ],
    )
}
