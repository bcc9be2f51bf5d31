//! Cost bookkeeping shared by the edit distance solvers.
//!
//! An edit path is described by a node mapping: entry `k` maps node `k` of
//! the first graph onto a node of the second graph (`Some`) or deletes it
//! (`None`). Nodes of the second graph outside the image are inserted.

use crate::graph_traits::{AttributedGraph, Category};
use crate::matching::MatchMode;
use ndarray::Array2;
use std::collections::BTreeMap;

#[derive(Debug)]
pub(crate) struct EditProblem {
    mode: MatchMode,
    cats1: Vec<Category>,
    cats2: Vec<Category>,
    adj1: Array2<Option<bool>>,
    adj2: Array2<Option<bool>>,
    edges1: Vec<(usize, usize, bool)>,
    edges2: Vec<(usize, usize, bool)>,
}

fn categories<G: AttributedGraph>(g: &G) -> Vec<Category> {
    (0..g.num_nodes()).map(|i| g.category(i)).collect()
}

fn adjacency(n: usize, edges: &[(usize, usize, bool)]) -> Array2<Option<bool>> {
    let mut adj = Array2::from_elem((n, n), None);
    for &(i, j, door) in edges {
        adj[[i, j]] = Some(door);
        adj[[j, i]] = Some(door);
    }
    adj
}

/// Door and adjacency-only edge counts.
#[derive(Debug, Default, Clone, Copy)]
struct EdgeTally {
    doors: usize,
    walls: usize,
}

impl EdgeTally {
    fn add(&mut self, door: bool) {
        if door {
            self.doors += 1;
        } else {
            self.walls += 1;
        }
    }

    fn total(&self) -> usize {
        self.doors + self.walls
    }

    /// Least number of edit operations to turn one edge multiset into the other.
    fn bound(&self, other: &EdgeTally, mode: MatchMode) -> usize {
        let free = if mode.edges {
            self.doors.min(other.doors) + self.walls.min(other.walls)
        } else {
            self.total().min(other.total())
        };
        self.total().max(other.total()) - free
    }
}

impl EditProblem {
    pub fn new<G: AttributedGraph>(a: &G, b: &G, mode: MatchMode) -> EditProblem {
        let edges1 = a.edge_list();
        let edges2 = b.edge_list();
        EditProblem {
            mode,
            cats1: categories(a),
            cats2: categories(b),
            adj1: adjacency(a.num_nodes(), &edges1),
            adj2: adjacency(b.num_nodes(), &edges2),
            edges1,
            edges2,
        }
    }

    pub fn n1(&self) -> usize {
        self.cats1.len()
    }

    pub fn n2(&self) -> usize {
        self.cats2.len()
    }

    /// Cost added by mapping node `mapping.len()` of the first graph onto
    /// `target`, given the nodes already mapped.
    pub fn step_cost(&self, mapping: &[Option<usize>], target: Option<usize>) -> usize {
        let k = mapping.len();
        let mut cost = self
            .mode
            .node_cost(Some(self.cats1[k]), target.map(|v| self.cats2[v]));
        for (j, &image) in mapping.iter().enumerate() {
            let e2 = match (target, image) {
                (Some(v), Some(w)) => self.adj2[[v, w]],
                _ => None,
            };
            cost += self.mode.edge_cost(self.adj1[[k, j]], e2);
        }
        cost
    }

    /// Cost of inserting whatever of the second graph was left unmapped.
    pub fn completion_cost(&self, used: &[bool]) -> usize {
        let nodes = used.iter().filter(|&&u| !u).count();
        let edges = self
            .edges2
            .iter()
            .filter(|&&(x, y, _)| !used[x] || !used[y])
            .count();
        nodes + edges
    }

    /// Total cost of the edit path induced by a complete node mapping.
    pub fn path_cost(&self, mapping: &[Option<usize>]) -> usize {
        debug_assert_eq!(mapping.len(), self.n1());
        let mut used = vec![false; self.n2()];
        let mut cost = 0;
        for (k, &target) in mapping.iter().enumerate() {
            cost += self.step_cost(&mapping[..k], target);
            if let Some(v) = target {
                used[v] = true;
            }
        }
        cost + self.completion_cost(&used)
    }

    /// Admissible estimate of the remaining cost once the first `depth`
    /// nodes are mapped and `used` marks their images.
    pub fn lower_bound(&self, depth: usize, used: &[bool]) -> usize {
        let mut left = BTreeMap::new();
        for &c in &self.cats1[depth..] {
            *left.entry(c).or_insert(0usize) += 1;
        }
        let mut right = BTreeMap::new();
        for (v, &c) in self.cats2.iter().enumerate() {
            if !used[v] {
                *right.entry(c).or_insert(0usize) += 1;
            }
        }
        let r1: usize = left.values().sum();
        let r2: usize = right.values().sum();
        let free_nodes: usize = if self.mode.nodes {
            left.iter()
                .map(|(c, &n)| n.min(right.get(c).copied().unwrap_or(0)))
                .sum()
        } else {
            r1.min(r2)
        };

        let mut e1 = EdgeTally::default();
        for &(_, j, door) in &self.edges1 {
            if j >= depth {
                e1.add(door);
            }
        }
        let mut e2 = EdgeTally::default();
        for &(x, y, door) in &self.edges2 {
            if !used[x] || !used[y] {
                e2.add(door);
            }
        }

        r1.max(r2) - free_nodes + e1.bound(&e2, self.mode)
    }

    /// Estimated cost of substituting node `i` by node `j`, counting half of
    /// the cheapest pairing of their incident edges.
    pub fn substitution_estimate(&self, i: usize, j: usize) -> f64 {
        let node = self
            .mode
            .node_cost(Some(self.cats1[i]), Some(self.cats2[j]));
        let star = Self::star(&self.adj1, i).bound(&Self::star(&self.adj2, j), self.mode);
        node as f64 + 0.5 * star as f64
    }

    pub fn deletion_estimate(&self, i: usize) -> f64 {
        1.0 + 0.5 * Self::star(&self.adj1, i).total() as f64
    }

    pub fn insertion_estimate(&self, j: usize) -> f64 {
        1.0 + 0.5 * Self::star(&self.adj2, j).total() as f64
    }

    fn star(adj: &Array2<Option<bool>>, node: usize) -> EdgeTally {
        let mut tally = EdgeTally::default();
        for door in adj.row(node).iter().flatten() {
            tally.add(*door);
        }
        tally
    }
}
