use crate::graph_traits::Category;

/// Selects which attributes take part in substitution costs. A disabled
/// attribute is ignored, so substituting on that dimension is always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchMode {
    /// Compare room categories of substituted nodes.
    pub nodes: bool,
    /// Compare door flags of substituted edges.
    pub edges: bool,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::ATTRIBUTED
    }
}

impl MatchMode {
    pub const ATTRIBUTED: MatchMode = MatchMode {
        nodes: true,
        edges: true,
    };

    /// Pure topology.
    pub const STRUCTURE: MatchMode = MatchMode {
        nodes: false,
        edges: false,
    };

    pub fn new(nodes: bool, edges: bool) -> MatchMode {
        MatchMode { nodes, edges }
    }

    /// Cost of mapping node `i` onto node `j`, where `None` stands for
    /// deletion or insertion.
    #[inline]
    pub fn node_cost(&self, i: Option<Category>, j: Option<Category>) -> usize {
        match (i, j) {
            (Some(a), Some(b)) => (self.nodes && a != b) as usize,
            (None, None) => 0,
            _ => 1,
        }
    }

    /// Cost of mapping an edge (or its absence, `None`) onto another.
    #[inline]
    pub fn edge_cost(&self, e1: Option<bool>, e2: Option<bool>) -> usize {
        match (e1, e2) {
            (Some(a), Some(b)) => (self.edges && a != b) as usize,
            (None, None) => 0,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_attributes_are_free() {
        assert_eq!(1, MatchMode::ATTRIBUTED.node_cost(Some(1), Some(2)));
        assert_eq!(0, MatchMode::new(false, true).node_cost(Some(1), Some(2)));
        assert_eq!(1, MatchMode::ATTRIBUTED.edge_cost(Some(true), Some(false)));
        assert_eq!(0, MatchMode::STRUCTURE.edge_cost(Some(true), Some(false)));
    }

    #[test]
    fn insertion_and_deletion_cost_one() {
        let mode = MatchMode::STRUCTURE;
        assert_eq!(1, mode.node_cost(Some(4), None));
        assert_eq!(1, mode.node_cost(None, Some(4)));
        assert_eq!(1, mode.edge_cost(None, Some(false)));
        assert_eq!(0, mode.edge_cost(None, None));
    }
}
