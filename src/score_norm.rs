#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DistanceNorm {
    /// Raw number of edit operations
    Raw,

    /// Divide by the product of both graphs' node counts
    NodeProduct,
}

impl Default for DistanceNorm {
    fn default() -> Self {
        DistanceNorm::NodeProduct
    }
}
