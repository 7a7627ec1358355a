/// What a single epoch left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    /// Zero based.
    pub epoch: usize,
    pub avg_error: f32,
    pub avg_gradient: Vec<f32>,
    /// The weights after this epoch's update.
    pub weights: [f32; 2],
}
