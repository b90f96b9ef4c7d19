/// Distance in the complex plane between horizontally (`dx`) and
/// vertically (`dy`) adjacent cells.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepVector {
    pub dx: f64,
    pub dy: f64,
}
