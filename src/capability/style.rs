/// Stroke styling hints for rendering an edge.
///
/// Plain data handed to the presentation layer; nothing in the core reads it
/// back. The defaults mirror the dashed green connector style of the editor
/// canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub dasharray: &'static str,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: "#10b981",
            stroke_width: 2.0,
            dasharray: "5,5",
        }
    }
}
