/// A business segment with its base-year revenue.
///
/// Revenue is numeric by the time it reaches the engine; formatted input
/// strings are normalized during model ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub revenue: f64,
}
