/// Errors raised by the transform conversions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TransformError {
    /// The input vector has zero length and has no direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroNorm,
}
