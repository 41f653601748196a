pub type Result<T> = std::result::Result<T, FaceError>;

/// Calls the face refuses to carry out.
///
/// Valid input never produces an error; the only rejected calls are those made
/// after [`ClockFace::tear_down`](crate::ClockFace::tear_down).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaceError {
    #[error("clock face is torn down, `{op}` rejected")]
    TornDown { op: &'static str },
}
