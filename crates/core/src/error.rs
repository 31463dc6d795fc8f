use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid world config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("level {depth} has no walkable cell in its scanned stratum")]
    EmptyRegion { depth: usize },

    #[error("level {depth} failed to generate after {attempts} attempts")]
    AttemptsExhausted { depth: usize, attempts: u32 },
}
