//! Error types for the model, the presentation layer and the dialog

use thiserror::Error;

use crate::renderer::ShapeId;

/// Entry text that does not hold a usable number
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} must be a number, got {text:?}")]
pub struct ParseError {
    pub field: &'static str,
    pub text: String,
}

/// Failures reported by a drawing surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("window has been closed")]
    WindowClosed,
    #[error("no live shape with id {0:?}")]
    UnknownShape(ShapeId),
    #[error("shape {0:?} does not carry text")]
    NotText(ShapeId),
}

/// A saved `Game` that breaks a model invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("turn indicator must be 0 or 1, got {0}")]
    TurnOutOfRange(usize),
    #[error("wind generator seed {rng_seed} does not match game seed {seed}")]
    SeedMismatch { seed: u64, rng_seed: u64 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
