//! Error types for untyped input crossing into the engine.
//!
//! Inside the engine every face, direction, and axis is a typed enum, so the
//! move math itself cannot fail. Errors only arise where characters, strings,
//! or bytes are turned into those types.

use thiserror::Error;

/// Error produced when input cannot be mapped onto the cube's closed
/// enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Face key outside `F B U D R L`.
    #[error("invalid face key {0:?}, expected one of F B U D R L")]
    InvalidFace(char),

    /// Direction key outside `+ -`.
    #[error("invalid direction key {0:?}, expected '+' or '-'")]
    InvalidDirection(char),

    /// Axis key outside `h v`.
    #[error("invalid axis key {0:?}, expected 'h' or 'v'")]
    InvalidAxis(char),

    /// Move token that is not valid notation.
    #[error("invalid move {0:?}")]
    InvalidMove(String),

    /// Move index outside the 12 quarter turns.
    #[error("move index {0} out of range, expected 0..12")]
    InvalidMoveIndex(usize),

    /// Facelet label that is not of the form `F01`.
    #[error("invalid facelet position {0:?}")]
    InvalidFacelet(String),

    /// A scripted move source needs at least one move.
    #[error("scripted move source is empty")]
    EmptyScript,

    /// Snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    /// Snapshot bytes could not be decoded.
    #[error("failed to decode snapshot: {0}")]
    Decode(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubeError>;
