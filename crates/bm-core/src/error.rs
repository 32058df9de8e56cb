use crate::geometry::{GridCell, GridDims};
use crate::token::TokenId;

/// Alias for `Result<T, BmError>`.
pub type BmResult<T> = Result<T, BmError>;

/// Errors that can occur when manipulating a map session.
///
/// Every failure is local and synchronous: the call that produced it left
/// all engine state untouched, and nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum BmError {
    /// A fog grid would have zero area.
    #[error("invalid grid dimensions: {cols}x{rows} (both axes need at least one cell)")]
    InvalidDimensions {
        /// Requested column count.
        cols: u32,
        /// Requested row count.
        rows: u32,
    },

    /// A cell size of zero was requested.
    #[error("invalid cell size: must be at least 1 scene unit")]
    InvalidCellSize,

    /// A queried cell lies outside the current grid.
    #[error("cell {cell} is outside the {dims} grid")]
    OutOfBounds {
        /// The queried cell address.
        cell: GridCell,
        /// Extent of the grid that was queried.
        dims: GridDims,
    },

    /// The requested token ID does not exist in the registry.
    #[error("token not found: {0}")]
    TokenNotFound(TokenId),

    /// An attribute value fell outside its declared range.
    #[error("invalid {attribute}: {value} (allowed range {min}..={max})")]
    InvalidAttribute {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// The rejected value.
        value: i32,
        /// Smallest allowed value, inclusive.
        min: i32,
        /// Largest allowed value, inclusive.
        max: i32,
    },
}
