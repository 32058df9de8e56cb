//! Core types for Battlemat: grid geometry, the fog-of-war mask, and the
//! token registry.
//!
//! This crate is the data model under a virtual tabletop's map view. Fog
//! and tokens are plain state, mutated through small imperative APIs and
//! read back by whatever shell draws them; nothing here touches a window,
//! an image file, or a socket. See `bm-session` for the orchestration layer
//! that ties these pieces to a loaded map.

/// Error types used throughout the crate.
pub mod error;
/// Fog-of-war visibility mask.
pub mod fog;
/// Scene/grid coordinate mapping.
pub mod geometry;
/// Token collection with generated identity.
pub mod registry;
/// Token records, identifiers, and attribute bounds.
pub mod token;

/// Re-export error types.
pub use error::{BmError, BmResult};
/// Re-export the fog mask.
pub use fog::FogGrid;
/// Re-export geometry types.
pub use geometry::{GridCell, GridDims, GridMapper, ScenePoint};
/// Re-export the token registry.
pub use registry::TokenRegistry;
/// Re-export token types.
pub use token::{Token, TokenId};
