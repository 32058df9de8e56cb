//! Map session orchestration for Battlemat.
//!
//! Composes the `bm-core` pieces (coordinate mapper, fog mask, token
//! registry) into one [`MapSession`] that a rendering shell drives: load
//! a map, paint fog with brush strokes, place and edit tokens, move the
//! view. The session records an event per mutation so the shell can patch
//! its scene graph instead of re-deriving all state each frame.
//!
//! Everything here is synchronous and single-threaded; the engine owns no
//! window, no image bytes, and no I/O.

/// Session configuration.
pub mod config;
/// Session event types and the event log.
pub mod event;
/// The map session orchestrator.
pub mod session;
/// Drag-to-brush stroke translation.
pub mod stroke;
/// Zoom/pan view state.
pub mod viewport;

/// Re-export of [`config::SessionConfig`].
pub use config::SessionConfig;
/// Re-exports of [`event::EventLog`], [`event::SessionEvent`], and [`event::SessionEventKind`].
pub use event::{EventLog, SessionEvent, SessionEventKind};
/// Re-export of [`session::MapSession`].
pub use session::MapSession;
/// Re-export of [`stroke::BrushStroke`].
pub use stroke::BrushStroke;
/// Re-export of [`viewport::Viewport`].
pub use viewport::Viewport;
