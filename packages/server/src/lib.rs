//! Room synchronization server for collaborative code editing.
//!
//! Clients join named rooms over WebSocket and converge on a shared code
//! buffer, a shared language selection, and a shared chat transcript.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
