//! # Vexmgr Core
//!
//! Editor core for the VEX snippet manager: keystroke edit-assist,
//! JSON-backed preferences, the snippet library on disk, and the interface
//! to the host node graph.
//!
//! Everything here is synchronous and event-driven — one keystroke or one
//! preferences save at a time, completing before control returns to the
//! host event loop. Configuration objects are replaced wholesale, never
//! partially mutated.

pub mod edit_assist;
pub mod graph;
pub mod library;
pub mod preferences;

pub use edit_assist::{Action, EditAssistPrefs, KeyInput, Mutation, apply, decide};
pub use graph::{GraphError, NodeGraph, NodeId, WrangleKind, insert_vex_code};
pub use library::LibraryError;
pub use preferences::{Preferences, PreferencesError};
