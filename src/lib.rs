//! govdb-rs
//!
//! Workspace facade over [`govdb_core`]; the demos under `demos/` import
//! through it.

pub use govdb_core::*;
