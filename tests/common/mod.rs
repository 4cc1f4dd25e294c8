//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.

mod fixtures;

pub use fixtures::*;
