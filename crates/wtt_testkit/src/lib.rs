//! # WTT Testkit
//!
//! Test utilities for the WTT inventory catalog.
//!
//! This crate provides:
//! - Repository fixtures with a controllable clock
//! - Property-based test generators using proptest
//! - Invariant checks shared by tests
//!
//! ## Usage
//!
//! ```rust
//! use wtt_testkit::prelude::*;
//!
//! let test_repo = TestRepository::memory();
//! let id = test_repo.next_id().unwrap();
//! assert_eq!(id, "WTT-000001");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod invariants;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::invariants::*;
}

pub use fixtures::*;
pub use generators::*;
pub use invariants::*;
