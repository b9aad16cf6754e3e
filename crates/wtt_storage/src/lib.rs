//! # WTT Storage
//!
//! Slot storage backends for the WTT inventory catalog.
//!
//! This crate is the lowest layer of the catalog. A backend holds exactly
//! two named slots of **opaque bytes**: one for the serialized item
//! collection and one for the identifier counter. Backends never look
//! inside the bytes; `wtt_core` owns the encoding.
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral catalogs
//! - [`FileBackend`] - A locked data directory with one file per slot
//!
//! ## Example
//!
//! ```rust
//! use wtt_storage::{InMemoryBackend, Slot, SlotBackend};
//!
//! let backend = InMemoryBackend::new();
//! backend.write(Slot::Counter, &b"7"[..]).unwrap();
//! assert_eq!(backend.read(Slot::Counter).unwrap(), Some(b"7".to_vec()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::{Slot, SlotBackend};
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
