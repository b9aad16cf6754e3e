//! # WTT Core
//!
//! Item repository for the WTT inventory catalog.
//!
//! This crate provides:
//! - The [`Item`] record and its [`Condition`]
//! - [`RecordStore`], the typed JSON layer over a [`wtt_storage::SlotBackend`]
//! - [`ItemRepository`], which assigns identifiers and applies every mutation
//! - An injectable [`Clock`] for `updated_at` stamps
//! - Seed and demo catalogs
//!
//! ## Example
//!
//! ```rust
//! use wtt_core::{Item, ItemRepository};
//!
//! let repo = ItemRepository::open_in_memory();
//! let id = repo.next_id().unwrap();
//! assert_eq!(id, "WTT-000001");
//!
//! repo.upsert(Item::new(&id, "Camera", "Cameras")).unwrap();
//! repo.set_checked_out(&id, true).unwrap();
//! assert!(repo.find_by_id(&id).unwrap().checked_out);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
mod clock;
mod config;
mod error;
mod id;
mod item;
mod repository;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RepositoryConfig;
pub use error::{CoreError, CoreResult};
pub use id::{format_item_id, id_suffix, max_id_suffix};
pub use item::{Condition, Item, ParseConditionError};
pub use repository::ItemRepository;
pub use store::RecordStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
