//! Tabula Reactive - Subscription and debouncing primitives for Tabula.
//!
//! This crate provides the reactive plumbing used by the table engine:
//!
//! - `SubscriptionManager<T>`: callback registry with integer IDs, used by
//!   both the dataset store and the filtered view to notify observers
//! - `Debouncer`: trailing-edge input debouncer with duplicate suppression
//!   and deterministic teardown, driven by an explicit tick clock
//!
//! Everything here assumes a single logical thread of discrete,
//! non-overlapping callbacks; nothing blocks.
//!
//! # Example
//!
//! ```rust
//! use tabula_reactive::Debouncer;
//!
//! let mut debouncer = Debouncer::with_quiet_period(2000);
//! debouncer.on_input("h");
//! debouncer.on_input("he");
//!
//! assert_eq!(debouncer.advance(1999), None);
//! assert_eq!(debouncer.advance(1), Some("he".into()));
//! ```

#![no_std]

extern crate alloc;

pub mod debounce;
pub mod subscription;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use subscription::{Subscription, SubscriptionId, SubscriptionManager};
