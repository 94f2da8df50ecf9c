//! `bankshell-core` — foundation building blocks for the application shell.
//!
//! This crate contains pure primitives plus the two host-environment
//! boundary contracts the shell consumes: durable key/value storage and the
//! OS color-scheme signal. Both contracts ship with implementations that
//! degrade to no-ops so the shell can be constructed in non-browser
//! execution contexts (tests, prerendering, native hosts).

pub mod id;
pub mod scheme;
pub mod storage;

pub use id::UserId;
pub use scheme::{ColorSchemeProbe, FixedColorScheme};
pub use storage::{KeyValueStorage, MemoryStorage, NullStorage, StorageError};
