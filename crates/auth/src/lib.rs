//! `bankshell-auth` — pure authorization model for the application shell.
//!
//! This crate is the leaf of the shell core: the closed role enumeration,
//! the static role→permission table, the session snapshot with its
//! invariants, and the permission-evaluation queries that gates (route
//! guards, navigation filtering) consult. No I/O, no framework coupling.
//!
//! The actual login/logout machinery lives behind [`AuthBoundary`]; this
//! crate only models its results. Authorization here is a client-side UX
//! gate, not a security boundary — the server re-validates every request.

pub mod boundary;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod user;

pub use boundary::AuthBoundary;
pub use permissions::{Permission, permissions_for_role_name};
pub use roles::Role;
pub use session::Session;
pub use user::UserInfo;
