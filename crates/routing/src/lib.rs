//! `bankshell-routing` — stateless authorization consumers.
//!
//! Route guards and the navigation-tree filter. Both are pure functions of
//! the current [`bankshell_auth::Session`]: guards return an allow/redirect
//! decision that the external router executes, and the nav filter prunes a
//! declarative entry tree down to what the session may see. Neither holds
//! state of its own; an authorization denial is a first-class negative
//! result here, never an error.

pub mod guards;
pub mod nav;

pub use guards::{
    GuardDecision, LOGIN_ROUTE, RETURN_URL_PARAM, RouteRequirements, UNAUTHORIZED_ROUTE,
    require_anonymous, require_authenticated, require_permission,
};
pub use nav::{NavAccess, NavItem, default_nav, filter_nav};
