//! Black-box flow across the stores and the routing layer: login, gated
//! navigation, logout.

use std::sync::Arc;

use bankshell_auth::{Permission, Role, UserInfo};
use bankshell_core::{FixedColorScheme, MemoryStorage, UserId};
use bankshell_routing::{
    GuardDecision, LOGIN_ROUTE, RouteRequirements, UNAUTHORIZED_ROUTE, default_nav, filter_nav,
    require_anonymous, require_authenticated, require_permission,
};
use bankshell_state::{GlobalStateFacade, PreferenceStore, SessionStore};

fn shell() -> GlobalStateFacade {
    let preferences = PreferenceStore::new(
        Arc::new(MemoryStorage::new()),
        Arc::new(FixedColorScheme::default()),
    );
    GlobalStateFacade::new(Arc::new(SessionStore::new()), Arc::new(preferences))
}

fn user(role: Role) -> UserInfo {
    UserInfo {
        id: UserId::new(),
        email: format!("{role}@example.com"),
        first_name: "Flow".to_string(),
        last_name: "Test".to_string(),
        role,
        avatar: None,
    }
}

#[test]
fn anonymous_visitor_is_funneled_to_login() {
    let shell = shell();
    let session = shell.session_store().snapshot();

    let decision = require_authenticated(&session, &RouteRequirements::none(), "/banking/accounts");
    let GuardDecision::Redirect { path, return_url } = decision else {
        panic!("expected a login redirect");
    };
    assert_eq!(path, LOGIN_ROUTE);
    assert_eq!(return_url.as_deref(), Some("/banking/accounts"));

    // The login page itself is reachable.
    assert!(require_anonymous(&session).is_allow());

    // Only ungated sidebar entries are visible.
    let visible = filter_nav(&default_nav(), &session);
    assert!(visible.iter().all(|item| item.access.is_none()));
}

#[test]
fn viewer_login_opens_read_only_banking() {
    let shell = shell();
    shell.on_auth_event(Some(user(Role::Viewer)));
    let session = shell.session_store().snapshot();

    // Banking is visible but the login page no longer is.
    let visible = filter_nav(&default_nav(), &session);
    assert!(visible.iter().any(|item| item.label == "Banking"));
    assert_eq!(require_anonymous(&session), GuardDecision::Deny);

    // Reading is allowed, writing is not.
    let read = RouteRequirements::all_of([Permission::new("banking.read")]);
    assert!(require_permission(&session, &read, "/banking/accounts").is_allow());

    let write = RouteRequirements::all_of([Permission::new("banking.write")]);
    let decision = require_permission(&session, &write, "/banking/transactions/new");
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            path: UNAUTHORIZED_ROUTE.to_string(),
            return_url: None,
        }
    );
}

#[test]
fn manager_sees_user_management_and_may_write() {
    let shell = shell();
    shell.on_auth_event(Some(user(Role::Manager)));
    let session = shell.session_store().snapshot();

    let visible = filter_nav(&default_nav(), &session);
    assert!(visible.iter().any(|item| item.label == "Users"));

    let write = RouteRequirements::all_of([
        Permission::new("banking.read"),
        Permission::new("banking.write"),
    ]);
    assert!(require_permission(&session, &write, "/banking/transactions/new").is_allow());
}

#[test]
fn logout_drops_every_grant_at_once() {
    let shell = shell();
    shell.on_auth_event(Some(user(Role::Admin)));
    shell.on_auth_event(None);
    let session = shell.session_store().snapshot();

    assert!(!session.is_authenticated());
    let read = RouteRequirements::all_of([Permission::new("banking.read")]);
    assert!(!require_permission(&session, &read, "/banking/accounts").is_allow());

    let visible = filter_nav(&default_nav(), &session);
    assert!(visible.iter().all(|item| item.label != "Banking"));
}

#[test]
fn nav_refilters_on_session_change_via_subscription() {
    let shell = shell();
    let filtered = Arc::new(std::sync::Mutex::new(Vec::new()));

    let filtered_in = filtered.clone();
    let _sub = shell.session_store().subscribe(move |session| {
        let count = filter_nav(&default_nav(), session).len();
        filtered_in.lock().unwrap().push(count);
    });

    shell.on_auth_event(Some(user(Role::Admin)));
    shell.on_auth_event(None);

    let counts = filtered.lock().unwrap().clone();
    assert_eq!(counts, vec![4, 2]);
}
