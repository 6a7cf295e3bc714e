use chrono::{TimeZone, Utc};
use crisis_core::nav::{ADMIN_PATH, DASHBOARD_PATH, REPORTS_PATH};
use crisis_core::session::LOADING_MESSAGE;
use crisis_core::{
    gate, navigation_for, page_title, resolve_route, AuthState, Page, Role, Screen,
    SessionProvider, ShellState, StaticSession, User,
};

fn user(role: Role) -> User {
    User {
        id: "u-1".to_string(),
        email: "ops@example.org".to_string(),
        display_name: Some("Ops Desk".to_string()),
        role,
        permissions: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn gate_selects_screen_for_each_auth_state() {
    assert_eq!(gate(&AuthState::Loading), Screen::Loading);
    assert_eq!(gate(&AuthState::SignedOut), Screen::SignIn);

    let signed_in = AuthState::SignedIn(user(Role::Journalist));
    let Screen::Shell(shown) = gate(&signed_in) else {
        panic!("signed-in state should render the shell");
    };
    assert_eq!(shown.label(), "Ops Desk");
    assert!(LOADING_MESSAGE.starts_with("Loading"));
}

#[test]
fn signed_in_session_loses_shell_after_sign_out() {
    let mut session = StaticSession::signed_in(user(Role::Admin));
    assert!(matches!(gate(&session.auth_state()), Screen::Shell(_)));

    session.sign_out();

    assert_eq!(session.auth_state(), AuthState::SignedOut);
    assert_eq!(gate(&session.auth_state()), Screen::SignIn);
}

#[test]
fn only_admins_see_and_reach_the_admin_panel() {
    for role in Role::ALL {
        let entries = navigation_for(role);
        let has_admin = entries.iter().any(|entry| entry.href == ADMIN_PATH);
        assert_eq!(has_admin, role == Role::Admin, "role {role:?}");

        let route = resolve_route(ADMIN_PATH, role);
        if role == Role::Admin {
            assert_eq!(route.page, Page::AdminPanel);
            assert!(!route.redirected);
        } else {
            assert_eq!(route.page, Page::Dashboard);
            assert!(route.redirected);
        }
    }
}

#[test]
fn unknown_paths_redirect_and_titles_fall_back() {
    let route = resolve_route("/settings/billing", Role::Analyst);
    assert_eq!(route.page, Page::Dashboard);
    assert_eq!(route.path, DASHBOARD_PATH);
    assert!(route.redirected);

    assert_eq!(page_title(REPORTS_PATH, Role::Ngo), "Reports Archive");
    assert_eq!(page_title("/crisis-zone/1", Role::Ngo), "Dashboard");
    assert_eq!(page_title("/", Role::Ngo), "Dashboard");
}

#[test]
fn zone_detail_route_carries_the_id() {
    let route = resolve_route("/crisis-zone/2", Role::Journalist);
    assert_eq!(route.page, Page::ZoneDetail("2".to_string()));

    let empty = resolve_route("/crisis-zone/", Role::Journalist);
    assert!(empty.redirected);
}

#[test]
fn shell_navigation_closes_sidebar_and_tracks_active_entry() {
    let mut shell = ShellState::new(Role::Analyst);
    assert_eq!(shell.title(), "Dashboard");

    shell.open_sidebar();
    assert!(shell.sidebar_open);

    let route = shell.navigate(REPORTS_PATH);
    assert_eq!(route.page, Page::ReportsArchive);
    assert!(!shell.sidebar_open);
    assert_eq!(shell.title(), "Reports Archive");

    let active = shell
        .entries()
        .into_iter()
        .filter(|entry| shell.is_active(entry))
        .map(|entry| entry.name)
        .collect::<Vec<_>>();
    assert_eq!(active, vec!["Reports Archive"]);

    shell.navigate(ADMIN_PATH);
    assert_eq!(shell.route.path, DASHBOARD_PATH);
    assert!(shell.route.redirected);
}
