//! Role-gated navigation, route resolution and shell state.
//!
//! # Invariants
//! - The Admin Panel entry and route exist only for admins.
//! - Every path resolves to a page; unknown paths redirect to the Dashboard.

use crate::model::user::Role;
use crate::model::RecordId;
use crate::present::Icon;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const DATA_SOURCES_PATH: &str = "/data-sources";
pub const WORKFLOWS_PATH: &str = "/workflows";
pub const REPORTS_PATH: &str = "/reports";
pub const ADMIN_PATH: &str = "/admin";
const ZONE_DETAIL_PREFIX: &str = "/crisis-zone/";

/// Fallback title when a path has no nav entry.
pub const DEFAULT_TITLE: &str = "Dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    DataSources,
    Workflows,
    ReportsArchive,
    AdminPanel,
    ZoneDetail(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

const BASE_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        name: "Dashboard",
        href: DASHBOARD_PATH,
        icon: Icon::LayoutDashboard,
    },
    NavEntry {
        name: "Data Sources",
        href: DATA_SOURCES_PATH,
        icon: Icon::Database,
    },
    NavEntry {
        name: "Workflows",
        href: WORKFLOWS_PATH,
        icon: Icon::Workflow,
    },
    NavEntry {
        name: "Reports Archive",
        href: REPORTS_PATH,
        icon: Icon::Archive,
    },
];

const ADMIN_ENTRY: NavEntry = NavEntry {
    name: "Admin Panel",
    href: ADMIN_PATH,
    icon: Icon::Settings,
};

/// Sidebar entries visible to `role`, in display order.
pub fn navigation_for(role: Role) -> Vec<NavEntry> {
    let mut entries = BASE_ENTRIES.to_vec();
    if role == Role::Admin {
        entries.push(ADMIN_ENTRY);
    }
    entries
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    /// Path actually rendered; differs from the request on redirect.
    pub path: String,
    pub redirected: bool,
}

impl Route {
    fn exact(page: Page, path: &str) -> Self {
        Self {
            page,
            path: path.to_string(),
            redirected: false,
        }
    }

    fn redirect_to_dashboard() -> Self {
        Self {
            page: Page::Dashboard,
            path: DASHBOARD_PATH.to_string(),
            redirected: true,
        }
    }
}

/// Resolves `path` for `role`.
pub fn resolve_route(path: &str, role: Role) -> Route {
    match path {
        "/" | DASHBOARD_PATH => Route::exact(Page::Dashboard, path),
        DATA_SOURCES_PATH => Route::exact(Page::DataSources, path),
        WORKFLOWS_PATH => Route::exact(Page::Workflows, path),
        REPORTS_PATH => Route::exact(Page::ReportsArchive, path),
        ADMIN_PATH if role == Role::Admin => Route::exact(Page::AdminPanel, path),
        other => match other.strip_prefix(ZONE_DETAIL_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Route::exact(Page::ZoneDetail(id.to_string()), other)
            }
            _ => Route::redirect_to_dashboard(),
        },
    }
}

/// Header title for `path`: the matching nav entry name, else "Dashboard".
pub fn page_title(path: &str, role: Role) -> &'static str {
    navigation_for(role)
        .into_iter()
        .find(|entry| entry.href == path)
        .map_or(DEFAULT_TITLE, |entry| entry.name)
}

/// Layout state owned by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub role: Role,
    pub sidebar_open: bool,
    pub route: Route,
}

impl ShellState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            sidebar_open: false,
            route: resolve_route(DASHBOARD_PATH, role),
        }
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Resolves and activates `path`; the mobile sidebar closes on navigation.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.route = resolve_route(path, self.role);
        self.sidebar_open = false;
        &self.route
    }

    pub fn title(&self) -> &'static str {
        page_title(&self.route.path, self.role)
    }

    /// Whether `entry` is the highlighted sidebar item.
    pub fn is_active(&self, entry: &NavEntry) -> bool {
        self.route.path == entry.href
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        navigation_for(self.role)
    }
}
