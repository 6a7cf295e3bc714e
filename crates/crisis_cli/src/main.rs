//! Terminal front end for the crisis intelligence core.
//!
//! # Responsibility
//! - Load config and data, gate on the session, resolve the requested page.
//! - Render derived views as plain text; never compute them locally.

use std::path::Path;

use anyhow::{bail, Context};
use chrono::{Local, Utc};
use clap::Parser;
use crisis_core::logging::LogTarget;
use crisis_core::nav::{
    ADMIN_PATH, DASHBOARD_PATH, DATA_SOURCES_PATH, REPORTS_PATH, WORKFLOWS_PATH,
};
use crisis_core::session::LOADING_MESSAGE;
use crisis_core::store::ZoneDraft;
use crisis_core::view::admin::{admin_view, AdminState, AdminTab};
use crisis_core::view::dashboard::{dashboard_view, DashboardState};
use crisis_core::view::reports::{reports_view, ReportsState};
use crisis_core::view::sources::{sources_view, SourcesState};
use crisis_core::view::workflows::{workflows_view, WorkflowsState};
use crisis_core::view::zone_detail::zone_detail_view;
use crisis_core::{
    gate, init_logging, init_logging_from_config, sample_dataset, CoreConfig, Dataset,
    FacetChoice, InMemoryStore, Page, Role, Screen, SessionProvider, ShellState, StaticSession,
    User,
};
use log::info;

mod cli;
mod render;

use cli::{AdminAction, Cli, Commands, CreateZoneArgs, DashboardArgs};

fn main() {
    if let Err(error) = run() {
        eprintln!("crisis error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(dir) = &cli.log_dir {
        config.logging.dir = Some(dir.clone());
    }
    init_cli_logging(&config, cli.verbose)?;

    let data = load_dataset(cli.data.as_deref())?;
    let session = StaticSession::signed_in(cli_user(cli.role));
    let state = session.auth_state();
    let user = match gate(&state) {
        Screen::Loading => {
            println!("{LOADING_MESSAGE}");
            return Ok(());
        }
        Screen::SignIn => bail!("not signed in"),
        Screen::Shell(user) => user,
    };

    let mut shell = ShellState::new(user.role);
    let requested = requested_path(&cli.command);
    let route = shell.navigate(&requested).clone();
    if route.redirected {
        info!(
            "event=route_redirect module=cli status=ok role={}",
            user.role.as_str()
        );
        eprintln!("{requested} is not available; showing {}", route.path);
    }

    let output = match (cli.command, &route.page) {
        (Commands::Nav { .. }, _) => render::nav(&route, shell.title(), &shell.entries()),
        (Commands::Reports(args), Page::ReportsArchive) => {
            let state = ReportsState {
                query: args.query,
                source_type: FacetChoice::parse(&args.source_type),
                crisis_zone: FacetChoice::parse(&args.zone),
                band: args.band,
                window: args.window,
                breaking_only: args.breaking,
            };
            render::reports(&reports_view(&data, &state, &Local::now()))
        }
        (Commands::Sources(args), Page::DataSources) => {
            let state = SourcesState {
                query: args.query,
                kind: FacetChoice::parse(&args.kind),
                status: FacetChoice::parse(&args.status),
            };
            render::sources(&sources_view(&data, &state, &config.sources, &Local::now()))
        }
        (Commands::Workflows(args), Page::Workflows) => {
            let state = WorkflowsState {
                query: args.query,
                trigger: FacetChoice::parse(&args.trigger),
                status: FacetChoice::parse(&args.status),
            };
            render::workflows(&workflows_view(&data, &state, &Local::now()))
        }
        (Commands::Admin { tab, action }, Page::AdminPanel) => {
            run_admin(data, user, tab, action, &config)?
        }
        (Commands::Zone { .. }, Page::ZoneDetail(id)) => {
            render::zone_detail(&zone_detail_view(&data, id, &config.sources))
        }
        (Commands::Dashboard(args), _) => render_dashboard(&data, args, &config),
        // Redirected pages fall back to the dashboard with no filters.
        (_, _) => render_dashboard(&data, DashboardArgs::default(), &config),
    };

    print!("{output}");
    Ok(())
}

fn init_cli_logging(config: &CoreConfig, verbose: bool) -> anyhow::Result<()> {
    if config.logging.dir.is_some() || verbose {
        init_logging_from_config(&config.logging).context("failed to initialize logging")?;
    } else {
        init_logging("warn", LogTarget::Stderr).context("failed to initialize logging")?;
    }
    Ok(())
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let Some(path) = path else {
        return Ok(sample_dataset(Utc::now()));
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset `{}`", path.display()))?;
    let data: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset `{}`", path.display()))?;
    info!(
        "event=dataset_loaded module=cli status=ok zones={} reports={} sources={}",
        data.zones.len(),
        data.reports.len(),
        data.sources.len()
    );
    Ok(data)
}

fn cli_user(role: Role) -> User {
    User {
        id: format!("cli-{}", role.as_str()),
        email: format!("{}@localhost", role.as_str()),
        display_name: None,
        role,
        permissions: Vec::new(),
        created_at: Utc::now(),
    }
}

fn requested_path(command: &Commands) -> String {
    match command {
        Commands::Dashboard(_) => DASHBOARD_PATH.to_string(),
        Commands::Reports(_) => REPORTS_PATH.to_string(),
        Commands::Sources(_) => DATA_SOURCES_PATH.to_string(),
        Commands::Workflows(_) => WORKFLOWS_PATH.to_string(),
        Commands::Admin { .. } => ADMIN_PATH.to_string(),
        Commands::Zone { id } => format!("/crisis-zone/{id}"),
        Commands::Nav { path } => path.clone(),
    }
}

fn render_dashboard(data: &Dataset, args: DashboardArgs, config: &CoreConfig) -> String {
    let mut state = DashboardState::new(args.tab.unwrap_or(config.dashboard.default_tab));
    state.set_search(args.search);
    state.set_severity(&args.severity);
    state.set_status(&args.status);
    render::dashboard(&dashboard_view(
        data,
        &state,
        &config.sources,
        &Local::now(),
    ))
}

fn run_admin(
    data: Dataset,
    user: &User,
    tab: AdminTab,
    action: Option<AdminAction>,
    config: &CoreConfig,
) -> anyhow::Result<String> {
    let mut state = AdminState {
        tab,
        ..AdminState::default()
    };
    let mut store = InMemoryStore::new(data, user.id.clone());

    if let Some(AdminAction::CreateZone(args)) = action {
        state.create_zone.open();
        state.create_zone.draft = zone_draft(args);
        let outcome = state
            .create_zone
            .submit(&mut store)
            .context("create crisis zone failed")?;
        println!("created crisis zone {}", outcome.id());
    }

    let data = store.into_dataset();
    Ok(render::admin(&admin_view(&data, &state, &config.sources)))
}

fn zone_draft(args: CreateZoneArgs) -> ZoneDraft {
    ZoneDraft {
        name: args.name,
        region: args.region,
        country: args.country,
        description: args.description,
        severity: args.severity,
        status: args.status,
    }
}
