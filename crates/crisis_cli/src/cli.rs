use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crisis_core::filter::ALL_SENTINEL;
use crisis_core::model::report::CredibilityBand;
use crisis_core::model::zone::{Severity, ZoneStatus};
use crisis_core::view::admin::AdminTab;
use crisis_core::view::dashboard::DashboardTab;
use crisis_core::{DateWindow, Role};

/// Top-level CLI parser for the `crisis` binary.
#[derive(Debug, Parser)]
#[command(name = "crisis", version, about = "Crisis intelligence dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML config file layered over built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON dataset to render instead of the built-in sample
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Role of the signed-in user
    #[arg(long, global = true, default_value = "admin", value_parser = parse_role)]
    pub role: Role,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log to stderr at the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stat cards, zones, reports and alerts
    Dashboard(DashboardArgs),
    /// Reports Archive search
    Reports(ReportsArgs),
    /// Data source connectors with derived health
    Sources(SourcesArgs),
    /// Automation workflows
    Workflows(WorkflowsArgs),
    /// Admin Panel overview and management
    Admin {
        /// Tab below the overview cards: overview, zones, sources, workflows, users
        #[arg(long, default_value = "overview", value_parser = parse_admin_tab)]
        tab: AdminTab,

        #[command(subcommand)]
        action: Option<AdminAction>,
    },
    /// Crisis zone detail
    Zone { id: String },
    /// Resolve a path against the role's navigation
    Nav {
        #[arg(default_value = "/dashboard")]
        path: String,
    },
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "all")]
    pub severity: String,
    #[arg(long, default_value = "all")]
    pub status: String,
    /// zones, reports or alerts; defaults to the configured tab
    #[arg(long, value_parser = parse_tab)]
    pub tab: Option<DashboardTab>,
}

impl Default for DashboardArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            severity: ALL_SENTINEL.to_string(),
            status: ALL_SENTINEL.to_string(),
            tab: None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ReportsArgs {
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "all")]
    pub source_type: String,
    #[arg(long, default_value = "all")]
    pub zone: String,
    /// low, medium or high
    #[arg(long, value_parser = parse_band)]
    pub band: Option<CredibilityBand>,
    /// today, week or month
    #[arg(long, value_parser = parse_window)]
    pub window: Option<DateWindow>,
    #[arg(long)]
    pub breaking: bool,
}

#[derive(Debug, Args)]
pub struct SourcesArgs {
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long = "type", default_value = "all")]
    pub kind: String,
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Debug, Args)]
pub struct WorkflowsArgs {
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "all")]
    pub trigger: String,
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// Submit the "Create Crisis Zone" dialog
    CreateZone(CreateZoneArgs),
}

#[derive(Debug, Args)]
pub struct CreateZoneArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub region: String,
    #[arg(long)]
    pub country: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "medium", value_parser = parse_severity)]
    pub severity: Severity,
    #[arg(long, default_value = "monitoring", value_parser = parse_zone_status)]
    pub status: ZoneStatus,
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::parse(value).ok_or_else(|| format!("unknown role `{value}`"))
}

fn parse_admin_tab(value: &str) -> Result<AdminTab, String> {
    AdminTab::parse(value).ok_or_else(|| format!("unknown admin tab `{value}`"))
}

fn parse_tab(value: &str) -> Result<DashboardTab, String> {
    match value {
        "zones" => Ok(DashboardTab::Zones),
        "reports" => Ok(DashboardTab::Reports),
        "alerts" => Ok(DashboardTab::Alerts),
        other => Err(format!("unknown tab `{other}`")),
    }
}

fn parse_band(value: &str) -> Result<CredibilityBand, String> {
    CredibilityBand::parse(value).ok_or_else(|| format!("unknown credibility band `{value}`"))
}

fn parse_window(value: &str) -> Result<DateWindow, String> {
    DateWindow::parse(value).ok_or_else(|| format!("unknown date window `{value}`"))
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    Severity::parse(value).ok_or_else(|| format!("unknown severity `{value}`"))
}

fn parse_zone_status(value: &str) -> Result<ZoneStatus, String> {
    ZoneStatus::parse(value).ok_or_else(|| format!("unknown zone status `{value}`"))
}
