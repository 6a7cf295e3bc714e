//! Tone/icon/badge tables for every closed enumeration.
//!
//! Each table is an exhaustive `match`, so adding a variant without a visual
//! mapping fails to compile.

use crate::model::alert::AlertSeverity;
use crate::model::report::{CredibilityBand, SourceType};
use crate::model::source::{SourceKind, SourceStatus};
use crate::model::workflow::{TriggerType, WorkflowStatus};
use crate::model::zone::{Severity, ZoneStatus};

/// Color token used for dots, chips and icon backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Gray,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertTriangle,
    Activity,
    Archive,
    CheckCircle,
    Clock,
    Database,
    Globe,
    Hand,
    Info,
    LayoutDashboard,
    Newspaper,
    Pause,
    Play,
    Radar,
    Rss,
    Settings,
    Shield,
    Twitter,
    Workflow,
    XCircle,
    Zap,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlertTriangle => "alert-triangle",
            Self::Activity => "activity",
            Self::Archive => "archive",
            Self::CheckCircle => "check-circle",
            Self::Clock => "clock",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::Hand => "hand",
            Self::Info => "info",
            Self::LayoutDashboard => "layout-dashboard",
            Self::Newspaper => "newspaper",
            Self::Pause => "pause",
            Self::Play => "play",
            Self::Radar => "radar",
            Self::Rss => "rss",
            Self::Settings => "settings",
            Self::Shield => "shield",
            Self::Twitter => "twitter",
            Self::Workflow => "workflow",
            Self::XCircle => "x-circle",
            Self::Zap => "zap",
        }
    }
}

/// Visual treatment of an enumerated value.
pub trait Presentation: Copy {
    fn tone(self) -> Tone;

    fn icon(self) -> Icon;

    fn badge(self) -> BadgeVariant {
        BadgeVariant::Secondary
    }
}

impl Presentation for Severity {
    fn tone(self) -> Tone {
        match self {
            Self::Critical => Tone::Red,
            Self::High => Tone::Orange,
            Self::Medium => Tone::Yellow,
            Self::Low => Tone::Green,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Critical | Self::High => Icon::AlertTriangle,
            Self::Medium | Self::Low => Icon::Info,
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            Self::Critical => BadgeVariant::Destructive,
            Self::High | Self::Medium | Self::Low => BadgeVariant::Secondary,
        }
    }
}

impl Presentation for ZoneStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Red,
            Self::Monitoring => Tone::Yellow,
            Self::Resolved => Tone::Green,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Active => Icon::Activity,
            Self::Monitoring => Icon::Radar,
            Self::Resolved => Icon::CheckCircle,
        }
    }
}

impl Presentation for AlertSeverity {
    fn tone(self) -> Tone {
        match self {
            Self::Critical => Tone::Red,
            Self::Warning => Tone::Yellow,
            Self::Info => Tone::Blue,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Critical | Self::Warning => Icon::AlertTriangle,
            Self::Info => Icon::Info,
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            Self::Critical => BadgeVariant::Destructive,
            Self::Warning | Self::Info => BadgeVariant::Secondary,
        }
    }
}

impl Presentation for SourceType {
    fn tone(self) -> Tone {
        match self {
            Self::Verified => Tone::Green,
            Self::Unverified => Tone::Yellow,
            Self::Rumor => Tone::Orange,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Verified => Icon::Shield,
            Self::Unverified | Self::Rumor => Icon::AlertTriangle,
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            Self::Verified => BadgeVariant::Default,
            Self::Unverified | Self::Rumor => BadgeVariant::Secondary,
        }
    }
}

impl Presentation for CredibilityBand {
    fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Green,
            Self::Medium => Tone::Yellow,
            Self::Low => Tone::Red,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::High => Icon::Shield,
            Self::Medium => Icon::Info,
            Self::Low => Icon::AlertTriangle,
        }
    }
}

impl Presentation for SourceKind {
    fn tone(self) -> Tone {
        Tone::Gray
    }

    fn icon(self) -> Icon {
        match self {
            Self::Rss => Icon::Rss,
            Self::Api => Icon::Database,
            Self::Social => Icon::Twitter,
            Self::News => Icon::Newspaper,
            Self::Osint => Icon::Globe,
        }
    }
}

impl Presentation for SourceStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::Warning => Tone::Yellow,
            Self::Inactive => Tone::Gray,
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Active => Icon::CheckCircle,
            Self::Warning => Icon::AlertTriangle,
            Self::Inactive => Icon::XCircle,
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Default,
            Self::Warning => BadgeVariant::Outline,
            Self::Inactive => BadgeVariant::Secondary,
        }
    }
}

impl Presentation for WorkflowStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::Paused => Tone::Gray,
            Self::Error => Tone::Red,
        }
    }

    /// Icon of the toggle action: running workflows offer "pause".
    fn icon(self) -> Icon {
        match self {
            Self::Active => Icon::Pause,
            Self::Paused | Self::Error => Icon::Play,
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Default,
            Self::Paused => BadgeVariant::Secondary,
            Self::Error => BadgeVariant::Destructive,
        }
    }
}

impl Presentation for TriggerType {
    fn tone(self) -> Tone {
        Tone::Blue
    }

    fn icon(self) -> Icon {
        match self {
            Self::Manual => Icon::Hand,
            Self::Scheduled => Icon::Clock,
            Self::Event => Icon::Zap,
        }
    }
}
