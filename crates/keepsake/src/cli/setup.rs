//! Argument parsing. Converts shell arguments into typed commands via clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "keepsake",
    version,
    about = "Curate a shared digital keepsake archive from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (default: the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of a rendered table
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reported comments and the moderation queue
    Reports {
        #[command(subcommand)]
        action: ReportCmd,
    },
    /// Memorial members
    Members {
        #[command(subcommand)]
        action: MemberCmd,
    },
    /// The media vault
    Media {
        #[command(subcommand)]
        action: MediaCmd,
    },
    /// Print the resolved configuration
    Config,
}

/// Flags shared by every list view.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Substring search across text fields (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Date-range preset: any, today, week, month
    #[arg(long, value_name = "RANGE")]
    pub since: Option<String>,

    /// Sort order: newest, oldest, name
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,
}

/// Which rows an action applies to: a selector like `1,3-5`, or `--all`
/// for every row in the current view.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Row selector against the listed view (1-based, e.g. `2` or `1,3-5`)
    #[arg(value_name = "ROWS")]
    pub rows: Option<String>,

    /// Apply to every row in the current view
    #[arg(long, conflicts_with = "rows")]
    pub all: bool,
}

/// Status/reason narrowing shared by every report subcommand. Actions take
/// the same flags as `list` so row numbers always address the view that
/// `list` would print for those flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportFilterArgs {
    /// Filter by status: pending, dismissed, removed
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by reason: spam, harassment, misinformation, other
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReportCmd {
    /// List reports (pending only by default; see `show_resolved`)
    List {
        #[command(flatten)]
        filters: ReportFilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Dismiss pending reports (content stays up)
    Dismiss {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        filters: ReportFilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Remove the reported content
    Remove {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        filters: ReportFilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Restore a dismissed or removed report to pending
    Restore {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        filters: ReportFilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Permanently delete reports
    Delete {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        filters: ReportFilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberCmd {
    /// List members
    List {
        /// Filter by status: active, invited, suspended
        #[arg(long)]
        status: Option<String>,
        /// Filter by role: owner, curator, contributor, viewer
        #[arg(long)]
        role: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Suspend active members
    Suspend {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Reactivate suspended or invited members
    Reactivate {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Permanently remove members
    Delete {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum MediaCmd {
    /// List media items
    List {
        /// Filter by kind: photo, video, audio, document
        #[arg(long)]
        kind: Option<String>,
        /// Filter by collection name
        #[arg(long)]
        collection: Option<String>,
        /// Only shared items
        #[arg(long, conflicts_with = "unshared")]
        shared: bool,
        /// Only private items
        #[arg(long)]
        unshared: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Share media with visitors
    Share {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Make media private again
    Unshare {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Permanently delete media items
    Delete {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
}
