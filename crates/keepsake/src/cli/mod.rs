//! # CLI Layer
//!
//! This module is one possible client for keepsakeapp, not the application
//! itself. It is the only place in the workspace that knows about terminal
//! I/O, argument parsing, or process exits.
//!
//! Responsibilities:
//! 1. Argument parsing (setup.rs, via clap)
//! 2. Configuration discovery (platform config dir, overridable)
//! 3. Dispatch: build a dashboard over the sample archive, apply the
//!    requested filters, run the action
//! 4. Rendering (render.rs): tables for humans, `--json` for machines

mod render;
mod setup;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use keepsakeapp::commands::list::SortKey;
use keepsakeapp::config::KeepsakeConfig;
use keepsakeapp::dashboard::{Dashboard, Target};
use keepsakeapp::facets::{DateRange, FacetFilter};
use keepsakeapp::model::media::{MediaAction, MediaKind};
use keepsakeapp::model::member::{MemberAction, MemberRole, MemberStatus};
use keepsakeapp::model::report::{ModerationAction, ReportReason, ReportStatus};
use keepsakeapp::model::{MediaItem, Member, Record, Report};
use keepsakeapp::notify::NullSink;
use keepsakeapp::samples::{sample_media, sample_members, sample_reports};
use keepsakeapp::selector::parse_rows;
use keepsakeapp::store::MemoryStore;
use serde::Serialize;
use setup::{
    Cli, Commands, MediaCmd, MemberCmd, ReportCmd, ReportFilterArgs, TargetArgs, ViewArgs,
};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Reports { action } => handle_reports(action, &config, cli.json),
        Commands::Members { action } => handle_members(action, &config, cli.json),
        Commands::Media { action } => handle_media(action, &config, cli.json),
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<KeepsakeConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => directories::ProjectDirs::from("", "", "keepsake")
            .map(|dirs| dirs.config_dir().join("config.toml")),
    };
    KeepsakeConfig::load(path.as_deref()).context("failed to load configuration")
}

/// Apply the shared view flags to a dashboard: search, date range (falling
/// back to the configured default), and sort order.
fn apply_view<R, S, N>(
    dashboard: &mut Dashboard<R, S, N>,
    view: &ViewArgs,
    timestamp_facet: &str,
    config: &KeepsakeConfig,
) -> anyhow::Result<()>
where
    R: Record,
    S: keepsakeapp::store::RecordStore<R>,
    N: keepsakeapp::notify::NotificationSink,
{
    if let Some(search) = &view.search {
        dashboard.set_search(search.clone());
    }

    let range = match &view.since {
        Some(input) => DateRange::parse(input)?,
        None => config.default_range()?,
    };
    if let Some(cutoff) = range.cutoff(Utc::now()) {
        dashboard.set_filter(FacetFilter::since(timestamp_facet, cutoff))?;
    }

    if let Some(input) = &view.sort {
        match SortKey::parse(input) {
            Some(key) => dashboard.set_sort(Some(key)),
            None => bail!("unknown sort key '{}' (try newest, oldest, name)", input),
        }
    }
    Ok(())
}

/// Resolve `--all` or a row selector against the current view size.
fn resolve_target(target: &TargetArgs, view_len: usize) -> anyhow::Result<Target> {
    if target.all {
        return Ok(Target::Rows((1..=view_len).collect()));
    }
    match &target.rows {
        Some(rows) => Ok(Target::Rows(parse_rows(rows)?)),
        None => bail!("provide a row selector like '1,3-5' or pass --all"),
    }
}

fn print_listing<T: Serialize>(records: &[T], json: bool, table: impl FnOnce() -> String) {
    if json {
        match serde_json::to_string_pretty(records) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", e),
        }
    } else {
        println!("{}", table());
    }
}

// --- reports ---

type ReportDashboard = Dashboard<Report, MemoryStore<Report>, NullSink>;

fn report_dashboard() -> anyhow::Result<ReportDashboard> {
    let store = MemoryStore::seeded(sample_reports());
    Ok(Dashboard::moderation(store, NullSink)?)
}

/// Apply the status/reason flags to a report dashboard. Every report
/// subcommand goes through here, so the rows an action resolves are the
/// rows `list` prints for the same flags.
fn apply_report_filters(
    dashboard: &mut ReportDashboard,
    filters: &ReportFilterArgs,
    config: &KeepsakeConfig,
) -> anyhow::Result<()> {
    match &filters.status {
        Some(input) => {
            let status = ReportStatus::parse(input)?;
            dashboard.set_filter(FacetFilter::tag_eq("status", status.as_str()))?;
        }
        // Resolved reports stay hidden unless asked for
        None if !config.show_resolved => {
            dashboard.set_filter(FacetFilter::tag_eq("status", ReportStatus::Pending.as_str()))?;
        }
        None => {}
    }
    if let Some(input) = &filters.reason {
        let reason = ReportReason::parse(input)?;
        dashboard.set_filter(FacetFilter::tag_eq("reason", reason.as_str()))?;
    }
    Ok(())
}

fn handle_reports(action: &ReportCmd, config: &KeepsakeConfig, json: bool) -> anyhow::Result<()> {
    let mut dashboard = report_dashboard()?;

    match action {
        ReportCmd::List { filters, view } => {
            apply_report_filters(&mut dashboard, filters, config)?;
            apply_view(&mut dashboard, view, "reported_at", config)?;

            let listed = dashboard.view()?;
            let badge = dashboard.badge();
            print_listing(&listed, json, || render::render_reports(&listed, badge));
        }
        ReportCmd::Dismiss {
            target,
            filters,
            view,
        }
        | ReportCmd::Remove {
            target,
            filters,
            view,
        }
        | ReportCmd::Restore {
            target,
            filters,
            view,
        } => {
            let moderation = match action {
                ReportCmd::Dismiss { .. } => ModerationAction::Dismiss,
                ReportCmd::Remove { .. } => ModerationAction::Remove,
                _ => ModerationAction::Restore,
            };
            apply_report_filters(&mut dashboard, filters, config)?;
            apply_view(&mut dashboard, view, "reported_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.moderate(moderation, target)?;
            println!("{}", render::render_messages(&result.messages));
            println!("{} reports pending", dashboard.badge().count());
        }
        ReportCmd::Delete {
            target,
            filters,
            view,
        } => {
            apply_report_filters(&mut dashboard, filters, config)?;
            apply_view(&mut dashboard, view, "reported_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.delete(target)?;
            println!("{}", render::render_messages(&result.messages));
        }
    }
    Ok(())
}

// --- members ---

fn handle_members(action: &MemberCmd, config: &KeepsakeConfig, json: bool) -> anyhow::Result<()> {
    let store = MemoryStore::seeded(sample_members());
    let mut dashboard: Dashboard<Member, _, _> = Dashboard::new(store, NullSink);

    match action {
        MemberCmd::List { status, role, view } => {
            if let Some(input) = status {
                let status = MemberStatus::parse(input)?;
                dashboard.set_filter(FacetFilter::tag_eq("status", status.as_str()))?;
            }
            if let Some(input) = role {
                let role = MemberRole::parse(input)?;
                dashboard.set_filter(FacetFilter::tag_eq("role", role.as_str()))?;
            }
            apply_view(&mut dashboard, view, "joined_at", config)?;

            let listed = dashboard.view()?;
            print_listing(&listed, json, || render::render_members(&listed));
        }
        MemberCmd::Suspend { target, view } | MemberCmd::Reactivate { target, view } => {
            let member_action = match action {
                MemberCmd::Suspend { .. } => MemberAction::Suspend,
                _ => MemberAction::Reactivate,
            };
            apply_view(&mut dashboard, view, "joined_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.member_action(member_action, target)?;
            println!("{}", render::render_messages(&result.messages));
        }
        MemberCmd::Delete { target, view } => {
            apply_view(&mut dashboard, view, "joined_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.delete(target)?;
            println!("{}", render::render_messages(&result.messages));
        }
    }
    Ok(())
}

// --- media ---

fn handle_media(action: &MediaCmd, config: &KeepsakeConfig, json: bool) -> anyhow::Result<()> {
    let store = MemoryStore::seeded(sample_media());
    let mut dashboard: Dashboard<MediaItem, _, _> = Dashboard::new(store, NullSink);

    match action {
        MediaCmd::List {
            kind,
            collection,
            shared,
            unshared,
            view,
        } => {
            if let Some(input) = kind {
                let kind = MediaKind::parse(input)?;
                dashboard.set_filter(FacetFilter::tag_eq("kind", kind.as_str()))?;
            }
            if let Some(collection) = collection {
                dashboard.set_filter(FacetFilter::tag_eq("collection", collection.clone()))?;
            }
            if *shared {
                dashboard.set_filter(FacetFilter::flag_eq("shared", true))?;
            } else if *unshared {
                dashboard.set_filter(FacetFilter::flag_eq("shared", false))?;
            }
            apply_view(&mut dashboard, view, "uploaded_at", config)?;

            let listed = dashboard.view()?;
            print_listing(&listed, json, || render::render_media(&listed));
        }
        MediaCmd::Share { target, view } | MediaCmd::Unshare { target, view } => {
            let media_action = match action {
                MediaCmd::Share { .. } => MediaAction::Share,
                _ => MediaAction::Unshare,
            };
            apply_view(&mut dashboard, view, "uploaded_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.media_action(media_action, target)?;
            println!("{}", render::render_messages(&result.messages));
        }
        MediaCmd::Delete { target, view } => {
            apply_view(&mut dashboard, view, "uploaded_at", config)?;
            let target = resolve_target(target, dashboard.view()?.len())?;
            let result = dashboard.delete(target)?;
            println!("{}", render::render_messages(&result.messages));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_target_all_covers_the_view() {
        let target = TargetArgs {
            rows: None,
            all: true,
        };
        match resolve_target(&target, 3).unwrap() {
            Target::Rows(rows) => assert_eq!(rows, vec![1, 2, 3]),
            other => panic!("unexpected target: {:?}", other),
        }
    }

    #[test]
    fn resolve_target_requires_rows_or_all() {
        let target = TargetArgs::default();
        assert!(resolve_target(&target, 3).is_err());
    }

    #[test]
    fn resolve_target_parses_selectors() {
        let target = TargetArgs {
            rows: Some("1,3".to_string()),
            all: false,
        };
        match resolve_target(&target, 5).unwrap() {
            Target::Rows(rows) => assert_eq!(rows, vec![1, 3]),
            other => panic!("unexpected target: {:?}", other),
        }
    }
}
