use crate::analyze::group::StatusFilter;
use crate::types::project::Status;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "organizer",
    version,
    about = "Python project organizer: scan, score and tag project folders"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding project_data.json, saved_paths.json and organizer.toml
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explore projects with grouping and status filtering
    Scan(ScanCommand),
    /// Overview and portfolio metrics
    Dashboard(DashboardCommand),
    /// Side-by-side comparison of selected projects
    Compare(CompareCommand),
    /// Status report across scanned projects
    Report(ReportCommand),
    /// Read or change project statuses
    #[command(subcommand)]
    Status(StatusCommands),
    /// Manage saved scan paths
    #[command(subcommand)]
    Paths(PathsCommands),
    /// Inspect, export or clear stored data
    #[command(subcommand)]
    Data(DataCommands),
}

/// Folder to scan: an explicit path or a saved one.
#[derive(Args, Clone)]
pub struct ScanRoot {
    #[arg(conflicts_with = "saved")]
    pub path: Option<PathBuf>,

    /// Use the N-th saved path (1-based, see `paths list`)
    #[arg(long, value_name = "N")]
    pub saved: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GroupByArg {
    None,
    Status,
    Requirements,
    Files,
    Size,
}

#[derive(Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub root: ScanRoot,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum, default_value = "none")]
    pub group_by: GroupByArg,
    /// Only show projects with this status (or "all")
    #[arg(long, value_parser = parse_status_filter, default_value = "all")]
    pub status: StatusFilter,
}

#[derive(Args)]
pub struct DashboardCommand {
    #[command(flatten)]
    pub root: ScanRoot,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CompareCommand {
    #[command(flatten)]
    pub root: ScanRoot,
    /// Project name to include; repeat for more (default: the first few)
    #[arg(long = "project", value_name = "NAME")]
    pub projects: Vec<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub root: ScanRoot,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Print only the plain-text report
    #[arg(long, conflicts_with = "format")]
    pub text: bool,
}

#[derive(Subcommand)]
pub enum StatusCommands {
    /// Show the stored record for a project folder
    Show { project: PathBuf },
    /// Set the status of a project folder
    Set(SetStatusCommand),
    /// Set one status on several scanned projects
    Bulk(BulkStatusCommand),
    /// Empty the notes of every scanned project
    ClearNotes {
        #[command(flatten)]
        root: ScanRoot,
    },
    /// Count stored records by status
    Counts,
}

#[derive(Args)]
pub struct SetStatusCommand {
    pub project: PathBuf,
    #[arg(value_parser = parse_status)]
    pub status: Status,
    /// Replace the notes; existing notes are kept when omitted
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct BulkStatusCommand {
    /// Status to apply
    #[arg(value_parser = parse_status)]
    pub status: Status,
    #[command(flatten)]
    pub root: ScanRoot,
    /// Project name to update; repeat for more
    #[arg(
        long = "project",
        value_name = "NAME",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub projects: Vec<String>,
    /// Update every scanned project
    #[arg(long)]
    pub all: bool,
    /// Notes to store (default: empty, or "Bulk updated" with --all)
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum PathsCommands {
    List,
    Add { path: String },
    Remove { path: String },
}

#[derive(Subcommand)]
pub enum DataCommands {
    /// Print the contents of both data files
    Show,
    /// Export status records as JSON
    ExportProjects {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export saved paths and settings as JSON
    ExportSettings {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete both data files
    Clear {
        #[arg(long, short)]
        yes: bool,
    },
}

fn parse_status(raw: &str) -> Result<Status, String> {
    raw.parse::<Status>().map_err(|e| e.to_string())
}

fn parse_status_filter(raw: &str) -> Result<StatusFilter, String> {
    if raw.trim().eq_ignore_ascii_case("all") {
        Ok(StatusFilter::All)
    } else {
        parse_status(raw).map(StatusFilter::Only)
    }
}
