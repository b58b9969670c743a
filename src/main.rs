mod analyze;
mod cli;
mod config;
mod error;
mod export;
mod report;
mod scan;
mod store;
mod types;

use crate::analyze::group::GroupBy;
use crate::analyze::Assessment;
use crate::error::{OrganizerError, Result};
use crate::store::{ProjectStore, BULK_UPDATE_NOTE};
use crate::types::config::OrganizerConfig;
use crate::types::project::Status;
use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

struct Context {
    config: OrganizerConfig,
    store: ProjectStore,
}

impl Context {
    fn load(data_dir: &Path) -> Result<Self> {
        let config = config::load_config(data_dir)?;
        let store = ProjectStore::open(
            data_dir.join(config.data_file()),
            data_dir.join(config.paths_file()),
        )?;
        Ok(Self { config, store })
    }

    fn resolve_root(&self, root: &cli::ScanRoot) -> Result<PathBuf> {
        if let Some(path) = &root.path {
            return Ok(path.clone());
        }
        let index = root.saved.ok_or(OrganizerError::MissingScanPath)?;
        let saved = self.store.saved_paths();
        index
            .checked_sub(1)
            .and_then(|position| saved.get(position))
            .map(PathBuf::from)
            .ok_or(OrganizerError::SavedPathIndex {
                index,
                count: saved.len(),
            })
    }

    /// Scans the chosen root; `None` when it holds no Python projects.
    fn scan(&self, root: &cli::ScanRoot) -> Result<Option<(PathBuf, Vec<Assessment>)>> {
        let path = self.resolve_root(root)?;
        let projects = scan::scan_projects_folder(&path)?;
        if projects.is_empty() {
            eprintln!("warning: no Python projects found in {}", path.display());
            return Ok(None);
        }
        let assessed = analyze::assess(&projects, &self.store);
        Ok(Some((path, assessed)))
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

/// Store key for a project folder, built the way a scan builds it: the
/// parent is canonicalized and the folder's own name is kept, so a
/// symlinked project stays keyed under its link.
fn project_key(project: &Path) -> Result<String> {
    if !project.exists() {
        return Err(OrganizerError::PathNotFound(project.display().to_string()));
    }
    let key = match (project.parent(), project.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent.canonicalize()?.join(name)
        }
        _ => project.canonicalize()?,
    };
    Ok(key.display().to_string())
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut ctx = Context::load(&cli.data_dir)?;
    let today = Local::now().date_naive();
    let analysis = ctx.config.analysis();

    match cli.command {
        cli::Commands::Scan(cmd) => {
            let Some((root, assessed)) = ctx.scan(&cmd.root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let group_by = match cmd.group_by {
                cli::GroupByArg::None => GroupBy::None,
                cli::GroupByArg::Status => GroupBy::Status,
                cli::GroupByArg::Requirements => GroupBy::Requirements,
                cli::GroupByArg::Files => GroupBy::PythonFiles,
                cli::GroupByArg::Size => GroupBy::Size,
            };
            let explorer = analyze::group::explore(
                &root.display().to_string(),
                &assessed,
                cmd.status,
                group_by,
            );
            println!("{}", report::render(&explorer, output_format(cmd.format))?);
            if explorer.matched == 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Dashboard(cmd) => {
            let Some((root, assessed)) = ctx.scan(&cmd.root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let dashboard = analyze::dashboard(
                &root.display().to_string(),
                assessed,
                today,
                analysis.stale_after_days,
            );
            println!("{}", report::render(&dashboard, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let Some((_, assessed)) = ctx.scan(&cmd.root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let comparison =
                analyze::compare::compare(&assessed, &cmd.projects, analysis.compare_limit, today);
            println!("{}", report::render(&comparison, output_format(cmd.format))?);
            if comparison.unknown.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Report(cmd) => {
            let Some((_, assessed)) = ctx.scan(&cmd.root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let status_report = analyze::status_report::status_report(&assessed);
            if cmd.text {
                print!("{}", status_report.to_text());
            } else {
                println!("{}", report::render(&status_report, output_format(cmd.format))?);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Status(command) => run_status(&mut ctx, command),
        cli::Commands::Paths(command) => run_paths(&mut ctx, command),
        cli::Commands::Data(command) => run_data(&mut ctx, &cli.data_dir, command),
    }
}

fn run_status(ctx: &mut Context, command: cli::StatusCommands) -> Result<i32> {
    match command {
        cli::StatusCommands::Show { project } => {
            let key = project_key(&project)?;
            let record = ctx.store.get_project_status(&key);
            println!("project: {key}");
            println!("status: {} {}", record.status.emoji(), record.status);
            let updated = record
                .last_updated
                .map(|stamp| stamp.format("%m/%d/%Y").to_string())
                .unwrap_or_else(|| "never".to_string());
            println!("updated: {updated}");
            if !record.notes.is_empty() {
                println!("notes: {}", record.notes);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::StatusCommands::Set(cmd) => {
            let key = project_key(&cmd.project)?;
            let notes = match cmd.notes {
                Some(notes) => notes,
                None => ctx.store.get_project_status(&key).notes,
            };
            ctx.store.update_project_status(&key, cmd.status, &notes)?;
            println!("status updated: {key} -> {}", cmd.status);
            Ok(exit_code::SUCCESS)
        }
        cli::StatusCommands::Bulk(cmd) => {
            let Some((_, assessed)) = ctx.scan(&cmd.root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let projects: Vec<_> = assessed.into_iter().map(|a| a.project).collect();
            if cmd.all {
                let notes = cmd.notes.as_deref().unwrap_or(BULK_UPDATE_NOTE);
                let updated = ctx.store.set_all(&projects, cmd.status, notes)?;
                println!("updated status for {updated} projects -> {}", cmd.status);
                return Ok(exit_code::SUCCESS);
            }
            let notes = cmd.notes.as_deref().unwrap_or_default();
            let outcome = ctx
                .store
                .bulk_update(&projects, &cmd.projects, cmd.status, notes)?;
            println!(
                "updated status for {} projects -> {}",
                outcome.updated, cmd.status
            );
            if outcome.unknown.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("warning: unknown projects: {}", outcome.unknown.join(", "));
                Ok(exit_code::WARNINGS)
            }
        }
        cli::StatusCommands::ClearNotes { root } => {
            let Some((_, assessed)) = ctx.scan(&root)? else {
                return Ok(exit_code::WARNINGS);
            };
            let projects: Vec<_> = assessed.into_iter().map(|a| a.project).collect();
            let cleared = ctx.store.clear_notes(&projects)?;
            println!("cleared notes for {cleared} projects");
            Ok(exit_code::SUCCESS)
        }
        cli::StatusCommands::Counts => {
            let counts = ctx.store.projects_by_status();
            if counts.is_empty() {
                println!("status: no records");
                return Ok(exit_code::SUCCESS);
            }
            for status in Status::ALL {
                if let Some(count) = counts.get(&status) {
                    println!("{} {}: {}", status.emoji(), status, count);
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn run_paths(ctx: &mut Context, command: cli::PathsCommands) -> Result<i32> {
    match command {
        cli::PathsCommands::List => {
            if ctx.store.saved_paths().is_empty() {
                println!("paths: none saved");
                return Ok(exit_code::SUCCESS);
            }
            for (index, path) in ctx.store.saved_paths().iter().enumerate() {
                println!("{}. {}", index + 1, path);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::PathsCommands::Add { path } => {
            if ctx.store.add_saved_path(&path)? {
                println!("path saved: {path}");
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("warning: path already exists or is invalid: {path}");
                Ok(exit_code::WARNINGS)
            }
        }
        cli::PathsCommands::Remove { path } => {
            if ctx.store.remove_saved_path(&path)? {
                println!("path removed: {path}");
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("warning: path is not saved: {path}");
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn run_data(ctx: &mut Context, data_dir: &Path, command: cli::DataCommands) -> Result<i32> {
    match command {
        cli::DataCommands::Show => {
            print_data_file("project data", ctx.store.data_file())?;
            print_data_file("saved paths", ctx.store.paths_file())?;
            Ok(exit_code::SUCCESS)
        }
        cli::DataCommands::ExportProjects { output } => {
            let Some(export) = export::ProjectDataExport::from_store(&ctx.store) else {
                eprintln!("warning: no project data to export");
                return Ok(exit_code::WARNINGS);
            };
            let path = output.unwrap_or_else(|| {
                export::default_export_path(data_dir, "project_organizer_export")
            });
            export::write_export(&path, &export)?;
            println!("exported project data: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::DataCommands::ExportSettings { output } => {
            let export = export::SettingsExport::from_store(&ctx.store);
            let path = output
                .unwrap_or_else(|| export::default_export_path(data_dir, "organizer_settings"));
            export::write_export(&path, &export)?;
            println!("exported settings: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::DataCommands::Clear { yes } => {
            if !yes && !confirm("Clear all project data and saved paths?")? {
                println!("clear cancelled");
                return Ok(exit_code::SUCCESS);
            }
            ctx.store.clear_all()?;
            println!("all data cleared");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn print_data_file(label: &str, path: &Path) -> Result<()> {
    println!("## {label} ({})", path.display());
    if path.exists() {
        println!("{}", std::fs::read_to_string(path)?);
    } else {
        println!("no {label} file exists yet");
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let normalized = input.trim().to_ascii_lowercase();
    Ok(normalized == "y" || normalized == "yes")
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
