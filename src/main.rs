use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_prep::artifacts::FileArtifactWriter;
use release_prep::config;
use release_prep::git::Git2Repository;
use release_prep::release::ReleaseOrchestrator;
use release_prep::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-prep",
    version,
    about = "Prepare a new release: update version, generate changelog, create git tag"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version number (e.g. 1.2.3); computed from the last tag when omitted"
    )]
    release_version: Option<String>,

    #[arg(long = "type", value_name = "TYPE", help = "Release type: major, minor, patch")]
    release_type: Option<String>,

    #[arg(long, help = "Do not create a git tag")]
    no_tag: bool,

    #[arg(long, help = "Do not commit changes")]
    no_commit: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short = 'C', long, default_value = ".", help = "Repository directory")]
    directory: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Show debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    let config = match config::load_config(args.config.as_deref(), &args.directory) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let mut repo = Git2Repository::new(&args.directory);
    if let Some((name, email)) = config.git.identity() {
        repo = repo.with_identity(name, email);
    }
    let writer = FileArtifactWriter::from_config(&args.directory, &config);
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &config.files);

    if let Err(e) = orchestrator.validate() {
        ui::display_error(&format!("{} ({})", e, args.directory.display()));
        std::process::exit(1);
    }

    let request = match config.request(
        args.release_version.clone(),
        args.release_type.as_deref(),
        args.no_tag,
        args.no_commit,
    ) {
        Ok(request) => request,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        ui::display_status("Dry run: no files or git state will be changed");
        match orchestrator.plan(&request) {
            Ok(plan) => ui::display_plan(&plan),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    ui::display_status("Starting release preparation...");
    let report = match orchestrator.prepare(&request) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let branch = repo
        .current_branch()
        .ok()
        .flatten()
        .unwrap_or_else(|| "main".to_string());

    ui::display_success(&format!("Release {} prepared", report.version));
    ui::display_report(&report, &config.files.changelog, &branch);

    Ok(())
}
