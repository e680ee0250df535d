//! CLI entry point for notedex.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use notedex_core::{
    check_index, init_config, load_config, publish, scan_notes, update_index, watch_notes, Config,
    GitCli, PublishOutcome, UpdateReport,
};

#[derive(Parser)]
#[command(name = "notedex")]
#[command(about = "Maintain the index of solution notes organized by topic")]
struct Cli {
    /// Repository root containing the notes directory and the index file.
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Regenerate the index, then commit and push if new notes were found.
    Update {
        /// Write the index but skip the git commit and push.
        #[arg(long)]
        no_publish: bool,
    },
    /// Scan and report what would change, without writing anything.
    Check,
    /// List the notes found under the notes directory.
    Scan {
        /// Print the scan result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Re-render the index whenever the notes directory changes.
    Watch,
    /// Write a default notedex.toml into the repository.
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = load_config(&cli.repo);

    match cli.command.unwrap_or(Commands::Update { no_publish: false }) {
        Commands::Update { no_publish } => run_update(&cli.repo, &cfg, no_publish),
        Commands::Check => run_check(&cli.repo, &cfg),
        Commands::Scan { json } => run_scan(&cli.repo, &cfg, json),
        Commands::Watch => run_watch(&cli.repo, &cfg),
        Commands::Init => run_init(&cli.repo),
    }
}

fn run_update(repo: &Path, cfg: &Config, no_publish: bool) -> ExitCode {
    let report = match update_index(repo, cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    print_summary(&report);
    println!("Wrote {}", report.index_path.display());

    if report.new_notes.is_empty() {
        println!("No new notes; nothing to publish.");
        return ExitCode::SUCCESS;
    }
    if no_publish || !cfg.publish {
        println!("Publishing disabled; index updated only.");
        return ExitCode::SUCCESS;
    }
    match publish(&GitCli::new(repo), &report.new_notes) {
        Ok(PublishOutcome::Pushed) => {
            println!("Committed and pushed {} new note(s).", report.new_notes.len());
            ExitCode::SUCCESS
        }
        Ok(PublishOutcome::NothingToCommit) => {
            println!("Working tree already clean; nothing to commit.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Warning: index written, but publishing failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_check(repo: &Path, cfg: &Config) -> ExitCode {
    match check_index(repo, cfg) {
        Ok(report) => {
            print_summary(&report);
            if report.new_notes.is_empty() {
                println!("Index is up to date.");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_scan(repo: &Path, cfg: &Config, json: bool) -> ExitCode {
    let categories = match scan_notes(repo, &cfg.notes_dir, cfg.exclude_zero_identifier) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if json {
        match serde_json::to_string_pretty(&categories) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (name, notes) in &categories {
            println!("{} ({})", name, notes.len());
            for note in notes {
                println!("  {}.{}  {}", note.id, note.title, note.rel_path);
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_watch(repo: &Path, cfg: &Config) -> ExitCode {
    println!(
        "Watching {} (Ctrl+C to stop)",
        repo.join(&cfg.notes_dir).display()
    );
    let result = watch_notes(repo, cfg, |outcome| match outcome {
        Ok(report) => println!(
            "Re-rendered index: {} note(s), {} new",
            report.total_notes(),
            report.new_notes.len()
        ),
        Err(e) => eprintln!("Warning: update failed: {}", e),
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_init(repo: &Path) -> ExitCode {
    match init_config(repo) {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_summary(report: &UpdateReport) {
    println!(
        "Found {} categor{}, {} note(s)",
        report.category_count(),
        if report.category_count() == 1 { "y" } else { "ies" },
        report.total_notes()
    );
    for (name, notes) in &report.categories {
        println!("  {}: {}", name, notes.len());
    }
    if !report.new_notes.is_empty() {
        println!("New notes ({}):", report.new_notes.len());
        for note in &report.new_notes {
            println!("  {}.{}", note.id, note.title);
        }
    }
}
