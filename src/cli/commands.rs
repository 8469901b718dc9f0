use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use context_analyzer::config::{AnalyzerConfig, METADATA_DIR_NAME};
use context_analyzer::context::{AnalysisRun, ProjectAnalyzer};
use context_analyzer::ecosystem::join_tags;
use context_analyzer::report::{DocumentAction, ReportMode};

#[derive(Parser)]
#[command(name = "context-analyzer")]
#[command(about = "Analyze a project and write context documents for AI coding assistants")]
#[command(version)]
#[command(after_long_help = r###"
EXAMPLES:
    # Analyze the current directory
    context-analyzer

    # Analyze another project and print a summary
    context-analyzer --path ../my-service --verbose

    # Regenerate the overview, keeping its "## Custom Notes" section
    context-analyzer --update

    # Print the analysis as JSON
    context-analyzer --json
"###)]
pub struct Cli {
    /// Project path to analyze
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Print a summary of the analysis
    #[arg(long)]
    pub verbose: bool,

    /// Update the existing analysis instead of overwriting it
    #[arg(long)]
    pub update: bool,

    /// Print the full analysis result as JSON instead of progress messages
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn mode(&self) -> ReportMode {
        if self.update {
            ReportMode::Update
        } else {
            ReportMode::Create
        }
    }
}

/// Analyze the project at `cli.path` and write its context documents.
pub fn analyze_project(cli: &Cli) -> Result<()> {
    let config = AnalyzerConfig::new(&cli.path)?;
    let context_dir = config.context_dir.clone();
    let analyzer = ProjectAnalyzer::new(config);

    if !cli.json {
        println!("🔍 Analyzing project structure...");
    }

    let run = analyzer.run(cli.mode(), Local::now().naive_local())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    if run.created_metadata_dir {
        println!("📁 Created {} directory", METADATA_DIR_NAME);
    }
    if run.outcome.overview == DocumentAction::Updated {
        println!("📝 Updated existing project overview (previous version kept as .bak)");
    }
    if run.outcome.task_tracker == DocumentAction::Updated {
        println!("📋 Updated existing task tracker");
    }
    println!("✅ Analysis complete! Context saved to {}", context_dir.display());

    if cli.verbose {
        print_summary(&run);
    }

    Ok(())
}

fn print_summary(run: &AnalysisRun) {
    let analysis = &run.analysis;
    let structure = &analysis.structure;

    println!();
    println!("Analysis Results:");
    println!("  Project Types: {}", join_tags(&analysis.tags));
    println!("  Total Files: {}", structure.total_files);

    if structure.languages.is_empty() {
        println!("  Languages: none");
    } else {
        println!("  Languages:");
        for (lang, count) in structure.languages.iter() {
            println!("    {}: {}", lang, count);
        }
    }

    if structure.skipped_entries > 0 {
        println!("  Skipped (unreadable): {}", structure.skipped_entries);
    }
}
