//! Command-line interface for the pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use statute_memory::{Fact, FactFilter, FactStore, MemoryLevel};

use crate::config::{PipelineConfig, TEXT_WRAP_WIDTH};
use crate::error::{PipelineError, Result};
use crate::validate::ValidationOutcome;
use crate::workflow::run_workflow;

/// Statute Pipeline - Stream statute articles into the fact store.
#[derive(Parser)]
#[command(name = "statute-pipeline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract articles from a document, store them and validate the store.
    Run {
        /// WordprocessingML document (default: $STATUTE_DOCUMENT or the 44-FZ export)
        document: Option<PathBuf>,

        /// Fact store location (default: .rlm_test/memory_bridge_v2.db)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Number of articles to store before stopping
        #[arg(short, long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Store every article in the document
        #[arg(long)]
        all: bool,

        /// Body characters kept per fact
        #[arg(short, long)]
        preview: Option<usize>,

        /// Text that must appear in a stored fact
        #[arg(short, long)]
        target: Option<String>,

        /// Domain label for stored facts
        #[arg(short, long)]
        domain: Option<String>,

        /// Paragraph prefix that opens an article (default: "Статья ")
        #[arg(short, long)]
        marker: Option<String>,
    },

    /// List stored facts.
    Facts {
        /// Fact store location (default: .rlm_test/memory_bridge_v2.db)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Only facts at this level (e.g. L1_DOMAIN or l1)
        #[arg(short, long, value_parser = parse_level)]
        level: Option<MemoryLevel>,

        /// Only facts in this domain
        #[arg(short, long)]
        domain: Option<String>,

        /// Only facts whose content contains this text
        #[arg(short, long)]
        contains: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

fn parse_level(value: &str) -> std::result::Result<MemoryLevel, String> {
    value.parse().map_err(|e: statute_memory::MemoryError| e.to_string())
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PipelineConfig::from_env()?;

    match cli.command {
        Commands::Run {
            document,
            store,
            limit,
            all,
            preview,
            target,
            domain,
            marker,
        } => {
            let mut config = config;
            if let Some(document) = document {
                config.document_path = document;
            }
            if let Some(store) = store {
                config.store_path = store;
            }
            if all {
                config.max_sections = None;
            } else if let Some(limit) = limit {
                config.max_sections = Some(limit);
            }
            if let Some(preview) = preview {
                config.preview_chars = preview;
            }
            if let Some(target) = target {
                config.target = target;
            }
            if let Some(domain) = domain {
                config.domain = domain;
            }
            if let Some(marker) = marker {
                config = config.with_marker(marker)?;
            }
            run_command(&config)
        }
        Commands::Facts {
            store,
            level,
            domain,
            contains,
            format,
        } => {
            let store = store.unwrap_or(config.store_path);
            let filter = FactFilter {
                level,
                domain,
                contains,
                ..FactFilter::default()
            };
            facts_command(&store, &filter, format)
        }
    }
}

/// Execute the run command.
fn run_command(config: &PipelineConfig) -> Result<()> {
    println!(
        "{} {}",
        style("Processing").bold(),
        style(config.document_path.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Extracting articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match run_workflow(config) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Stored: {}", style(report.ingest.stored).green());
    if report.ingest.cap_reached {
        println!(
            "  Limit of {} articles reached, rest of the document not read",
            report.ingest.stored
        );
    }
    println!("  Facts in store: {}", report.validation.total);
    println!();

    match report.validation.outcome {
        ValidationOutcome::Found => println!(
            "{} {} fact(s) contain '{}'",
            style("Validated:").green().bold(),
            report.validation.matched.len(),
            report.validation.target
        ),
        ValidationOutcome::TargetMissing => println!(
            "{} no stored fact contains '{}'",
            style("Warning:").yellow().bold(),
            report.validation.target
        ),
        ValidationOutcome::EmptyStore => println!(
            "{} no facts found in store",
            style("Warning:").yellow().bold()
        ),
    }

    Ok(())
}

/// Execute the facts command.
fn facts_command(
    path: &std::path::Path,
    filter: &FactFilter,
    format: OutputFormat,
) -> Result<()> {
    if !path.exists() {
        return Err(PipelineError::Config(format!(
            "Fact store does not exist: {}",
            path.display()
        )));
    }

    let store = FactStore::open(path)?;
    let facts = store.query(filter)?;
    store.close()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&facts)?),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&facts)?),
        OutputFormat::Text => print_facts(&facts),
    }

    Ok(())
}

fn print_facts(facts: &[Fact]) {
    if facts.is_empty() {
        println!("{}", style("No facts found").yellow());
        return;
    }

    let options = textwrap::Options::new(TEXT_WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");

    for fact in facts {
        println!(
            "{} {} {} {}",
            style(format!("#{}", fact.id)).bold(),
            style(fact.level).cyan(),
            fact.domain,
            style(format!(
                "({}, {})",
                fact.source,
                fact.created_at.format("%Y-%m-%d %H:%M:%S")
            ))
            .dim()
        );
        println!("{}", textwrap::fill(&fact.content, &options));
    }
    println!();
    println!("{} fact(s)", facts.len());
}
