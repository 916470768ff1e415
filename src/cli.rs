//! Command-line interface
//!
//! Defines the `copydesk` command surface and drives the check pipeline:
//! read files -> validate -> report -> regenerate registries -> write
//! files. The whole run is a single synchronous pass over the corpus.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::config::Config;
use crate::corpus;
use crate::models::{Article, ContentPlan};
use crate::registry::{content_plan, statistics, tag_library, write_with_retry};
use crate::report::{ArticleReport, CorpusReport};
use crate::services::{
    complete_topic, recompute, FrontMatterValidator, QualityChecker, TagChecker,
};

/// CLI for the editorial consistency checker.
#[derive(Debug, Parser)]
#[command(name = "copydesk", version, about = "Editorial consistency checker for Markdown blog corpora")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "copydesk.yml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Top-level subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Validate every article and optionally regenerate the registries.
    Check {
        /// Corpus directory (defaults to the configured one)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Tag library document
        #[arg(long)]
        tags: Option<PathBuf>,
        /// Statistics document
        #[arg(long)]
        stats: Option<PathBuf>,
        /// Content plan document
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Rewrite the statistics document after validation
        #[arg(long)]
        write: bool,
        /// Report output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Regenerate the statistics document from the corpus.
    Stats {
        /// Corpus directory (defaults to the configured one)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Statistics document to write
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Inspect and update the content plan.
    Plan {
        #[command(subcommand)]
        cmd: PlanCommand,
    },
}

/// Content plan subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum PlanCommand {
    /// Print the next topic to write, by priority order
    Next {
        /// Content plan document
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// Mark a topic completed and rewrite the plan document
    Complete {
        /// Exact topic title
        title: String,
        /// Completion date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Content plan document
        #[arg(long)]
        plan: Option<PathBuf>,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON for toolchain consumption
    Json,
}

/// Execute a parsed command, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(&cli.config)?;
    let today = Local::now().date_naive();

    match cli.cmd {
        Command::Check {
            corpus,
            tags,
            stats,
            plan,
            write,
            format,
        } => run_check(&config, today, CheckPaths { corpus, tags, stats, plan }, write, format),
        Command::Stats {
            corpus,
            output,
            dry_run,
        } => run_stats(&config, today, corpus, output, dry_run),
        Command::Plan { cmd } => match cmd {
            PlanCommand::Next { plan } => run_plan_next(&config, plan),
            PlanCommand::Complete { title, date, plan } => {
                run_plan_complete(&config, &title, date.unwrap_or(today), plan)
            }
        },
    }
}

/// Path overrides for the check command.
struct CheckPaths {
    corpus: Option<PathBuf>,
    tags: Option<PathBuf>,
    stats: Option<PathBuf>,
    plan: Option<PathBuf>,
}

/// Run the full validation pass.
fn run_check(
    config: &Config,
    today: NaiveDate,
    paths: CheckPaths,
    write: bool,
    format: OutputFormat,
) -> Result<i32> {
    let corpus_dir = paths.corpus.unwrap_or_else(|| config.corpus.dir.clone());
    let library_path = paths
        .tags
        .unwrap_or_else(|| config.registry.tag_library.clone());
    let stats_path = paths
        .stats
        .unwrap_or_else(|| config.registry.statistics.clone());
    let plan_path = paths
        .plan
        .unwrap_or_else(|| config.registry.content_plan.clone());

    let mut library = tag_library::load(&library_path)?;
    tracing::info!("tag library loaded: {} tags", library.len());

    let documents = corpus::load_corpus(&corpus_dir)?;
    tracing::info!("corpus loaded: {} documents", documents.len());

    let mut report = CorpusReport::default();
    let mut articles: Vec<Article> = Vec::new();

    {
        let validator = FrontMatterValidator::with_rules(today, config.description.clone());
        let tag_checker = TagChecker::with_rules(&library, config.tags.clone());
        let quality_checker = QualityChecker::with_config(config.quality.clone());

        for doc in documents {
            let outcome = validator.validate(&doc.front_matter);

            let article = outcome
                .front_matter
                .clone()
                .map(|fm| Article::new(doc.slug.clone(), fm, doc.body.clone()));

            if let Some(ref article) = article {
                if article.draft && !config.corpus.lint_drafts {
                    tracing::debug!("skipping draft: {}", article.slug);
                    articles.push(article.clone());
                    continue;
                }
            }

            // The tag check runs whenever the tag list parsed, even if
            // other front-matter fields failed
            let tags_check = outcome.tags.as_ref().map(|tags| tag_checker.check(tags));
            let quality = article.as_ref().map(|a| quality_checker.assess(a));

            report.articles.push(ArticleReport {
                slug: doc.slug,
                front_matter: outcome,
                tags: tags_check,
                quality,
            });
            if let Some(article) = article {
                articles.push(article);
            }
        }
    }

    // Derived views: recompute from scratch, never patch
    let stats = recompute(&articles, today);
    for def in &mut library.definitions {
        def.usage_count = stats.count_for(&def.name);
    }
    let unused: Vec<&str> = library
        .definitions
        .iter()
        .filter(|d| d.usage_count == 0)
        .map(|d| d.name.as_str())
        .collect();
    if !unused.is_empty() {
        tracing::info!("library tags with no published usage: {}", unused.join(", "));
    }

    if write {
        if let Err(e) = write_with_retry(&stats_path, &statistics::render(&stats)) {
            // The corpus stays the source of truth; record the lag and
            // keep going
            tracing::warn!("statistics document not regenerated: {e}");
            report
                .registry_lag
                .push(format!("statistics document not regenerated: {e}"));
        } else {
            tracing::info!("statistics document regenerated: {}", stats_path.display());
        }
    }

    match content_plan::load(&plan_path) {
        Ok(plan) => log_plan_progress(&plan),
        Err(e) => tracing::debug!("content plan not loaded: {e}"),
    }

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.exit_code())
}

/// Log where the content plan stands after a check run.
fn log_plan_progress(plan: &ContentPlan) {
    tracing::info!(
        "content plan: {}/{} topics completed ({:.2}%)",
        plan.completed_count(),
        plan.total_count(),
        plan.completion_percentage()
    );
    match plan.next_topic() {
        Some(topic) => tracing::info!("next planned topic [{}]: {}", topic.priority, topic.title),
        None => tracing::info!("content plan exhausted"),
    }
}

/// Regenerate the statistics document only.
fn run_stats(
    config: &Config,
    today: NaiveDate,
    corpus_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<i32> {
    let corpus_dir = corpus_dir.unwrap_or_else(|| config.corpus.dir.clone());
    let output = output.unwrap_or_else(|| config.registry.statistics.clone());

    let documents = corpus::load_corpus(&corpus_dir)?;
    let validator = FrontMatterValidator::with_rules(today, config.description.clone());

    let mut articles = Vec::new();
    for doc in documents {
        let outcome = validator.validate(&doc.front_matter);
        if let Some(fm) = outcome.front_matter {
            articles.push(Article::new(doc.slug, fm, doc.body));
        } else {
            tracing::warn!("skipping {} (front matter invalid)", doc.slug);
        }
    }

    let stats = recompute(&articles, today);
    let rendered = statistics::render(&stats);

    if dry_run {
        print!("{rendered}");
    } else {
        write_with_retry(&output, &rendered)?;
        tracing::info!("statistics document written: {}", output.display());
    }
    Ok(crate::report::EXIT_OK)
}

/// Print the next planned topic.
fn run_plan_next(config: &Config, plan_path: Option<PathBuf>) -> Result<i32> {
    let plan_path = plan_path.unwrap_or_else(|| config.registry.content_plan.clone());
    let plan = content_plan::load(&plan_path)?;

    match plan.next_topic() {
        Some(topic) => println!("[{}] {}", topic.priority, topic.title),
        None => println!("Content plan exhausted."),
    }
    Ok(crate::report::EXIT_OK)
}

/// Mark a topic completed and rewrite the plan document.
fn run_plan_complete(
    config: &Config,
    title: &str,
    date: NaiveDate,
    plan_path: Option<PathBuf>,
) -> Result<i32> {
    let plan_path = plan_path.unwrap_or_else(|| config.registry.content_plan.clone());
    let mut plan = content_plan::load(&plan_path)?;

    complete_topic(&mut plan, title, date)?;
    write_with_retry(&plan_path, &content_plan::render(&plan))?;

    println!(
        "Completed '{title}'. Plan is now {:.2}% done ({}/{}).",
        plan.completion_percentage(),
        plan.completed_count(),
        plan.total_count()
    );
    Ok(crate::report::EXIT_OK)
}
