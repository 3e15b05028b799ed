//! Command-line interface for the crawler.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_location, CrawlerConfig, CURATORS_ENV_VAR, DEFAULT_CURATORS};
use crate::crawler::{Crawler, TourCrawler};
use crate::error::Result;
use crate::source::FilePageWalker;
use crate::types::{Table, TourVariant};
use crate::xlsx::save_xlsx;

/// Bookquest Crawler - Collect livelib bookquest entries into a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "bookquest-crawler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Saved pages: a directory, a glob pattern or a single HTML file
    pub url: String,

    /// Output spreadsheet path (e.g., tour.xlsx)
    pub out: PathBuf,

    /// Curator names in priority order
    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ',',
        env = CURATORS_ENV_VAR,
        default_values_t = DEFAULT_CURATORS.map(String::from)
    )]
    pub curators: Vec<String>,

    /// Tour ruleset (2022 or 2023)
    #[arg(short, long, default_value = "2022")]
    pub tour: String,

    /// Log every processed page
    #[arg(short, long)]
    pub verbose: bool,
}

/// Row counts reported after a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub rows: usize,
    pub with_comments: usize,
    pub without_curator: usize,
}

impl CrawlSummary {
    #[must_use]
    pub fn of(table: &Table) -> Self {
        let rows = table.rows();
        Self {
            rows: rows.len(),
            with_comments: rows.iter().filter(|r| !r.comment.is_empty()).count(),
            without_curator: rows.iter().filter(|r| r.curator.is_none()).count(),
        }
    }
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    // Validate inputs before touching any document
    validate_location(&cli.url)?;
    let variant: TourVariant = cli.tour.parse()?;
    let config = CrawlerConfig::new(cli.curators).with_verbose(cli.verbose);

    println!(
        "{} {} for tour {}",
        style("Crawling").bold(),
        style(&cli.url).cyan(),
        style(variant).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Listing pages...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let walker = match FilePageWalker::new(&cli.url) {
        Ok(walker) => walker,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    let pages = walker.len();

    pb.set_message(format!("Parsing {pages} pages..."));

    let table = match TourCrawler::new(walker, variant, config).and_then(|mut c| c.parse()) {
        Ok(table) => table,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving spreadsheet...");

    let output_path = match save_xlsx(&table, &cli.out) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let summary = CrawlSummary::of(&table);
    println!("  Pages: {pages}");
    println!("  Entries: {}", style(summary.rows).green());
    if summary.with_comments > 0 {
        println!(
            "  With comments: {}",
            style(summary.with_comments).yellow().bold()
        );
    }
    if summary.without_curator > 0 {
        println!(
            "  Without curator: {}",
            style(summary.without_curator).yellow().bold()
        );
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
