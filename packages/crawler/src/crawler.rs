//! Crawl engine that ties all components together.

use std::path::{Path, PathBuf};

use scraper::Html;

use crate::config::CrawlerConfig;
use crate::entry::extract_entries;
use crate::error::Result;
use crate::rules::{create_tour_ruleset, TourRuleset};
use crate::source::PageWalker;
use crate::types::{Table, TourVariant};
use crate::xlsx::save_xlsx;

/// A crawl over a document source producing one table.
pub trait Crawler {
    /// Walk every page, collect all entries and return them sorted by
    /// application id.
    ///
    /// Any malformed page or entry aborts the whole crawl.
    fn parse(&mut self) -> Result<Table>;

    /// Crawl and save the table as a spreadsheet.
    ///
    /// # Returns
    /// Path of the written file
    fn parse_to_file(&mut self, path: &Path) -> Result<PathBuf> {
        let table = self.parse()?;
        save_xlsx(&table, path)
    }
}

/// Crawler for bookquest tour pages.
///
/// The tour decides the columns and classifiers through its ruleset; the
/// walker decides where pages come from.
pub struct TourCrawler<W: PageWalker> {
    walker: W,
    ruleset: TourRuleset,
    config: CrawlerConfig,
}

impl<W: PageWalker> TourCrawler<W> {
    /// Create a crawler for a tour.
    ///
    /// # Errors
    /// Returns an error if the tour's rules cannot be built.
    pub fn new(walker: W, variant: TourVariant, config: CrawlerConfig) -> Result<Self> {
        let ruleset = create_tour_ruleset(variant, &config)?;
        Ok(Self::with_ruleset(walker, ruleset, config))
    }

    /// Create a crawler with a custom ruleset.
    #[must_use]
    pub fn with_ruleset(walker: W, ruleset: TourRuleset, config: CrawlerConfig) -> Self {
        Self {
            walker,
            ruleset,
            config,
        }
    }

    #[must_use]
    pub fn ruleset(&self) -> &TourRuleset {
        &self.ruleset
    }

    #[must_use]
    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Extract all entries of one page into the table.
    ///
    /// # Returns
    /// Number of rows appended
    pub fn parse_page(&self, document: &Html, context: &str, table: &mut Table) -> Result<usize> {
        let entries = extract_entries(document, context)?;
        let count = entries.len();

        for raw in entries {
            table.push(self.ruleset.build_record(raw));
        }

        Ok(count)
    }
}

impl<W: PageWalker> Crawler for TourCrawler<W> {
    fn parse(&mut self) -> Result<Table> {
        let mut table = self.ruleset.new_table();
        let mut page_number = 0usize;

        while let Some(page) = self.walker.next_page()? {
            page_number += 1;
            let context = page.source.display().to_string();

            if self.config.verbose() {
                tracing::info!(page = page_number, source = %context, "Processing page");
            } else {
                tracing::debug!(page = page_number, source = %context, "Processing page");
            }

            let count = self.parse_page(&page.document, &context, &mut table)?;
            tracing::debug!(page = page_number, entries = count, "Page processed");
        }

        table.sort_by_app_id();

        tracing::info!(
            tour = %self.ruleset.variant(),
            pages = page_number,
            entries = table.len(),
            "Crawl finished"
        );
        Ok(table)
    }
}
