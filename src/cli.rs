//! Command-line front-end: argument parsing and text/JSON output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::pager::{Navigation, Pager};
use crate::range::PaginationInfo;

#[derive(Parser, Debug)]
#[command(name = "pagenav", version, about = "Resolve and print pagination links")]
pub struct Cli {
    /// Page being viewed
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub current: i64,

    /// Total number of pages
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub total: i64,

    /// Path of the route being viewed
    #[arg(long, default_value = "/")]
    pub base_path: String,

    /// Page number the router matched in --base-path, if any
    #[arg(long)]
    pub page_param: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide numbered page links
    #[arg(long)]
    pub no_links: bool,

    /// Hide first/prev/next/last shortcuts
    #[arg(long)]
    pub no_navigation: bool,

    /// Print the resolved window as JSON and skip link building
    #[arg(long)]
    pub range_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One link per line: text, path, aria label
    Text,
    Json,
    /// Draw the pager bar inline in the terminal
    Tui,
}

impl Cli {
    pub fn info(&self) -> PaginationInfo {
        PaginationInfo::new(self.current, self.total)
    }

    /// Load the config named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Config::load().context("loading default config"),
        }
    }

    /// Build a pager from `config` with command-line overrides applied.
    pub fn pager(&self, config: Config) -> Pager {
        let mut options = config.pager;
        if self.no_links {
            options.show_links = false;
        }
        if self.no_navigation {
            options.show_navigation = false;
        }
        Pager::new(options)
    }

    pub fn navigation(&self, pager: &Pager) -> Option<Navigation> {
        pager.render(&self.info(), &self.base_path, self.page_param)
    }
}

/// Render the text or JSON output for `cli`. Returns an empty string when
/// the pager is suppressed in text mode.
pub fn render_output(cli: &Cli, pager: &Pager) -> Result<String> {
    if cli.range_only {
        let range = cli.info().resolve();
        return serde_json::to_string_pretty(&range).context("serializing range");
    }

    let nav = cli.navigation(pager);
    match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&nav).context("serializing navigation"),
        // The terminal bar is drawn by the binary; fall back to text elsewhere.
        OutputFormat::Text | OutputFormat::Tui => Ok(nav.as_ref().map(render_text).unwrap_or_default()),
    }
}

/// Tab-separated lines, current page marked with `*`.
pub fn render_text(nav: &Navigation) -> String {
    nav.links
        .iter()
        .map(|link| {
            let marker = if link.aria_current { "*" } else { "" };
            format!("{}{}\t{}\t{}\n", marker, link.text, link.path, link.aria_label)
        })
        .collect()
}
