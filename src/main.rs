use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use pagenav::cli::{render_output, Cli, OutputFormat};
use pagenav::logging::init_tracing;
use pagenav::ui::PagerBar;
use pagenav::Navigation;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let pager = cli.pager(config);

    if cli.format == OutputFormat::Tui && !cli.range_only {
        if let Some(nav) = cli.navigation(&pager) {
            draw_inline(&nav)?;
        }
        return Ok(());
    }

    let output = render_output(&cli, &pager)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.is_empty() && !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn draw_inline(nav: &Navigation) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(1),
        },
    )
    .context("opening terminal")?;

    terminal
        .draw(|frame| frame.render_widget(PagerBar::new(nav), frame.area()))
        .context("drawing pager")?;
    println!();
    Ok(())
}
