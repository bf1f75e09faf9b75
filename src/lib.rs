//! # cyber-refactor
//!
//! Command line front end for the [`stylemap`] engine and the [`workbench`]
//! session. Re-exports both crates so callers only need one dependency.

pub mod cli;
pub mod error;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::Path;

pub use stylemap;
pub use workbench;

pub use cli::{Cli, Command, ThemeAction};
pub use error::{RefactorError, Result};

use stylemap::TextRange;
use stylemap::buffer::TextBuffer;
use workbench::{FileStore, RefactorOutcome, Session, SidebarWidth, Theme};

use report::Painter;

fn open_session(path: &Path) -> Result<Session<TextBuffer>> {
    let source = fs::read_to_string(path).map_err(|source| RefactorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} ({} bytes)", path.display(), source.len());
    Ok(Session::new(TextBuffer::new(source)))
}

/// Byte range of the trimmed content of 1-based `line`.
fn line_content(text: &str, line: usize) -> Result<TextRange> {
    let lines = text.split('\n').count();
    let mut start = 0;
    for (index, content) in text.split('\n').enumerate() {
        if index + 1 == line {
            let leading = content.len() - content.trim_start().len();
            let trimmed = content.trim();
            return Ok(TextRange::new(start + leading, start + leading + trimmed.len()));
        }
        start += content.len() + 1;
    }
    Err(RefactorError::LineOutOfRange { line, lines })
}

fn refactor_summary(outcome: &RefactorOutcome) -> String {
    format!(
        "applied {} edit(s), {} finding(s) left",
        outcome.applied, outcome.after
    )
}

/// Runs one command, writing its report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W, color: bool) -> Result<()> {
    let mut painter = Painter::new(out, color);
    match &cli.command {
        Command::Scan { file } => {
            let session = open_session(file)?;
            let findings: Vec<_> = session.findings().collect();
            report::write_findings(&mut painter, &findings)?;
        }
        Command::Refactor { file, output } => {
            let mut session = open_session(file)?;
            let outcome = session.auto_refactor()?;
            let summary = refactor_summary(&outcome);
            match output {
                Some(path) => {
                    fs::write(path, session.text())?;
                    painter.plain(&format!("{summary}, wrote {}\n", path.display()))?;
                }
                None => {
                    painter.plain(session.text())?;
                    eprintln!("{summary}");
                }
            }
        }
        Command::Suggest { file, line } => {
            let mut session = open_session(file)?;
            let range = line_content(session.text(), *line)?;
            session.set_selection(range);
            report::write_context(&mut painter, session.selection_context().as_ref())?;
        }
        Command::Theme { action } => {
            let mut store = FileStore::open(&cli.prefs)?;
            let current = Theme::load(&store);
            let theme = match action {
                None => current,
                Some(ThemeAction::Light) => Theme::Light,
                Some(ThemeAction::Dark) => Theme::Dark,
                Some(ThemeAction::Toggle) => current.toggle(),
            };
            if action.is_some() {
                theme.save(&mut store)?;
            }
            painter.plain(&format!("theme: {theme}\n"))?;
        }
        Command::Sidebar { width } => {
            let mut store = FileStore::open(&cli.prefs)?;
            let stored = match width {
                Some(px) => SidebarWidth::set_snapped(&mut store, *px)?,
                None => SidebarWidth::load(&store),
            };
            painter.plain(&format!("sidebar: {}px\n", stored.px()))?;
        }
    }
    painter.flush()?;
    Ok(())
}
