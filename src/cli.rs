use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Finds hard-coded colors, borders and shadows in CSS and maps them onto
/// design-system variables.
#[derive(Debug, Parser)]
#[command(name = "cyber-refactor", version, about)]
pub struct Cli {
    /// Preference file holding the theme and sidebar width.
    #[arg(long, global = true, default_value = "cyber-refactor.json")]
    pub prefs: PathBuf,

    /// Append debug logs to this file.
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every replaceable declaration and its suggested variable.
    Scan {
        file: PathBuf,
    },
    /// Rewrite every finding that has a suggestion.
    Refactor {
        file: PathBuf,
        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the manual suggestions for a line.
    Suggest {
        file: PathBuf,
        /// 1-based line number.
        #[arg(long)]
        line: usize,
    },
    /// Show or change the stored theme.
    Theme {
        action: Option<ThemeAction>,
    },
    /// Show or change the stored sidebar width (snapped to breakpoints).
    Sidebar {
        width: Option<i32>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
