use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AnswerMode {
    /// Ask on stdin when stdin is a TTY, otherwise decline.
    Auto,
    /// Always ask on stdin (even when piped).
    Ask,
    /// Accept every confirmation without asking.
    Yes,
    /// Decline every confirmation without asking.
    No,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// HTML page to load. May be omitted when `--sample-page` is set.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Generate the built-in demo page (theme toggle + guarded controls) instead of reading `--input`.
    #[arg(long)]
    pub sample_page: bool,

    /// Preference store JSON file. A missing file is an empty store; the file is created on first write.
    #[arg(long, default_value = "state.json")]
    pub state: PathBuf,

    /// Output path for the mutated document.
    ///
    /// Defaults to `<input stem>.out.html`, or `sample.html` with `--sample-page`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Elements to click, in order. Each entry is a CSS selector; the first match receives the click.
    #[arg(long = "click")]
    pub clicks: Vec<String>,

    /// How confirmation prompts are answered.
    #[arg(long, value_enum, default_value = "auto")]
    pub answer: AnswerMode,

    /// Prompt shown for guarded elements that carry no `data-confirm-message` of their own.
    #[arg(long, default_value = "Confirmar ação?")]
    pub confirm_default: String,

    /// Base URL used to resolve relative navigation and form-action targets (e.g. `https://app.example.com`).
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Write a JSON session report (confirmations, outcomes, final theme) to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}
