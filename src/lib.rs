mod cli;
mod confirm;
mod guard;
mod page;
mod sample;
mod session;
mod store;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;

use cli::Args;
use confirm::{AutoAnswer, ConfirmPrompt, StdinPrompt};
use guard::ConfirmGuard;
use page::Page;
use session::Session;
use store::JsonFileStore;
use theme::ThemeToggle;

pub use cli::{AnswerMode, Args as CliArgs};
pub use session::{ClickOutcome, Confirmation, SessionReport};

pub fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let page = if args.sample_page {
        if args.input.is_some() {
            tracing::warn!("--sample-page is set; ignoring --input");
        }
        Page::parse(&sample::build_sample_page())
    } else {
        let Some(input) = args.input.as_ref() else {
            anyhow::bail!("either --input or --sample-page is required");
        };
        Page::load(input)?
    };

    let out_path = args.out.clone().unwrap_or_else(|| default_out_path(&args));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }

    let mut store = JsonFileStore::open(&args.state)?;

    let toggle = ThemeToggle::initialize(&page, &store);
    let guard = ConfirmGuard::new(args.confirm_default.clone());
    tracing::info!(
        guarded = guard::guarded_elements(&page).len(),
        toggle = toggle.control_present(),
        "page behaviors initialized"
    );

    let mut prompt: Box<dyn ConfirmPrompt> = match args.answer {
        AnswerMode::Auto => {
            if std::io::stdin().is_terminal() {
                Box::new(StdinPrompt)
            } else {
                Box::new(AutoAnswer(false))
            }
        }
        AnswerMode::Ask => Box::new(StdinPrompt),
        AnswerMode::Yes => Box::new(AutoAnswer(true)),
        AnswerMode::No => Box::new(AutoAnswer(false)),
    };

    let mut session = Session::new(&page, guard, toggle, args.base_url.clone());
    for selector in &args.clicks {
        session.dispatch_click(selector, &mut store, prompt.as_mut())?;
    }

    let report = session.into_report(&store);
    tracing::info!(
        clicks = report.clicks.len(),
        final_mode = report.final_mode.unwrap_or("default"),
        "session complete"
    );

    page.write(&out_path)?;

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("serialize session report")?;
        std::fs::write(report_path, json)
            .with_context(|| format!("write {}", report_path.display()))?;
    }

    Ok(())
}

fn default_out_path(args: &Args) -> PathBuf {
    match args.input.as_ref() {
        Some(input) if !args.sample_page => input.with_extension("out.html"),
        _ => PathBuf::from("sample.html"),
    }
}
