use std::io::Write as _;

use anyhow::Context as _;

/// The synchronous yes/no capability guarded clicks are gated on. The
/// page's native dialog blocks the UI thread until the user answers;
/// implementations here do the same to the calling thread.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool>;
}

/// Answers every prompt the same way without asking.
pub struct AutoAnswer(pub bool);

impl ConfirmPrompt for AutoAnswer {
    fn confirm(&mut self, _message: &str) -> anyhow::Result<bool> {
        Ok(self.0)
    }
}

/// Interactive y/n prompt on stdin. Re-asks on anything else; a closed
/// stdin counts as a decline.
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        loop {
            eprint!("{message} [y/n] ");
            std::io::stderr().flush().ok();

            let mut input = String::new();
            let read = std::io::stdin()
                .read_line(&mut input)
                .context("read confirmation answer")?;
            if read == 0 {
                return Ok(false);
            }
            match input.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => eprintln!("please answer 'y' or 'n'"),
            }
        }
    }
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> anyhow::Result<bool>,
{
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        self(message)
    }
}
