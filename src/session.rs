use kuchiki::{ElementData, NodeDataRef};
use serde::Serialize;
use url::Url;

use crate::confirm::ConfirmPrompt;
use crate::guard::{self, ConfirmGuard, Decision};
use crate::page::{self, Page};
use crate::store::PrefStore;
use crate::theme::{self, Theme, ThemeToggle};

#[derive(Debug, Serialize)]
pub struct Confirmation {
    /// Exactly what the user was shown.
    pub message: String,
    pub accepted: bool,
}

#[derive(Debug, Serialize)]
pub struct ClickOutcome {
    pub selector: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    pub suppressed: bool,
    /// Storage value after a theme flip, when this click hit the toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<String>,
}

impl ClickOutcome {
    fn unmatched(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            matched: false,
            confirmation: None,
            suppressed: false,
            theme: None,
            navigation: None,
            submission: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub clicks: Vec<ClickOutcome>,
    /// Mode visible on the page when the session ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_mode: Option<&'static str>,
    /// Preference value in the store when the session ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_theme: Option<String>,
}

/// What the browser would do with an unintercepted click.
enum DefaultAction {
    Navigate(String),
    Submit(String),
}

/// A page with both behaviors wired in, ready to receive clicks.
pub struct Session<'a> {
    page: &'a Page,
    guard: ConfirmGuard,
    toggle: ThemeToggle,
    base_url: Option<Url>,
    clicks: Vec<ClickOutcome>,
}

impl<'a> Session<'a> {
    pub fn new(
        page: &'a Page,
        guard: ConfirmGuard,
        toggle: ThemeToggle,
        base_url: Option<Url>,
    ) -> Self {
        Self {
            page,
            guard,
            toggle,
            base_url,
            clicks: Vec::new(),
        }
    }

    /// Clicks the first match of `selector`. Guard interception runs
    /// before anything else; a declined confirmation suppresses both the
    /// toggle handler and the default action, exactly as
    /// `preventDefault` would. A selector with no match is recorded and
    /// skipped.
    pub fn dispatch_click(
        &mut self,
        selector: &str,
        store: &mut dyn PrefStore,
        prompt: &mut dyn ConfirmPrompt,
    ) -> anyhow::Result<()> {
        let Some(el) = self.page.select_first(selector) else {
            tracing::warn!(selector, "click target not found; skipping");
            self.clicks.push(ClickOutcome::unmatched(selector));
            return Ok(());
        };

        let mut outcome = ClickOutcome {
            selector: selector.to_string(),
            matched: true,
            confirmation: None,
            suppressed: false,
            theme: None,
            navigation: None,
            submission: None,
        };

        if guard::is_guarded(&el) {
            let (message, decision) = self.guard.intercept(&el, prompt)?;
            let accepted = decision == Decision::Proceed;
            outcome.confirmation = Some(Confirmation { message, accepted });
            if decision == Decision::Suppress {
                outcome.suppressed = true;
                self.clicks.push(outcome);
                return Ok(());
            }
        }

        if self.toggle.control_present()
            && page::element_id(&el).as_deref() == Some(theme::TOGGLE_ID)
        {
            let next = self.toggle.handle_click(self.page, store)?;
            outcome.theme = Some(next.storage_value());
        }

        match default_action(&el, self.base_url.as_ref()) {
            Some(DefaultAction::Navigate(href)) => outcome.navigation = Some(href),
            Some(DefaultAction::Submit(action)) => outcome.submission = Some(action),
            None => {}
        }

        self.clicks.push(outcome);
        Ok(())
    }

    pub fn into_report(self, store: &dyn PrefStore) -> SessionReport {
        let final_mode = if self.page.body_has_class(Theme::Dark.class_name()) {
            Some(Theme::Dark.storage_value())
        } else if self.page.body_has_class(Theme::Light.class_name()) {
            Some(Theme::Light.storage_value())
        } else {
            None
        };
        SessionReport {
            clicks: self.clicks,
            final_mode,
            stored_theme: store.get(theme::STORAGE_KEY),
        }
    }
}

fn default_action(
    el: &NodeDataRef<ElementData>,
    base_url: Option<&Url>,
) -> Option<DefaultAction> {
    match el.name.local.as_ref() {
        "a" => {
            let href = el
                .attributes
                .borrow()
                .get("href")
                .map(|h| h.trim().to_string())?;
            if href.is_empty() || href.starts_with('#') {
                return None;
            }
            Some(DefaultAction::Navigate(resolve_target(base_url, &href)))
        }
        name @ ("button" | "input") => {
            let ty = el
                .attributes
                .borrow()
                .get("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_else(|| {
                    // a bare <button> submits; a bare <input> does not
                    if name == "button" { "submit".to_string() } else { String::new() }
                });
            if ty != "submit" {
                return None;
            }
            let form = enclosing_form(el)?;
            let action = form
                .attributes
                .borrow()
                .get("action")
                .map(|a| a.trim().to_string())
                .unwrap_or_default();
            Some(DefaultAction::Submit(resolve_target(base_url, &action)))
        }
        _ => None,
    }
}

fn enclosing_form(el: &NodeDataRef<ElementData>) -> Option<NodeDataRef<ElementData>> {
    el.as_node()
        .ancestors()
        .filter_map(|node| node.into_element_ref())
        .find(|ancestor| ancestor.name.local.as_ref() == "form")
}

/// Absolute targets pass through; relative ones resolve against the base
/// URL when one was given and stay verbatim otherwise.
fn resolve_target(base_url: Option<&Url>, raw: &str) -> String {
    let r = raw.trim();
    if r.starts_with("http://") || r.starts_with("https://") {
        return r.to_string();
    }
    if let Some(base) = base_url {
        if r.starts_with("//") {
            if let Ok(url) = Url::parse(&format!("{}:{}", base.scheme(), r)) {
                return url.to_string();
            }
        }
        if let Ok(url) = base.join(r) {
            return url.to_string();
        }
    }
    r.to_string()
}
