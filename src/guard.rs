use kuchiki::{ElementData, NodeDataRef};

use crate::confirm::ConfirmPrompt;
use crate::page::Page;

/// Marker attribute that opts an element into confirmation. Presence is
/// what matters; the value is ignored.
pub const MARKER_ATTR: &str = "data-confirm";

/// Optional per-element prompt text, used verbatim when non-empty.
pub const MESSAGE_ATTR: &str = "data-confirm-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Suppress,
}

pub fn is_guarded(el: &NodeDataRef<ElementData>) -> bool {
    el.attributes.borrow().get(MARKER_ATTR).is_some()
}

pub fn guarded_elements(page: &Page) -> Vec<NodeDataRef<ElementData>> {
    page.select_all(&format!("[{MARKER_ATTR}]"))
}

pub struct ConfirmGuard {
    default_message: String,
}

impl ConfirmGuard {
    pub fn new(default_message: impl Into<String>) -> Self {
        Self {
            default_message: default_message.into(),
        }
    }

    pub fn message_for(&self, el: &NodeDataRef<ElementData>) -> String {
        el.attributes
            .borrow()
            .get(MESSAGE_ATTR)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.default_message.clone())
    }

    /// One intercepted click: ask, and report the exact message shown
    /// together with what should happen to the default action.
    pub fn intercept(
        &self,
        el: &NodeDataRef<ElementData>,
        prompt: &mut dyn ConfirmPrompt,
    ) -> anyhow::Result<(String, Decision)> {
        let message = self.message_for(el);
        let decision = if prompt.confirm(&message)? {
            Decision::Proceed
        } else {
            Decision::Suppress
        };
        Ok((message, decision))
    }
}
