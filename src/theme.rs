use crate::page::Page;
use crate::store::PrefStore;

/// Fixed storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Well-known id of the toggle control. Pages without it still get the
/// persisted preference applied; they just have no way to change it.
pub const TOGGLE_ID: &str = "theme-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only the two canonical values are recognized; everything else
    /// (including a value that was never saved) reads as no preference.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value {
            Some("dark") => Some(Theme::Dark),
            Some("light") => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The mode currently visible on the page: dark iff the body carries the
/// dark class. A body with no mode class is light by stylesheet default.
pub fn current_mode(page: &Page) -> Theme {
    if page.body_has_class(Theme::Dark.class_name()) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub struct ThemeToggle {
    control_present: bool,
}

impl ThemeToggle {
    /// Applies a persisted `"dark"` preference to the body class list.
    /// A stored `"light"` (or nothing, or garbage) applies no class; the
    /// stylesheet default is already light.
    pub fn initialize(page: &Page, store: &dyn PrefStore) -> Self {
        let stored = store.get(STORAGE_KEY);
        match Theme::from_stored(stored.as_deref()) {
            Some(Theme::Dark) => {
                page.swap_body_class(Theme::Light.class_name(), Theme::Dark.class_name());
            }
            Some(Theme::Light) => {}
            None => {
                if let Some(value) = stored {
                    tracing::warn!(%value, "ignoring unrecognized stored theme preference");
                }
            }
        }

        let control_present = page.element_by_id(TOGGLE_ID).is_some();
        if !control_present {
            tracing::debug!("no #{TOGGLE_ID} control; theme preference is read-only on this page");
        }
        Self { control_present }
    }

    pub fn control_present(&self) -> bool {
        self.control_present
    }

    /// One click on the toggle control: flip the mode class and persist
    /// the new value before returning, so the class list and the store
    /// can never disagree across runs.
    pub fn handle_click(
        &self,
        page: &Page,
        store: &mut dyn PrefStore,
    ) -> anyhow::Result<Theme> {
        let next = current_mode(page).toggled();
        page.swap_body_class(next.toggled().class_name(), next.class_name());
        store.set(STORAGE_KEY, next.storage_value())?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PrefStore as _};

    const PAGE_WITH_TOGGLE: &str =
        r#"<body><button id="theme-toggle" type="button">Tema</button></body>"#;

    #[test]
    fn stored_value_recognition() {
        assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Some("light")), Some(Theme::Light));
        assert_eq!(Theme::from_stored(Some("blue")), None);
        assert_eq!(Theme::from_stored(Some("")), None);
        assert_eq!(Theme::from_stored(None), None);
    }

    #[test]
    fn initialize_applies_stored_dark() {
        let page = Page::parse(r#"<body class="light-mode"></body>"#);
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "dark").unwrap();

        let toggle = ThemeToggle::initialize(&page, &store);
        assert!(!toggle.control_present());
        assert!(page.body_has_class("dark-mode"));
        assert!(!page.body_has_class("light-mode"));
    }

    #[test]
    fn initialize_applies_no_class_without_preference() {
        let page = Page::parse(PAGE_WITH_TOGGLE);
        let store = MemoryStore::new();

        let toggle = ThemeToggle::initialize(&page, &store);
        assert!(toggle.control_present());
        assert!(!page.body_has_class("dark-mode"));
        assert!(!page.body_has_class("light-mode"));
    }

    #[test]
    fn initialize_treats_garbage_as_no_preference() {
        let page = Page::parse(PAGE_WITH_TOGGLE);
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "blue").unwrap();

        ThemeToggle::initialize(&page, &store);
        assert!(!page.body_has_class("dark-mode"));
        assert!(!page.body_has_class("light-mode"));
    }

    #[test]
    fn toggle_round_trip() {
        let page = Page::parse(PAGE_WITH_TOGGLE);
        let mut store = MemoryStore::new();
        let toggle = ThemeToggle::initialize(&page, &store);

        let after_first = toggle.handle_click(&page, &mut store).unwrap();
        assert_eq!(after_first, Theme::Dark);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert!(page.body_has_class("dark-mode"));
        assert!(!page.body_has_class("light-mode"));

        let after_second = toggle.handle_click(&page, &mut store).unwrap();
        assert_eq!(after_second, Theme::Light);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
        assert!(page.body_has_class("light-mode"));
        assert!(!page.body_has_class("dark-mode"));
    }

    #[test]
    fn reload_with_stored_dark_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "dark").unwrap();

        let first = Page::parse(PAGE_WITH_TOGGLE);
        ThemeToggle::initialize(&first, &store);
        let html = first.to_html().unwrap();

        // Reload the serialized output, as a second visit would.
        let second = Page::parse(&html);
        ThemeToggle::initialize(&second, &store);
        assert!(second.body_has_class("dark-mode"));
        assert!(!second.body_has_class("light-mode"));
    }
}
