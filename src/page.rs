use std::path::Path;

use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

/// A parsed HTML document plus the handful of lookups and mutations the
/// behaviors need. All mutation goes through the class/attribute helpers
/// below so serialization always reflects the latest state.
pub struct Page {
    document: NodeRef,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Ok(Self::parse(&html))
    }

    pub fn select_first(&self, selector: &str) -> Option<NodeDataRef<ElementData>> {
        self.document.select_first(selector).ok()
    }

    pub fn select_all(&self, selector: &str) -> Vec<NodeDataRef<ElementData>> {
        match self.document.select(selector) {
            Ok(nodes) => nodes.collect(),
            Err(()) => Vec::new(),
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeDataRef<ElementData>> {
        match self.document.select("[id]") {
            Ok(mut nodes) => nodes.find(|el| el.attributes.borrow().get("id") == Some(id)),
            Err(()) => None,
        }
    }

    pub fn body_has_class(&self, name: &str) -> bool {
        self.select_first("body")
            .map(|body| has_class(&body, name))
            .unwrap_or(false)
    }

    /// Drops `remove` from the body class list and appends `add`, in one
    /// attribute rewrite. Documents without a `<body>` are left alone.
    pub fn swap_body_class(&self, remove: &str, add: &str) {
        if let Some(body) = self.select_first("body") {
            swap_class(&body, remove, add);
        }
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document
            .serialize(&mut out)
            .context("serialize document")?;
        String::from_utf8(out).context("document not utf-8")
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let html = self.to_html()?;
        std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

pub fn element_id(el: &NodeDataRef<ElementData>) -> Option<String> {
    el.attributes.borrow().get("id").map(str::to_string)
}

pub fn has_class(el: &NodeDataRef<ElementData>, name: &str) -> bool {
    el.attributes
        .borrow()
        .get("class")
        .map(|classes| classes.split_whitespace().any(|c| c == name))
        .unwrap_or(false)
}

pub fn swap_class(el: &NodeDataRef<ElementData>, remove: &str, add: &str) {
    let existing = el
        .attributes
        .borrow()
        .get("class")
        .map(|c| c.to_string())
        .unwrap_or_default();
    let mut classes: Vec<&str> = existing
        .split_whitespace()
        .filter(|c| *c != remove && *c != add)
        .collect();
    classes.push(add);
    el.attributes.borrow_mut().insert("class", classes.join(" "));
}
