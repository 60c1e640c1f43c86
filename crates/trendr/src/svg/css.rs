//! Shared style element, headless.
//!
//! Upstream `injectStyleTag` keeps one module-level `<style>` element:
//! found or created on first use (tagged `data-react-trend`), then appended
//! to forever after. The headless port models that as an explicit resource
//! holder with a find-or-create guard, plus one process-wide instance.

use std::fmt::Write as _;
use std::sync::{Mutex, OnceLock};

/// The lazily created shared style element. Serialized with the library
/// tag so repeat consumers can recognize and reuse it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleElement {
    css: String,
}

impl StyleElement {
    /// Appends a CSS fragment to the element's text content.
    pub fn append(&mut self, css: &str) {
        self.css.push_str(css);
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Find-or-create-once holder for the shared [`StyleElement`].
#[derive(Debug, Default)]
pub struct StyleRegistry {
    element: Option<StyleElement>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The find-or-create guard: the first call creates the element, every
    /// later call returns the same one.
    pub fn acquire(&mut self) -> &mut StyleElement {
        self.element.get_or_insert_with(StyleElement::default)
    }

    /// The element, if any CSS has been appended yet.
    pub fn element(&self) -> Option<&StyleElement> {
        self.element.as_ref()
    }

    pub fn append_css(&mut self, css: &str) {
        self.acquire().append(css);
    }

    /// Serializes the element as a `<style>` node. Writes nothing if the
    /// element was never created.
    pub fn render_into(&self, out: &mut String) {
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let _ = write!(
            out,
            r#"<style type="text/css" data-trendr="">{}</style>"#,
            element.css
        );
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Process-wide registry shared by all call sites.
///
/// Upstream relies on the single-threaded DOM for its module-level element;
/// the port takes a mutex so the guard cannot race-recreate the element.
pub fn shared_style_registry() -> &'static Mutex<StyleRegistry> {
    static REGISTRY: OnceLock<Mutex<StyleRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(StyleRegistry::new()))
}
