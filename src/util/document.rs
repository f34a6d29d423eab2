//! Attributes on the document root (`<html>`).
//!
//! The stylesheet keys off `data-theme` and assistive tech off `lang`, both of
//! which live outside the Leptos mount point, so they are written directly.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::BTreeMap;

/// Read/write access to root element attributes.
pub trait DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Root that is not attached to any document. Used off-browser.
#[derive(Clone, Debug, Default)]
pub struct DetachedRoot {
    attributes: BTreeMap<String, String>,
}

impl DetachedRoot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRoot for DetachedRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }
}

/// The live `document.documentElement`.
#[cfg(feature = "csr")]
pub struct BrowserRoot {
    element: Option<web_sys::Element>,
}

#[cfg(feature = "csr")]
impl BrowserRoot {
    pub fn attach() -> Self {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if element.is_none() {
            log::warn!("no document element; root attributes will not be applied");
        }
        Self { element }
    }
}

#[cfg(feature = "csr")]
impl DocumentRoot for BrowserRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.as_ref()?.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(el) = &self.element {
            let _ = el.set_attribute(name, value);
        }
    }
}

/// Document root for the current environment.
pub fn default_root() -> Box<dyn DocumentRoot> {
    #[cfg(feature = "csr")]
    {
        Box::new(BrowserRoot::attach())
    }
    #[cfg(not(feature = "csr"))]
    {
        Box::new(DetachedRoot::new())
    }
}
