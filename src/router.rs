use regex::Regex;
use std::sync::OnceLock;

use crate::registry::{PageRecord, Registry};

/// Receives the outcome of a navigation.
pub trait RenderTarget {
    fn render_page(&mut self, page: &PageRecord);
    fn sync_active(&mut self, id: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Identifier taken from the fragment, or the configured default when it
    /// was empty. Unknown identifiers resolve to the first registry record.
    pub requested: String,
    pub page: &'a PageRecord,
    pub fallback: bool,
}

/// Strips the `#` / `#/` prefix from a location hash.
pub fn fragment_id(hash: &str) -> &str {
    static RE_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re_prefix = RE_PREFIX.get_or_init(|| Regex::new(r"^#/?").unwrap());
    match re_prefix.find(hash) {
        Some(prefix) => &hash[prefix.end()..],
        None => hash,
    }
}

#[derive(Clone, Debug)]
pub struct Router {
    registry: Registry,
    default_id: String,
}

impl Router {
    pub fn new(registry: Registry, default_id: impl Into<String>) -> Self {
        Self {
            registry,
            default_id: default_id.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resolve(&self, hash: &str) -> Resolution<'_> {
        let requested = match fragment_id(hash) {
            "" => self.default_id.as_str(),
            id => id,
        };
        let (page, fallback) = match self.registry.find(requested) {
            Some(page) => (page, false),
            None => (self.registry.default_page(), true),
        };
        Resolution {
            requested: requested.to_string(),
            page,
            fallback,
        }
    }

    /// Resolves `hash` once and feeds the same page to rendering and nav sync.
    pub fn route<T: RenderTarget>(&self, hash: &str, target: &mut T) -> &PageRecord {
        let resolution = self.resolve(hash);
        if resolution.fallback {
            leptos::logging::log!(
                "no page `{}`, showing {}",
                resolution.requested,
                resolution.page.id
            );
        }
        target.render_page(resolution.page);
        target.sync_active(&resolution.page.id);
        resolution.page
    }
}
