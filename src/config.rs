use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::registry::{Group, Registry};
use crate::theme::Theme;

/// Element id of an optional `<script type="application/json">` holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "site-config";
/// Global JS object checked before the config script.
pub const CONFIG_GLOBAL: &str = "siteConfig";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// `{title}` is replaced with the page title.
    pub title_template: String,
    pub default_page: String,
    pub initial_theme: Theme,
    pub realestate_label: String,
    pub rally_label: String,
    pub edit_prompt: String,
    /// `{url}` is replaced with the new destination.
    pub edit_notice: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title_template: "Template — {title}".to_string(),
            default_page: "prop-01".to_string(),
            initial_theme: Theme::RealEstate,
            realestate_label: "Immobilien (20)".to_string(),
            rally_label: "Rally (10)".to_string(),
            edit_prompt: "Setze Ziel-URL (z. B. https://example.com) oder Hash (#/prop-02):"
                .to_string(),
            edit_notice: "Link gesetzt: {url}".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self, registry: &Registry) -> Result<(), SiteError> {
        if !registry.contains(&self.default_page) {
            return Err(SiteError::UnknownDefaultPage(self.default_page.clone()));
        }
        Ok(())
    }

    pub fn document_title(&self, page_title: &str) -> String {
        self.title_template.replace("{title}", page_title)
    }

    pub fn edit_notice(&self, url: &str) -> String {
        self.edit_notice.replace("{url}", url)
    }

    pub fn section_label(&self, group: Group) -> &str {
        match group {
            Group::RealEstate => &self.realestate_label,
            Group::Rally => &self.rally_label,
        }
    }

    /// Keeps `self` if it validates against `registry`, otherwise the defaults.
    pub fn checked(self, registry: &Registry) -> Self {
        match self.validate(registry) {
            Ok(()) => self,
            Err(err) => {
                leptos::logging::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }

    /// Reads overrides from the host page, falling back to defaults.
    pub fn load(registry: &Registry) -> Self {
        match Self::from_host() {
            Ok(Some(config)) => config.checked(registry),
            Ok(None) => Self::default(),
            Err(err) => {
                leptos::logging::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }

    fn from_host() -> Result<Option<Self>, SiteError> {
        let window = leptos::prelude::window();
        let global = js_sys::Reflect::get(window.as_ref(), &CONFIG_GLOBAL.into())?;
        if !global.is_undefined() && !global.is_null() {
            return Ok(Some(serde_wasm_bindgen::from_value(global)?));
        }

        let script = leptos::prelude::document()
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content());
        match script {
            Some(text) if !text.trim().is_empty() => Ok(Some(Self::from_json(&text)?)),
            _ => Ok(None),
        }
    }
}
