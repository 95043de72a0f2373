use serde::{Deserialize, Serialize};

pub const THEME_ATTR: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    RealEstate,
    Rally,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::RealEstate, Theme::Rally];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::RealEstate => "realestate",
            Theme::Rally => "rally",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::RealEstate => "Immobilien",
            Theme::Rally => "Rally",
        }
    }

    /// Theme that follows the given root attribute value. Only an exact
    /// `realestate` (or a missing attribute) flips to `rally`.
    pub fn after_toggle(current: Option<&str>) -> Self {
        match current.unwrap_or(Theme::RealEstate.as_str()) {
            "realestate" => Theme::Rally,
            _ => Theme::RealEstate,
        }
    }
}

/// Where the theme is displayed: the root attribute and the selector control.
pub trait ThemeSurface {
    fn root_theme(&self) -> Option<String>;
    fn set_root_theme(&self, name: &str);
    fn set_selector(&self, name: &str);
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeController<S> {
    surface: S,
}

impl<S: ThemeSurface> ThemeController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Values other than the two known themes are written through unchanged.
    pub fn set_theme(&self, name: &str) {
        self.surface.set_root_theme(name);
        self.surface.set_selector(name);
        leptos::logging::log!("theme set to {name}");
    }

    pub fn toggle(&self) -> Theme {
        let next = Theme::after_toggle(self.surface.root_theme().as_deref());
        self.set_theme(next.as_str());
        next
    }

    pub fn select(&self, value: &str) {
        self.set_theme(value);
    }

    pub fn current(&self) -> Option<String> {
        self.surface.root_theme()
    }
}
