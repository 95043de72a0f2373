//! The navigation loop without a browser: state objects for the sidebar,
//! the main region and the theme, driven by location hashes.

use crate::config::SiteConfig;
use crate::page::PageView;
use crate::registry::{PageRecord, Registry};
use crate::router::{RenderTarget, Router};
use crate::sidebar::Sidebar;
use crate::theme::{ThemeController, ThemeSurface};

/// Everything the shell displays besides the theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub sidebar: Sidebar,
    pub view: PageView,
}

impl Screen {
    pub fn new(registry: &Registry, config: &SiteConfig) -> Self {
        Self {
            sidebar: Sidebar::build(registry, config),
            view: PageView::default(),
        }
    }

    pub fn frame<'a>(&'a mut self, config: &'a SiteConfig) -> Frame<'a> {
        Frame {
            config,
            screen: self,
        }
    }
}

/// A [`Screen`] paired with the config needed to render into it.
#[derive(Debug)]
pub struct Frame<'a> {
    config: &'a SiteConfig,
    screen: &'a mut Screen,
}

impl RenderTarget for Frame<'_> {
    fn render_page(&mut self, page: &PageRecord) {
        self.screen.view = PageView::render(page, self.config);
    }

    fn sync_active(&mut self, id: &str) {
        self.screen.sidebar.set_active(id);
    }
}

#[derive(Debug)]
pub struct Shell<S> {
    config: SiteConfig,
    router: Router,
    screen: Screen,
    theme: ThemeController<S>,
}

impl<S: ThemeSurface> Shell<S> {
    /// Startup order: registry, sidebar, default theme, initial route.
    pub fn start(config: SiteConfig, surface: S, hash: &str) -> Self {
        let registry = Registry::build();
        let config = config.checked(&registry);
        let screen = Screen::new(&registry, &config);
        let theme = ThemeController::new(surface);
        theme.set_theme(config.initial_theme.as_str());

        let router = Router::new(registry, config.default_page.clone());
        let mut shell = Self {
            config,
            router,
            screen,
            theme,
        };
        shell.navigate(hash);
        shell
    }

    /// Handles one fragment change.
    pub fn navigate(&mut self, hash: &str) -> &PageView {
        let mut frame = self.screen.frame(&self.config);
        self.router.route(hash, &mut frame);
        &self.screen.view
    }

    pub fn view(&self) -> &PageView {
        &self.screen.view
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.screen.sidebar
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
