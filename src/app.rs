use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

use crate::behaviors::{listen_for_link_edits, BrowserPrompt};
use crate::config::SiteConfig;
use crate::content::count_editable_links;
use crate::error::SiteError;
use crate::registry::Registry;
use crate::router::Router;
use crate::shell::Screen;
use crate::sidebar::NavSection;
use crate::theme::{Theme, ThemeController, ThemeSurface, THEME_ATTR};

/// Theme surface backed by `<html data-theme>` and the design selector.
#[derive(Clone, Copy)]
struct DocumentTheme {
    select: NodeRef<leptos::html::Select>,
}

impl ThemeSurface for DocumentTheme {
    fn root_theme(&self) -> Option<String> {
        document()
            .document_element()
            .and_then(|root| root.get_attribute(THEME_ATTR))
    }

    fn set_root_theme(&self, name: &str) {
        let Some(root) = document().document_element() else {
            leptos::logging::warn!("{}", SiteError::MissingElement("html"));
            return;
        };
        if let Err(err) = root.set_attribute(THEME_ATTR, name) {
            leptos::logging::error!("could not set theme: {}", SiteError::from(err));
        }
    }

    fn set_selector(&self, name: &str) {
        if let Some(select) = self.select.get_untracked() {
            select.set_value(name);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let registry = Registry::build();
    let config = Arc::new(SiteConfig::load(&registry));
    leptos::logging::log!(
        "showroom: {} pages, default page {}",
        registry.len(),
        config.default_page
    );

    let select_ref = NodeRef::<leptos::html::Select>::new();
    let themes = ThemeController::new(DocumentTheme { select: select_ref });
    themes.set_theme(config.initial_theme.as_str());
    // The selector mounts after the first route; bring it in line with the root.
    Effect::new(move |_| {
        if select_ref.get().is_some() {
            let current = themes
                .current()
                .unwrap_or_else(|| Theme::default().as_str().to_string());
            themes.surface().set_selector(&current);
        }
    });

    let screen = RwSignal::new(Screen::new(&registry, &config));
    let router = Arc::new(Router::new(registry, config.default_page.clone()));

    let navigate = {
        let config = config.clone();
        move || {
            let hash = window().location().hash().unwrap_or_default();
            screen.update(|screen| {
                let page = router.route(&hash, &mut screen.frame(&config));
                leptos::logging::log!("showing {} for {:?}", page.id, hash);
            });
        }
    };
    navigate();

    let on_hash_change = Closure::<dyn FnMut(leptos::web_sys::Event)>::new(
        move |_: leptos::web_sys::Event| navigate(),
    );
    if let Err(err) = window()
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
    {
        leptos::logging::error!("could not listen for hashchange: {}", SiteError::from(err));
    }
    on_hash_change.forget();

    let main_ref = NodeRef::<leptos::html::Div>::new();
    {
        let config = config.clone();
        // One delegated listener for the lifetime of the main region.
        Effect::new(move |listening: Option<bool>| {
            if listening == Some(true) {
                return true;
            }
            let Some(main) = main_ref.get() else {
                return false;
            };
            if let Err(err) =
                listen_for_link_edits(&main, Arc::new(BrowserPrompt), config.clone())
            {
                leptos::logging::error!("{err}");
            }
            true
        });
    }
    Effect::new(move |_| {
        let view = screen.with(|screen| screen.view.clone());
        let Some(main) = main_ref.get() else {
            return;
        };
        document().set_title(&view.document_title);
        main.set_inner_html(&view.card_html);
        match count_editable_links(&view.card_html) {
            0 => {}
            editable => leptos::logging::log!("{editable} editable link(s) on {}", view.id),
        }
    });

    let sections = screen.with_untracked(|screen| screen.sidebar.sections().to_vec());
    let sidebar_view = sections
        .into_iter()
        .map(|NavSection { label, entries, .. }| {
            view! {
                <div class="side-section">
                    <h3>{label}</h3>
                    <div class="nav-list">
                        {entries.into_iter().map(|entry| {
                            let id = entry.id.clone();
                            let is_active = move || screen.with(|screen| screen.sidebar.is_active(&id));
                            view! {
                                <a class="nav-item" class:active=is_active href=entry.href data-pid=entry.id>
                                    {entry.title}
                                </a>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-layout">
            <aside id="sidebar" class="sidebar">
                {sidebar_view}
            </aside>
            <section class="content">
                <header class="topbar">
                    <button id="themeToggle" on:click=move |_| { themes.toggle(); }>
                        "Design wechseln"
                    </button>
                    <select
                        id="designSelect"
                        node_ref=select_ref
                        on:change=move |ev| themes.select(&event_target_value(&ev))
                    >
                        {Theme::ALL.into_iter().map(|theme| view! {
                            <option value=theme.as_str()>{theme.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </header>
                <div id="main" class="main" node_ref=main_ref></div>
            </section>
        </div>
    }
}
