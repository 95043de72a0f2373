//! Runtime behaviors for freshly rendered page content.

use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::config::SiteConfig;
use crate::content::edit_link_selector;
use crate::error::SiteError;

/// Blocking request/response with the user.
pub trait LinkPrompt {
    /// `None` means the user cancelled.
    fn ask(&self, message: &str, current: &str) -> Option<String>;
    fn notify(&self, message: &str);
}

pub trait EditableLink {
    fn destination(&self) -> Option<String>;
    fn set_destination(&mut self, value: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(String),
    Cancelled,
}

/// Asks for a new destination pre-filled with the current one and writes it
/// back verbatim unless cancelled.
pub fn edit_link<L, P>(link: &mut L, prompt: &P, config: &SiteConfig) -> EditOutcome
where
    L: EditableLink + ?Sized,
    P: LinkPrompt + ?Sized,
{
    let current = link.destination().unwrap_or_else(|| "#".to_string());
    let Some(next) = prompt.ask(&config.edit_prompt, &current) else {
        return EditOutcome::Cancelled;
    };
    link.set_destination(&next);
    prompt.notify(&config.edit_notice(&next));
    leptos::logging::log!("link retargeted from {current} to {next}");
    EditOutcome::Updated(next)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompt;

impl LinkPrompt for BrowserPrompt {
    fn ask(&self, message: &str, current: &str) -> Option<String> {
        match leptos::prelude::window().prompt_with_message_and_default(message, current) {
            Ok(answer) => answer,
            Err(err) => {
                leptos::logging::warn!("prompt failed: {}", SiteError::from(err));
                None
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(err) = leptos::prelude::window().alert_with_message(message) {
            leptos::logging::warn!("alert failed: {}", SiteError::from(err));
        }
    }
}

#[derive(Clone, Debug)]
pub struct DomLink(pub Element);

impl EditableLink for DomLink {
    fn destination(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn set_destination(&mut self, value: &str) {
        if let Err(err) = self.0.set_attribute("href", value) {
            leptos::logging::error!("could not set href: {}", SiteError::from(err));
        }
    }
}

/// Handles clicks on editable links anywhere below `root` with one delegated
/// listener. Attach once per root: the content below it may be replaced
/// freely afterwards.
pub fn listen_for_link_edits<P>(
    root: &Element,
    prompt: Arc<P>,
    config: Arc<SiteConfig>,
) -> Result<(), SiteError>
where
    P: LinkPrompt + 'static,
{
    let selector = edit_link_selector();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(link) = editable_link_for(&ev, &selector) else {
            return;
        };
        ev.prevent_default();
        edit_link(&mut DomLink(link), prompt.as_ref(), &config);
    });
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Lives as long as the root.
    on_click.forget();
    Ok(())
}

fn editable_link_for(ev: &Event, selector: &str) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    match target.closest(selector) {
        Ok(link) => link,
        Err(err) => {
            leptos::logging::error!("{}", SiteError::from(err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replays queued answers and records every prompt and notice.
    #[derive(Debug, Default)]
    struct ScriptedPrompt {
        answers: RefCell<Vec<Option<String>>>,
        asked: RefCell<Vec<(String, String)>>,
        notices: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: Option<&str>) -> Self {
            Self {
                answers: RefCell::new(vec![answer.map(str::to_string)]),
                ..Self::default()
            }
        }
    }

    impl LinkPrompt for ScriptedPrompt {
        fn ask(&self, message: &str, current: &str) -> Option<String> {
            self.asked
                .borrow_mut()
                .push((message.to_string(), current.to_string()));
            let mut answers = self.answers.borrow_mut();
            if answers.is_empty() {
                None
            } else {
                answers.remove(0)
            }
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Debug, Default)]
    struct FakeLink(Option<String>);

    impl EditableLink for FakeLink {
        fn destination(&self) -> Option<String> {
            self.0.clone()
        }

        fn set_destination(&mut self, value: &str) {
            self.0 = Some(value.to_string());
        }
    }

    #[test]
    fn accepted_input_replaces_destination_verbatim() {
        let config = SiteConfig::default();
        let prompt = ScriptedPrompt::answering(Some("not a url ::"));
        let mut link = FakeLink(Some("#".to_string()));

        let outcome = edit_link(&mut link, &prompt, &config);

        assert_eq!(outcome, EditOutcome::Updated("not a url ::".to_string()));
        assert_eq!(link.0.as_deref(), Some("not a url ::"));
        assert_eq!(prompt.asked.borrow()[0], (config.edit_prompt.clone(), "#".to_string()));
        assert_eq!(*prompt.notices.borrow(), ["Link gesetzt: not a url ::"]);
    }

    #[test]
    fn cancel_leaves_link_untouched() {
        let prompt = ScriptedPrompt::answering(None);
        let mut link = FakeLink(Some("https://example.com".to_string()));

        let outcome = edit_link(&mut link, &prompt, &SiteConfig::default());

        assert_eq!(outcome, EditOutcome::Cancelled);
        assert_eq!(link.0.as_deref(), Some("https://example.com"));
        assert!(prompt.notices.borrow().is_empty());
    }

    #[test]
    fn empty_answer_is_accepted() {
        let prompt = ScriptedPrompt::answering(Some(""));
        let mut link = FakeLink(Some("#/prop-02".to_string()));
        edit_link(&mut link, &prompt, &SiteConfig::default());
        assert_eq!(link.0.as_deref(), Some(""));
    }

    #[test]
    fn missing_destination_prefills_hash() {
        let prompt = ScriptedPrompt::answering(None);
        let mut link = FakeLink(None);
        edit_link(&mut link, &prompt, &SiteConfig::default());
        assert_eq!(prompt.asked.borrow()[0].1, "#");
    }
}
