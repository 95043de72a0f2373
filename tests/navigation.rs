use std::cell::RefCell;

use showroom::behaviors::{edit_link, EditOutcome, EditableLink, LinkPrompt};
use showroom::content::EDIT_LINK_ATTR;
use showroom::theme::{Theme, ThemeSurface};
use showroom::{Shell, SiteConfig};

#[derive(Default)]
struct Surface {
    root: RefCell<Option<String>>,
    selector: RefCell<Option<String>>,
}

impl ThemeSurface for Surface {
    fn root_theme(&self) -> Option<String> {
        self.root.borrow().clone()
    }

    fn set_root_theme(&self, name: &str) {
        *self.root.borrow_mut() = Some(name.to_string());
    }

    fn set_selector(&self, name: &str) {
        *self.selector.borrow_mut() = Some(name.to_string());
    }
}

struct Answer(Option<&'static str>);

impl LinkPrompt for Answer {
    fn ask(&self, _message: &str, _current: &str) -> Option<String> {
        self.0.map(str::to_string)
    }

    fn notify(&self, _message: &str) {}
}

struct Href(Option<String>);

impl EditableLink for Href {
    fn destination(&self) -> Option<String> {
        self.0.clone()
    }

    fn set_destination(&mut self, value: &str) {
        self.0 = Some(value.to_string());
    }
}

fn active(shell: &Shell<Surface>) -> Vec<&str> {
    shell
        .sidebar()
        .active_entries()
        .map(|entry| entry.id.as_str())
        .collect()
}

#[test]
fn load_rally_stage_three() {
    let shell = Shell::start(SiteConfig::default(), Surface::default(), "#/rally-03");

    assert!(shell
        .view()
        .card_html
        .starts_with("<div class=\"card\"><h2>Rally Stage 3</h2>"));
    assert_eq!(active(&shell), ["rally-03"]);
}

#[test]
fn load_unknown_fragment_falls_back_to_dashboard() {
    let shell = Shell::start(SiteConfig::default(), Surface::default(), "#/unknown");

    assert_eq!(shell.view().title, "Dashboard");
    assert_eq!(shell.view().document_title, "Template — Dashboard");
    assert_eq!(active(&shell), ["prop-01"]);
}

#[test]
fn hash_changes_are_handled_in_order() {
    let mut shell = Shell::start(SiteConfig::default(), Surface::default(), "");
    let titles: Vec<String> = ["#/prop-03", "#/rally-10", "#/", "#/prop-17"]
        .into_iter()
        .map(|hash| shell.navigate(hash).title.clone())
        .collect();

    assert_eq!(titles, ["Property 2 Detail", "Rally Stage 10", "Dashboard", "Module 17"]);
    assert_eq!(active(&shell), ["prop-17"]);
}

#[test]
fn theme_toggle_round_trip() {
    let shell = Shell::start(SiteConfig::default(), Surface::default(), "");
    let theme = shell.theme();

    assert_eq!(theme.current().as_deref(), Some("realestate"));
    assert_eq!(theme.toggle(), Theme::Rally);
    assert_eq!(theme.surface().selector.borrow().as_deref(), Some("rally"));
    assert_eq!(theme.toggle(), Theme::RealEstate);
    assert_eq!(theme.current().as_deref(), Some("realestate"));
}

#[test]
fn stage_page_link_can_be_retargeted() {
    let mut shell = Shell::start(SiteConfig::default(), Surface::default(), "");
    let view = shell.navigate("#/rally-04").clone();
    assert!(view.card_html.contains(&format!("href=\"#\" {EDIT_LINK_ATTR}")));

    let mut link = Href(Some("#".to_string()));
    let outcome = edit_link(&mut link, &Answer(Some("#/prop-02")), shell.config());
    assert_eq!(outcome, EditOutcome::Updated("#/prop-02".to_string()));
    assert_eq!(link.0.as_deref(), Some("#/prop-02"));

    let outcome = edit_link(&mut link, &Answer(None), shell.config());
    assert_eq!(outcome, EditOutcome::Cancelled);
    assert_eq!(link.0.as_deref(), Some("#/prop-02"));
}
