//! Grouped navigation model for the side panel.

use crate::config::SiteConfig;
use crate::registry::{Group, Registry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub group: Group,
    pub label: String,
    pub entries: Vec<NavEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: Vec<NavSection>,
    active: Option<String>,
}

impl Sidebar {
    /// Builds one section per group, entries in registry order, and marks
    /// the configured default page active.
    pub fn build(registry: &Registry, config: &SiteConfig) -> Self {
        let sections = Group::ALL
            .into_iter()
            .map(|group| NavSection {
                group,
                label: config.section_label(group).to_string(),
                entries: registry
                    .in_group(group)
                    .map(|page| NavEntry {
                        id: page.id.clone(),
                        title: page.title.clone(),
                        href: page.href(),
                    })
                    .collect(),
            })
            .collect();

        let mut sidebar = Self {
            sections,
            active: None,
        };
        sidebar.set_active(&config.default_page);
        sidebar
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> + '_ {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }

    /// Ids without an entry leave the current marker in place.
    pub fn set_active(&mut self, id: &str) {
        if self.entries().any(|entry| entry.id == id) {
            self.active = Some(id.to_string());
        } else {
            leptos::logging::warn!("no nav entry `{id}`");
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &NavEntry> + '_ {
        self.entries().filter(|entry| self.is_active(&entry.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::build(&Registry::build(), &SiteConfig::default())
    }

    #[test]
    fn groups_entries_under_labeled_sections() {
        let sidebar = sidebar();
        let sections = sidebar.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Immobilien (20)");
        assert_eq!(sections[0].entries.len(), 20);
        assert_eq!(sections[1].label, "Rally (10)");
        assert_eq!(sections[1].entries.len(), 10);
        assert_eq!(sections[1].entries[2].href, "#/rally-03");
        assert_eq!(sections[1].entries[2].title, "Rally Stage 3");
    }

    #[test]
    fn build_marks_default_active() {
        let sidebar = sidebar();
        let active: Vec<&str> = sidebar.active_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(active, ["prop-01"]);
    }

    #[test]
    fn exactly_one_entry_active_after_sync() {
        let mut sidebar = sidebar();
        let ids: Vec<String> = sidebar.entries().map(|e| e.id.clone()).collect();
        for id in ids {
            sidebar.set_active(&id);
            let active: Vec<&str> = sidebar.active_entries().map(|e| e.id.as_str()).collect();
            assert_eq!(active, [id.as_str()]);
        }
    }

    #[test]
    fn unregistered_id_keeps_current_entry() {
        let mut sidebar = sidebar();
        sidebar.set_active("rally-02");
        sidebar.set_active("bogus");
        let active: Vec<&str> = sidebar.active_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(active, ["rally-02"]);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        assert_eq!(sidebar(), sidebar());
    }
}
