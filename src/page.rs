use crate::config::SiteConfig;
use crate::content::escape;
use crate::registry::PageRecord;

/// What the main region shows for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub id: String,
    pub title: String,
    pub document_title: String,
    pub card_html: String,
}

impl PageView {
    pub fn render(page: &PageRecord, config: &SiteConfig) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title.clone(),
            document_title: config.document_title(&page.title),
            card_html: format!(
                "<div class=\"card\"><h2>{}</h2>{}</div>",
                escape(&page.title),
                page.content
            ),
        }
    }
}
