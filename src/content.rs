//! Page content for both groups, described as typed blocks and rendered to
//! HTML fragments by a single templating function.

use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::sync::OnceLock;

/// Attribute marking a link whose destination can be reassigned at runtime.
pub const EDIT_LINK_ATTR: &str = "data-edit-link";

/// CSS selector matching every editable link.
pub fn edit_link_selector() -> String {
    format!("[{EDIT_LINK_ATTR}]")
}

/// Number of `<a>` tags in `html` carrying the editable-link marker.
pub fn count_editable_links(html: &str) -> usize {
    static MARKED_ANCHOR: OnceLock<Regex> = OnceLock::new();
    MARKED_ANCHOR
        .get_or_init(|| Regex::new(r"<a\s[^>]*?\sdata-edit-link[\s>=/]").unwrap())
        .find_iter(html)
        .count()
}

pub const MODULE_NAMES: [&str; 10] = [
    "Instandhaltung & Workorders",
    "Mieter-Management",
    "Finanzen & Rechnungen",
    "Vertragsverwaltung",
    "Asset-Analytics",
    "Reporting & Exporte",
    "Kalender & Termine",
    "Dokumenten-Archiv",
    "Tasks & ToDos",
    "Energie & Verbrauch",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Page(String),
    Editable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub target: Target,
}

impl Link {
    pub fn page(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Target::Page(id.into()),
        }
    }

    pub fn editable(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Target::Editable,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link(Link),
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(text.to_string())
    }
}

impl From<Link> for Inline {
    fn from(link: Link) -> Self {
        Inline::Link(link)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Lead(String),
    Facts(Vec<(String, String)>),
    Rule,
    Heading(u8, String),
    Actions(Vec<Link>),
    List { ordered: bool, items: Vec<Vec<Inline>> },
    Card { heading: String, body: Vec<Block> },
    Columns(Vec<Block>),
    /// Markdown prose.
    Note(String),
}

fn lead(text: impl Into<String>) -> Block {
    Block::Lead(text.into())
}

fn facts<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Block {
    Block::Facts(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
}

fn heading(level: u8, text: impl Into<String>) -> Block {
    Block::Heading(level, text.into())
}

fn plain_list(ordered: bool, items: &[&str]) -> Block {
    Block::List {
        ordered,
        items: items.iter().map(|item| vec![Inline::from(*item)]).collect(),
    }
}

pub fn module_name(index: u8) -> &'static str {
    MODULE_NAMES[usize::from(index.saturating_sub(7)) % MODULE_NAMES.len()]
}

pub fn real_estate_blocks(index: u8) -> Vec<Block> {
    match index {
        1 => vec![
            lead("Property Management Dashboard"),
            facts([
                ("Total properties", "128"),
                ("Occupied", "102"),
                ("Available", "26"),
            ]),
            Block::Rule,
            heading(3, "Quick Actions"),
            Block::Actions(vec![
                Link::page("Property list", "prop-02"),
                Link::page("Create invoice", "prop-05"),
                Link::page("Open maintenance", "prop-08"),
            ]),
            Block::Note(
                "Hinweis: Links sind Hash-Routen — wenn du echte URLs willst, ersetze hrefs."
                    .to_string(),
            ),
        ],
        2..=6 => {
            let prop_id = u32::from(index) - 1;
            vec![
                lead(format!("Immobilie: Objekt #{prop_id}")),
                facts([
                    ("Adresse".to_string(), format!("Straße {prop_id}, 12345 Stadt")),
                    ("Typ".to_string(), "Mehrfamilienhaus".to_string()),
                    ("Größe".to_string(), format!("{} m²", 80 + prop_id * 5)),
                ]),
                Block::Rule,
                heading(3, "Wohnungen"),
                Block::List {
                    ordered: false,
                    items: vec![
                        vec!["Whg A – frei – ".into(), Link::page("Details", "prop-10").into()],
                        vec!["Whg B – vermietet – ".into(), Link::page("Mieter", "prop-11").into()],
                    ],
                },
                heading(3, "Dokumente"),
                lead("Rechnungen, Verträge, Fotos"),
                Block::Actions(vec![Link::editable("Editiere Link")]),
            ]
        }
        _ => vec![
            lead(module_name(index)),
            Block::Columns(vec![
                Block::Card {
                    heading: "Übersicht".to_string(),
                    body: vec![lead("Kurzstatistiken und KPI.")],
                },
                Block::Card {
                    heading: "Letzte Einträge".to_string(),
                    body: vec![plain_list(false, &["Eintrag A", "Eintrag B", "Eintrag C"])],
                },
            ]),
            Block::Actions(vec![Link::page("Zurück zum Dashboard", "prop-01")]),
        ],
    }
}

pub fn rally_blocks(index: u8) -> Vec<Block> {
    if index == 1 {
        return vec![
            lead("Rally Übersicht – Teams, Stages, Leaderboard"),
            Block::Actions(vec![
                Link::page("Stages", "rally-02"),
                Link::page("Teams", "rally-03"),
                Link::page("Live Telemetry", "rally-04"),
            ]),
            Block::Card {
                heading: "Leaderboard".to_string(),
                body: vec![plain_list(true, &["Team A — 1:23:45", "Team B — 1:24:11"])],
            },
        ];
    }

    let distance = 5 + u32::from(index) * 2;
    let surface = if index % 2 == 1 { "Gravel" } else { "Tarmac" };
    vec![
        lead(format!("Rally Stage {index}")),
        Block::Card {
            heading: "Stage Details".to_string(),
            body: vec![
                facts([
                    ("Distance".to_string(), format!("{distance} km")),
                    ("Surface".to_string(), surface.to_string()),
                ]),
                Block::Actions(vec![
                    Link::page("Zurück zur Übersicht", "rally-01"),
                    Link::editable("Edit Link"),
                ]),
            ],
        },
    ]
}

pub fn real_estate_content(index: u8) -> String {
    render(&real_estate_blocks(index))
}

pub fn rally_content(index: u8) -> String {
    render(&rally_blocks(index))
}

pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Lead(text) => {
            out.push_str("<p class=\"muted\">");
            out.push_str(&escape(text));
            out.push_str("</p>");
        }
        Block::Facts(pairs) => {
            out.push_str("<div class=\"kv\">");
            for (key, value) in pairs {
                out.push_str(&format!(
                    "<div class=\"k\">{}</div><div class=\"v\">{}</div>",
                    escape(key),
                    escape(value)
                ));
            }
            out.push_str("</div>");
        }
        Block::Rule => out.push_str("<hr/>"),
        Block::Heading(level, text) => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>{}</h{level}>", escape(text)));
        }
        Block::Actions(links) => {
            out.push_str("<div class=\"hrow\">");
            for link in links {
                render_link(out, link);
            }
            out.push_str("</div>");
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                for part in item {
                    match part {
                        Inline::Text(text) => out.push_str(&escape(text)),
                        Inline::Link(link) => render_link(out, link),
                    }
                }
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        Block::Card { heading, body } => {
            out.push_str("<div class=\"card\">");
            out.push_str(&format!("<h4>{}</h4>", escape(heading)));
            for inner in body {
                render_block(out, inner);
            }
            out.push_str("</div>");
        }
        Block::Columns(columns) => {
            out.push_str("<div class=\"columns\">");
            for column in columns {
                render_block(out, column);
            }
            out.push_str("</div>");
        }
        Block::Note(markdown) => {
            out.push_str("<div class=\"muted note\">");
            html::push_html(out, Parser::new(markdown));
            out.push_str("</div>");
        }
    }
}

fn render_link(out: &mut String, link: &Link) {
    let label = escape(&link.label);
    match &link.target {
        Target::Page(id) => out.push_str(&format!(
            "<a class=\"rect-btn\" href=\"#/{}\">{label}</a>",
            escape(id)
        )),
        Target::Editable => out.push_str(&format!(
            "<a class=\"rect-btn\" href=\"#\" {EDIT_LINK_ATTR}>{label}</a>"
        )),
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
