//! Hash-routed demo site with 30 generated pages in two groups, a theme
//! switcher and prompt-editable links, rendered client-side with Leptos.

pub mod app;
pub mod behaviors;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod registry;
pub mod router;
pub mod shell;
pub mod sidebar;
pub mod theme;

pub use config::SiteConfig;
pub use error::SiteError;
pub use registry::{Group, PageRecord, Registry};
pub use shell::Shell;
