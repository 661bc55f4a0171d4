// Components module - reusable UI building blocks
//
// Shell components render in every state:
// - Title bar: app name and active topic
// - Sidebar: topic menu
// - Status bar: record count, topic, key hints
// - Logs panel: system log entries (toggled)
// Content panel and the error banner fill the main area.

pub mod content_panel;
pub mod error_banner;
pub mod formatters;
pub mod logs_panel;
pub mod scrollbar;
pub mod sidebar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

pub use formatters::{format_compact_number, format_number};
