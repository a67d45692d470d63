//! Report composition: pages, their layouts, and the composer that renders them.

mod composer;
mod layout;
mod page;

pub use composer::{RenderedPage, RenderedSection, Report, ReportComposer};
pub use layout::{PageLayout, REPORT_TITLE, Section, page_layout, resolve_artifact};
pub use page::Page;
