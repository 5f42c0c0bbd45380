//! Case-study content for the folio site.
//!
//! Case studies are Markdown files in a single directory, one per slug,
//! each optionally starting with a YAML front-matter block:
//!
//! ```text
//! ---
//! title: Streaming ETL on a budget
//! date: 2024-03-01
//! summary: Moving nightly batches to CDC.
//! ---
//! Body in **Markdown**.
//! ```
//!
//! The directory is only ever read, so any number of readers may share a
//! [`CaseStudyStore`].

mod error;
mod front_matter;
mod render;
mod store;

pub use error::{ContentError, ContentResult};
pub use front_matter::{Document, FrontMatter};
pub use render::render_markdown;
pub use store::{CaseStudy, CaseStudyStore, CaseStudySummary, SUMMARY_MAX_CHARS};
