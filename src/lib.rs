//! # copyhead
//!
//! A tool that walks a source tree and prepends a copyright header to every
//! matching file that does not already carry one.
//!
//! `copyhead` modifies files in place. A file is skipped when its content
//! already contains the marker substring, so a tree whose template and marker
//! agree can be stamped any number of times with the same result.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use copyhead::config::HeaderSettings;
//! use copyhead::processor::{Processor, ProcessorConfig};
//! use copyhead::templates::HeaderTemplate;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = HeaderSettings::default();
//!     let template = HeaderTemplate::load(&settings.template_path, &settings.placeholder)?;
//!
//!     let processor = Processor::new(ProcessorConfig::new(template, settings));
//!     let reports = processor.process(Path::new("."))?;
//!
//!     println!("Considered {} files", reports.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking the tree and stamping files
//! * [`templates`] - Loading and rendering the header template
//! * [`file_filter`] - Extension, generated-file and directory rules
//! * [`config`] - Settings and `.copyhead.toml` overrides
//! * [`logging`] - Progress and verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`file_filter`]: crate::file_filter
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod config;
pub mod diff;
pub mod file_filter;
pub mod header_detection;
pub mod logging;
pub mod processor;
pub mod report;
pub mod templates;
