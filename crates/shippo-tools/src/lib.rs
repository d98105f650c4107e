//! MCP tools over the Shippo REST API.
//!
//! [`ToolRegistry`] advertises one tool per Shippo operation, validates and decodes the
//! arguments against each tool's schema, runs the call with the caller's credentials and
//! renders the result as Markdown or JSON.

mod catalog;
pub mod error;
pub mod format;
pub mod params;
pub mod registry;
pub mod semantics;
mod validate;

pub use error::{ToolError, Violation};
pub use format::{EntityKind, Output, render};
pub use params::OutputFormat;
pub use registry::ToolRegistry;
pub use semantics::{OperationKind, annotations_for};
