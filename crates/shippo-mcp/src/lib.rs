//! Shippo MCP server: configuration, logging, credential resolution and the stdio and
//! streamable-HTTP hosts around [`shippo_tools::ToolRegistry`].

pub mod config;
pub mod credentials;
pub mod http;
pub mod logging;
pub mod server;

pub use config::{Cli, LogFormat, Transport};
pub use server::ShippoMcpServer;
