//! MongoDB MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing MongoDB find, update,
//! delete and list-collections operations as tools.

pub mod config;
pub mod error;
pub mod mcp;
pub mod mongo;

pub use config::Config;
pub use error::{MongoMcpError, Result};
