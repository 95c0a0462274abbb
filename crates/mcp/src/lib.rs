// MCP (Model Context Protocol) server for Google Search Console
// Exposes read-only Search Console tools to agent clients (Claude Code, etc.)

pub mod format;
pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
