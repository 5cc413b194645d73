//! Clients for the third-party services the relay forwards work to.

pub mod composio;
pub mod mastra;
