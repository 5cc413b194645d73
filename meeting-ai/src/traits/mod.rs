//! Provider traits for meeting AI services.

pub mod agent;
