//! Data types shared by the analysis routines and their callers.

pub mod agent;
pub mod insights;
pub mod meeting;
