//! copydesk - an editorial consistency checker for Markdown blogs
//!
//! This library provides the core functionality for copydesk: corpus
//! loading, front-matter and tag validation, quality assessment and
//! registry regeneration.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod models;
pub mod registry;
pub mod report;
pub mod services;
