//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; there are no resources or prompts.

pub mod tools;
