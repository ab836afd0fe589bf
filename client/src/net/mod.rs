//! Networking for the widget's single HTTP exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the `/api/ask` call and `types` defines its wire schema.

pub mod api;
pub mod types;
