//! Command handlers, one module per concern

pub mod config;
pub mod enhance;
pub mod share;
pub mod timeline;
