//! HTTP middleware stack.

pub mod compression;
pub mod cors;
pub mod logging;
