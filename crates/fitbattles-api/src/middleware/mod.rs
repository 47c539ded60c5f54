//! HTTP middleware and tower layers.

pub mod cors;
pub mod logging;
