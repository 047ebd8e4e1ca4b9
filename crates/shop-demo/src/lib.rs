//! # shop-demo
//!
//! Console walkthrough for mini-shop-rs.
//!
//! This crate provides:
//! - `DemoConfig` loaded from the environment
//! - `scenario::run`, the fixed catalog / order / payment walkthrough
//!
//! ## Environment
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `SHOP_LOG_FORMAT` | `pretty`, `json` | `pretty` |
//! | `SHOP_BANNER` | `true`, `false` | `true` |
//! | `RUST_LOG` | tracing directives | `info` |

pub mod config;
pub mod scenario;

pub use config::{DemoConfig, LogFormat};
pub use scenario::{run, DemoReport};
