//! audit-visuals: branded chart images for audit reports.
//!
//! Each chart kind is a typed JSON payload laid out into a backend-agnostic
//! `RenderFrame`, which a renderer (SVG, or Cairo PNG behind the
//! `cairo-backend` feature) turns into an image file.

pub mod api;
pub mod charts;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{ChartRenderer, RenderedChart};
pub use charts::ChartKind;
pub use config::RenderConfig;
pub use error::{ChartError, ChartResult};
pub use theme::{Severity, Theme};
