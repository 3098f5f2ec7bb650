//! Peek Kernel - The value inspector core.
//!
//! This crate contains:
//! - Classifier (value -> node kind)
//! - Renderer (recursive descent with a per-invocation visit registry)
//! - Text policy (escaping, truncation)
//! - Callback detection
//! - Render configuration
//! - Collectors that gather host collections into values

pub mod callback;
pub mod collect;
pub mod config;
pub mod registry;
pub mod render;
pub mod text;

mod classify;

pub use callback::{CallableResolver, KnownCallables};
pub use classify::classify;
pub use collect::{Collection, Collector, CollectorRegistry};
pub use config::RenderConfig;
pub use registry::{RecursionMarker, VisitRegistry};
pub use render::{Renderer, DEFAULT_LABEL};
