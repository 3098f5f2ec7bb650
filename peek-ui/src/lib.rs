//! Peek UI - presentation of render trees.
//!
//! Turns the kernel's `RenderNode` trees into collapsible HTML (with a skin
//! stylesheet and toggle script), plain-text trees, or JSON, and provides the
//! dump/fetch helpers hosts call.

pub mod cli;
pub mod dump;
pub mod html;
pub mod skin;
pub mod text;

mod error;

pub use dump::{Dumper, OutputFormat};
pub use error::{PeekError, Result};
pub use html::HtmlEmitter;
pub use skin::{Skin, SkinSource};
pub use text::TextEmitter;
