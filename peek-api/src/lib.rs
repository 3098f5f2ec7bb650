//! Peek API - Shared types for the peek value inspector.
//!
//! Hosts describe what they want inspected with [`Value`]; the kernel hands
//! back a [`RenderNode`] tree that any presentation layer can display.

mod node;
mod value;

pub use node::*;
pub use value::*;
