//! Rebuilding expressions from the value-keyed node stores

mod errors;
mod symbols;
mod walk;

pub use errors::RenderError;
pub use symbols::symbol;
pub use walk::{Rendering, Token, format_rpn, infix, render, rpn};
