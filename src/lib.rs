#![doc = include_str!("../README.md")]

pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod renderer;
pub(crate) mod term;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::format::Format;
    pub use crate::renderer::ProgressRenderer;
    pub use crate::term::{NoTerminal, TerminalWidth, WidthQuery};
}

pub use crate::prelude::*;
