//! LaTeX-specific pieces that are not part of the document tree itself:
//! the fixed preamble and escaping of user text.

pub mod escape;
pub mod preamble;

pub use escape::{escape_latex, escape_url, EscapeText};
pub use preamble::{PREAMBLE, PREAMBLE_VERSION};
