//! Caret and selection handling.
//!
//! Ranges are values: reading the current range takes a snapshot that stays
//! valid however the live selection changes afterwards, and a snapshot only
//! affects the document when it is explicitly applied back. This is what
//! lets a mention popup steal focus, let the user click around, and still
//! restore the caret to where typing left off.

pub mod caret;
pub mod range;

pub use caret::{apply_range, current_range, preceding_range};
pub use range::{Selection, TextRange};
