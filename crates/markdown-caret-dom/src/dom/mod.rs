//! Host-DOM access for the editor.
//!
//! The editor core never talks to a concrete DOM. Everything it needs from
//! the rendering host is expressed as the small traits in [`host`]: a tree
//! of nodes, elements with layout geometry, and a way to reach the active
//! selection. The functions in [`geometry`], [`scroll`] and [`tree`] are
//! written against those traits only, so they run unchanged against a real
//! browser binding, a webview bridge, or the in-memory fake used by the
//! test suite.

pub mod geometry;
pub mod host;
pub mod scroll;
pub mod tree;

pub use geometry::{Offset, cumulative_offset};
pub use host::{Element, Host, Node};
pub use scroll::{ensure_visible, scroll_into_view};
pub use tree::closest;
