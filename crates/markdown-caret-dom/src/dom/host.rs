//! Traits the rendering host implements to expose its DOM to the editor.

use crate::selection::{Selection, TextRange};

/// A node in the host's document tree.
///
/// Equality must mean node identity (the same node in the tree), not
/// structural equality of contents.
pub trait Node: Clone + PartialEq {
    /// Parent node, or `None` at the tree root.
    fn parent(&self) -> Option<Self>;
}

/// A rendered element with layout geometry.
pub trait Element: Node {
    /// Distance from the top edge of the offset parent, in pixels.
    fn offset_top(&self) -> i32;

    /// Distance from the left edge of the offset parent, in pixels.
    fn offset_left(&self) -> i32;

    /// Rendered height in pixels.
    fn offset_height(&self) -> i32;

    /// The ancestor that `offset_top`/`offset_left` are relative to,
    /// or `None` once the chain is exhausted.
    fn offset_parent(&self) -> Option<Self>;

    /// Current vertical scroll position of this element's content.
    fn scroll_top(&self) -> i32;

    /// Scrolls this element's content to the given vertical position.
    fn set_scroll_top(&self, value: i32);

    /// Asks the host to natively scroll this element into view.
    ///
    /// Returns `false` when the host has no native facility, in which
    /// case the caller falls back to manual scroll arithmetic.
    fn scroll_into_view_if_needed(&self) -> bool;
}

/// The rendering host itself.
///
/// One value of this trait is threaded through every operation that needs
/// live DOM state. Hosts that cannot provide a selection service (headless
/// rendering, detached documents) return `None` from [`Host::selection`]
/// and the selection operations degrade to no-ops.
pub trait Host {
    type Element: Element;
    type Range: TextRange<Node = Self::Element>;
    type Selection: Selection<Range = Self::Range>;

    /// The host's selection service, if one is available.
    fn selection(&self) -> Option<Self::Selection>;

    /// The scrollable ancestor that should be adjusted to reveal `element`.
    fn scroll_container_for(&self, element: &Self::Element) -> Option<Self::Element>;
}
