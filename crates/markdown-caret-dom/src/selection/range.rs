use crate::dom::host::Node;

/// A contiguous span of text between two positions in the document.
///
/// A range is a detached value. Cloning one and mutating the clone never
/// disturbs the live selection or any other range; only
/// [`Selection::replace_ranges`] writes a range back into the document.
pub trait TextRange: Clone {
    type Node: Node;

    /// Node containing the range's end boundary.
    fn end_container(&self) -> Self::Node;

    /// Offset of the end boundary within its container, in bytes.
    fn end_offset(&self) -> usize;

    /// Plain text covered by the range.
    fn text(&self) -> String;

    /// Collapses the range to a single position: its start when `to_start`
    /// is true, its end otherwise.
    fn collapse(&mut self, to_start: bool);

    /// Moves the start boundary to `offset` within `node`.
    fn set_start(&mut self, node: &Self::Node, offset: usize);
}

/// The host's selection service.
pub trait Selection {
    type Range: TextRange;

    /// Snapshot of the first (primary) range, or `None` when nothing is
    /// selected.
    fn first_range(&self) -> Option<Self::Range>;

    /// Clears the selection and installs `range` as its only range.
    fn replace_ranges(&self, range: Self::Range);
}
