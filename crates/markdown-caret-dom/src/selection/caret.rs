use crate::dom::host::Host;
use crate::selection::range::{Selection, TextRange};

/// Snapshot of the host's current primary range.
///
/// `None` when the host has no selection service or nothing is selected.
pub fn current_range<H: Host>(host: &H) -> Option<H::Range> {
    host.selection()?.first_range()
}

/// Replaces the host's selection with `range`.
///
/// Quietly does nothing when the host has no selection service, so callers
/// can restore a saved caret without caring whether focus ever left the
/// document.
pub fn apply_range<H: Host>(host: &H, range: H::Range) {
    if let Some(selection) = host.selection() {
        selection.replace_ranges(range);
    }
}

/// Range from the start of the caret's container node up to the caret.
///
/// The current range is collapsed to its end first, so a non-empty
/// selection contributes its end position as the caret. The result stays a
/// detached value; the live selection is not modified. `None` when there is
/// no current selection.
///
/// The text of this range is what the mention pipeline scans for a trigger
/// character preceding the caret.
pub fn preceding_range<H: Host>(host: &H) -> Option<H::Range> {
    let mut range = current_range(host)?;
    range.collapse(false);
    let container = range.end_container();
    range.set_start(&container, 0);
    Some(range)
}
