use serde::{Deserialize, Serialize};

use crate::dom::host::Element;

/// Pixel position relative to some ancestor, top-left origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub top: i32,
    pub left: i32,
}

/// Accumulates `element`'s offsets up the offset-parent chain.
///
/// Walks from `element` towards the root, summing each step's top/left
/// offsets. With `target: None` the walk runs until the chain is exhausted,
/// yielding the position relative to the outermost positioning context.
/// With a target, accumulation stops when the target is reached and the
/// target's own offsets are not included, yielding the position relative
/// to that ancestor. A target that never appears on the chain behaves the
/// same as `None`.
pub fn cumulative_offset<E: Element>(element: &E, target: Option<&E>) -> Offset {
    let mut offset = Offset {
        top: element.offset_top(),
        left: element.offset_left(),
    };
    let mut current = element.offset_parent();
    while let Some(ancestor) = current {
        if target.is_some_and(|target| *target == ancestor) {
            break;
        }
        offset.top += ancestor.offset_top();
        offset.left += ancestor.offset_left();
        current = ancestor.offset_parent();
    }
    offset
}
