use crate::dom::host::{Element, Host};

/// Scrolls `scroll_parent` so that `element` becomes visible.
///
/// Prefers the host's native facility (the non-standard
/// `scrollIntoViewIfNeeded`,
/// <https://developer.mozilla.org/en-US/docs/Web/API/Element/scrollIntoViewIfNeeded>)
/// and returns as soon as the host reports that it handled the request.
/// Otherwise compares the element's position against the parent's current
/// viewport: when the element sits above the viewport or below its last
/// fully-visible row, the parent is scrolled so the element's top aligns
/// with the viewport top. An element already fully visible leaves the
/// scroll position untouched.
pub fn scroll_into_view<E: Element>(element: &E, scroll_parent: &E) {
    if element.scroll_into_view_if_needed() {
        return;
    }
    let diff = element.offset_top() - scroll_parent.scroll_top();
    if diff < 0 || diff > scroll_parent.offset_height() - element.offset_height() {
        scroll_parent.set_scroll_top(element.offset_top());
    }
}

/// Reveals `element` inside whatever scroll container the host assigns it.
///
/// No-op when the host reports no scroll container for the element.
pub fn ensure_visible<H: Host>(host: &H, element: &H::Element) {
    if let Some(container) = host.scroll_container_for(element) {
        scroll_into_view(element, &container);
    }
}
