use serde::Serialize;

/// Which trigger string won the scan and where its last occurrence starts.
///
/// `index` is a byte offset into the scanned text, `None` when the trigger
/// does not occur at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerHit<'a> {
    pub trigger: &'a str,
    pub index: Option<usize>,
}

/// Finds the trigger whose last occurrence in `text` is rightmost.
///
/// Every trigger is looked up with a reverse search and the one with the
/// greatest index wins. Ties and the all-absent case resolve to whichever
/// trigger comes first in `triggers`, so callers put their preferred
/// trigger first. Returns `None` only for an empty trigger list.
///
/// `last_trigger("a #b @c #d", &["@", "#"])` reports `"#"` at index 8: the
/// last `#` (index 8) beats the last `@` (index 5).
pub fn last_trigger<'a>(text: &str, triggers: &[&'a str]) -> Option<TriggerHit<'a>> {
    let mut best: Option<TriggerHit<'a>> = None;
    for &trigger in triggers {
        let index = text.rfind(trigger);
        match &best {
            // Option<usize> orders None below Some(0), and a strict
            // comparison keeps the earlier trigger on equal indices.
            Some(current) if index <= current.index => {}
            _ => best = Some(TriggerHit { trigger, index }),
        }
    }
    best
}
