use serde::Serialize;

use crate::dom::host::Host;
use crate::mention::fuzzy::fuzzy_search;
use crate::mention::trigger::last_trigger;
use crate::selection::caret::preceding_range;
use crate::selection::range::TextRange;

/// Knobs for keyword extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionOptions {
    /// Allow whitespace inside the keyword ("@john smith").
    pub allow_spaces: bool,
    /// Suppress the query when the trigger is glued to a preceding
    /// alphanumeric character, as in the middle of an email address.
    pub avoid_email: bool,
}

impl Default for MentionOptions {
    fn default() -> Self {
        Self {
            allow_spaces: false,
            avoid_email: true,
        }
    }
}

/// An active mention query: the trigger that opened it, the keyword typed
/// so far and the trigger's byte index in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionQuery<'a> {
    pub trigger: &'a str,
    pub keyword: String,
    pub index: usize,
}

/// Extracts a mention query from the text preceding the caret.
///
/// `None` means no popup should be shown: no trigger occurs in the text,
/// the trigger is embedded in something email-like, the keyword starts
/// with whitespace, or it contains whitespace that `options.allow_spaces`
/// does not permit.
pub fn mention_query<'a>(
    preceding: &str,
    triggers: &[&'a str],
    options: MentionOptions,
) -> Option<MentionQuery<'a>> {
    let hit = last_trigger(preceding, triggers)?;
    let index = hit.index?;
    if options.avoid_email {
        let glued = preceding[..index]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        if glued {
            return None;
        }
    }
    let keyword = &preceding[index + hit.trigger.len()..];
    if keyword.chars().next().is_some_and(char::is_whitespace) {
        return None;
    }
    if !options.allow_spaces && keyword.chars().any(char::is_whitespace) {
        return None;
    }
    Some(MentionQuery {
        trigger: hit.trigger,
        keyword: keyword.to_string(),
        index,
    })
}

/// Narrows `candidates` to those fuzzy-matching `keyword`, preserving
/// their original order.
pub fn filter_candidates<'c, T: AsRef<str>>(keyword: &str, candidates: &'c [T]) -> Vec<&'c T> {
    candidates
        .iter()
        .filter(|candidate| fuzzy_search(keyword, candidate.as_ref()))
        .collect()
}

/// Runs [`mention_query`] on the text between the start of the caret's
/// node and the caret itself.
///
/// `None` when the host has no usable selection, in addition to the
/// suppression cases of [`mention_query`].
pub fn mention_query_at_caret<'a, H: Host>(
    host: &H,
    triggers: &[&'a str],
    options: MentionOptions,
) -> Option<MentionQuery<'a>> {
    let preceding = preceding_range(host)?.text();
    mention_query(&preceding, triggers, options)
}
