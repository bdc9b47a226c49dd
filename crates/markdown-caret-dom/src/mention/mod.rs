//! Mention lookup: trigger detection, keyword extraction and candidate
//! filtering.
//!
//! The pipeline runs on every keystroke while a mention popup may be open:
//! take the text preceding the caret, find the last trigger character in
//! it ([`last_trigger`]), extract the keyword typed after the trigger
//! ([`mention_query`]) and narrow the candidate list with subsequence
//! matching ([`fuzzy_search`] / [`filter_candidates`]).

pub mod fuzzy;
pub mod query;
pub mod trigger;

pub use fuzzy::fuzzy_search;
pub use query::{
    MentionOptions, MentionQuery, filter_candidates, mention_query, mention_query_at_caret,
};
pub use trigger::{TriggerHit, last_trigger};
