//! Attach step of the reference-expansion join.
//!
//! Expansion runs in two explicit steps: the DAO fetches the raw
//! records, the store loads the referenced user documents in one `$in`
//! query, and this module attaches them to the records.

use std::collections::HashMap;
use tuiter_core::{User, UserId, UserRef};

/// Replaces each reference with the matching user document.
///
/// References whose user document is missing from `users` are left as
/// raw identifiers; a dangling reference does not fail the listing.
pub(crate) fn attach_users<'a, I>(refs: I, users: &HashMap<UserId, User>)
where
    I: IntoIterator<Item = &'a mut UserRef>,
{
    for user_ref in refs {
        if let Some(user) = users.get(&user_ref.user_id()) {
            user_ref.expand(user.clone());
        }
    }
}
