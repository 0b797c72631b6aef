//! Discord snowflake validity.
//!
//! Raw IDs travel through flags, env and the config file as plain `u64`s with
//! `0` meaning "unset". They only become typed [`Id`]s once they pass
//! [`checked_id`].

use twilight_model::id::Id;

/// The all-ones snowflake Discord uses as a null marker.
pub const NULL_SNOWFLAKE: u64 = u64::MAX;

/// Returns `true` when `raw` can name a Discord object.
pub fn is_valid(raw: u64) -> bool {
    raw != 0 && raw != NULL_SNOWFLAKE
}

/// Converts a raw ID into a typed one, rejecting zero and the null snowflake.
pub fn checked_id<T>(raw: u64) -> Option<Id<T>> {
    if raw == NULL_SNOWFLAKE {
        return None;
    }
    Id::new_checked(raw)
}
