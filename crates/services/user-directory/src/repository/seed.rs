//! Bundled seed collection, used when no persisted collection exists.

use domain::User;
use tracing::error;

const SEED_USERS_JSON: &str = include_str!("../../seed/users.json");

/// Parse the bundled seed collection.
///
/// The file ships with the binary; if it ever fails to parse the directory
/// starts empty rather than aborting.
pub fn seed_users() -> Vec<User> {
    serde_json::from_str(SEED_USERS_JSON).unwrap_or_else(|e| {
        error!("Bundled seed collection is invalid: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_parses_with_unique_ids() {
        let users = seed_users();
        assert_eq!(users.len(), 5);

        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
        assert!(users.iter().all(|u| !u.has_photo()));
    }
}
