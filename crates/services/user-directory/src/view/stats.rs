//! Dashboard counts.

use serde::Serialize;

use domain::User;

/// Total, active and inactive user counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        let active = users.iter().filter(|u| u.is_active()).count();
        Self {
            total: users.len(),
            active,
            inactive: users.len() - active,
        }
    }
}
