//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role
pub const ROLE_ADMIN: &str = "Admin";

/// Regular user role, the default for new records
pub const ROLE_USER: &str = "User";

/// Guest role with the least privileges
pub const ROLE_GUEST: &str = "Guest";

/// All valid role values, in the order offered to operators
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER, ROLE_GUEST];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// User Status
// =============================================================================

/// Active account, the default for new records
pub const STATUS_ACTIVE: &str = "Active";

/// Inactive account
pub const STATUS_INACTIVE: &str = "Inactive";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE];

/// Check if a status value is valid
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

// =============================================================================
// Profile Photos
// =============================================================================

/// Largest accepted profile photo upload (5 MiB)
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// MIME prefix every accepted profile photo must carry
pub const IMAGE_MIME_PREFIX: &str = "image/";
