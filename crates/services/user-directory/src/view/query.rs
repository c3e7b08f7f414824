//! Filtered, sorted projection of the user collection.

use std::cmp::Ordering;
use std::str::FromStr;

use common::AppError;
use domain::{User, UserRole, UserStatus};

use super::collate::locale_compare;

/// Filter value meaning "no filter"
pub const FILTER_ALL: &str = "all";

/// Field the projection is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl SortField {
    /// Text the field sorts on
    fn key<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SortField::Name => &user.name,
            SortField::Email => &user.email,
            SortField::Role => user.role.as_str(),
            SortField::Status => user.status.as_str(),
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            "role" => Ok(SortField::Role),
            "status" => Ok(SortField::Status),
            _ => Err(AppError::validation(format!("Unknown sort field: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(AppError::validation(format!("Unknown sort direction: {}", s))),
        }
    }
}

/// Sort configuration, `name` ascending by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = locale_compare(self.field.key(a), self.field.key(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Parse a role filter; `all` (any case) means no filter.
pub fn parse_role_filter(value: &str) -> Result<Option<UserRole>, AppError> {
    if value.eq_ignore_ascii_case(FILTER_ALL) {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

/// Parse a status filter; `all` (any case) means no filter.
pub fn parse_status_filter(value: &str) -> Result<Option<UserStatus>, AppError> {
    if value.eq_ignore_ascii_case(FILTER_ALL) {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

/// View inputs. The projection is a pure function of these and the
/// collection; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Case-insensitive substring of name or email; empty matches all
    pub search: String,
    /// None means no role filter
    pub role: Option<UserRole>,
    /// None means no status filter
    pub status: Option<UserStatus>,
    pub sort: SortConfig,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn role(mut self, role: Option<UserRole>) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: Option<UserStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn sort_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = SortConfig::new(field, direction);
        self
    }

    /// Check one record against the search text and both filters
    pub fn matches(&self, user: &User) -> bool {
        self.matches_search(user)
            && self.role.map_or(true, |role| user.role == role)
            && self.status.map_or(true, |status| user.status == status)
    }

    fn matches_search(&self, user: &User) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
    }

    /// Project the collection: filter, then stable-sort.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut rows: Vec<&User> = users.iter().filter(|u| self.matches(u)).collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}

#[cfg(test)]
mod tests {
    use domain::NewUser;
    use uuid::Uuid;

    use super::*;

    fn user(name: &str, email: &str, role: UserRole, status: UserStatus) -> User {
        User::new(
            Uuid::new_v4(),
            NewUser {
                name: name.to_string(),
                email: email.to_string(),
                role,
                status,
                profile_photo: None,
            },
        )
    }

    fn ann_and_bob() -> Vec<User> {
        vec![
            user("Ann", "ann@example.com", UserRole::User, UserStatus::Active),
            user("Bob", "bob@example.com", UserRole::Admin, UserStatus::Inactive),
        ]
    }

    fn names(rows: &[&User]) -> Vec<String> {
        rows.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_returns_every_record() {
        let users = ann_and_bob();
        let rows = UserQuery::new().apply(&users);

        assert_eq!(rows.len(), users.len());
        assert!(users.iter().all(|u| rows.contains(&u)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let users = ann_and_bob();

        assert_eq!(names(&UserQuery::new().search("an").apply(&users)), ["Ann"]);
        assert_eq!(names(&UserQuery::new().search("BOB@").apply(&users)), ["Bob"]);
        assert!(UserQuery::new().search("zed").apply(&users).is_empty());
    }

    #[test]
    fn test_search_matches_email() {
        let users = vec![user("Ann", "captain@example.com", UserRole::User, UserStatus::Active)];
        assert_eq!(UserQuery::new().search("captain").apply(&users).len(), 1);
    }

    #[test]
    fn test_role_and_status_filters() {
        let users = ann_and_bob();

        let admins = UserQuery::new().role(Some(UserRole::Admin)).apply(&users);
        assert_eq!(names(&admins), ["Bob"]);

        let active = UserQuery::new().status(Some(UserStatus::Active)).apply(&users);
        assert_eq!(names(&active), ["Ann"]);

        let none = UserQuery::new()
            .role(Some(UserRole::Admin))
            .status(Some(UserStatus::Active))
            .apply(&users);
        assert!(none.is_empty());
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let users = vec![
            user("carol", "c@x.com", UserRole::User, UserStatus::Active),
            user("Ann", "a@x.com", UserRole::User, UserStatus::Active),
            user("bob", "b@x.com", UserRole::User, UserStatus::Active),
        ];

        let asc = UserQuery::new().apply(&users);
        assert_eq!(names(&asc), ["Ann", "bob", "carol"]);

        let desc = UserQuery::new()
            .sort_by(SortField::Name, SortDirection::Desc)
            .apply(&users);
        assert_eq!(names(&desc), ["carol", "bob", "Ann"]);
    }

    #[test]
    fn test_sort_by_role_is_stable() {
        let users = vec![
            user("Zed", "z@x.com", UserRole::User, UserStatus::Active),
            user("Amy", "a@x.com", UserRole::Admin, UserStatus::Active),
            user("Kim", "k@x.com", UserRole::User, UserStatus::Active),
        ];

        let asc = UserQuery::new()
            .sort_by(SortField::Role, SortDirection::Asc)
            .apply(&users);
        assert_eq!(names(&asc), ["Amy", "Zed", "Kim"]);

        let desc = UserQuery::new()
            .sort_by(SortField::Role, SortDirection::Desc)
            .apply(&users);
        assert_eq!(names(&desc), ["Zed", "Kim", "Amy"]);
    }

    #[test]
    fn test_sort_by_status_and_email() {
        let users = ann_and_bob();

        let by_status = UserQuery::new()
            .sort_by(SortField::Status, SortDirection::Desc)
            .apply(&users);
        assert_eq!(names(&by_status), ["Bob", "Ann"]);

        let by_email = UserQuery::new()
            .sort_by(SortField::Email, SortDirection::Desc)
            .apply(&users);
        assert_eq!(names(&by_email), ["Bob", "Ann"]);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(parse_role_filter("all").unwrap(), None);
        assert_eq!(parse_role_filter("ALL").unwrap(), None);
        assert_eq!(parse_role_filter("Guest").unwrap(), Some(UserRole::Guest));
        assert!(parse_role_filter("Owner").is_err());

        assert_eq!(parse_status_filter("Inactive").unwrap(), Some(UserStatus::Inactive));
        assert_eq!(parse_status_filter("all").unwrap(), None);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("Email".parse::<SortField>().unwrap(), SortField::Email);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("age".parse::<SortField>().is_err());
        assert_eq!(SortConfig::default(), SortConfig::new(SortField::Name, SortDirection::Asc));
    }
}
