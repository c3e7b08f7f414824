//! Read-only views over the user collection.

mod collate;
mod query;
mod stats;

pub use collate::locale_compare;
pub use query::{
    parse_role_filter, parse_status_filter, SortConfig, SortDirection, SortField, UserQuery,
    FILTER_ALL,
};
pub use stats::UserStats;
