//! This crate contains all shared UI for the workspace.
//!
//! Components take plain data and report user intent through `EventHandler`s;
//! routing stays in the `web` crate. The exceptions are the forms that mutate
//! data (seed form, user actions), which call the server functions themselves and
//! invalidate the request cache.

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthErrorAlert, AuthProvider, AuthState, LoginButton, LogoutButton};

mod query;
pub use query::{use_cached_query, use_query_cache, QueryCacheProvider, QueryState};

mod error_message;
pub use error_message::ErrorMessage;

mod item_table;
pub use item_table::GenericItemTable;

mod item_detail;
pub use item_detail::GenericItemDetail;

mod delete_impact;
pub use delete_impact::DeleteImpactPanel;

mod seed_form;
pub use seed_form::GenericSeedForm;

mod user_table;
pub use user_table::UserTable;

mod user_detail;
pub use user_detail::UserDetail;

mod dashboard;
pub use dashboard::DashboardStats;
