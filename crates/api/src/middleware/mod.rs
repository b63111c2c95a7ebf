//! Caller extractors.
//!
//! - [`auth::AuthUser`] -- any active user holding a valid access token.
//! - [`auth::RequireStaff`] -- an [`auth::AuthUser`] whose row has `is_staff` set.

pub mod auth;
