//! Logged-in user context
//!
//! The value returned by a successful login. Collaborating screens hold it
//! and pass the username into subsequent calls, instead of reading a global
//! current user off the application object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The authenticated user for the duration of a login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub joined_on: NaiveDate,
}
