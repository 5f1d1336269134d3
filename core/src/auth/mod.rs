//! Credential hashing and the logged-in session value

pub mod password;
pub mod session;

pub use password::PasswordService;
pub use session::Session;
