//! Data access repositories
//!
//! Each repository owns the SQL for one record kind. Every operation is a
//! single parameterized statement, except the paired team-creation and
//! team-deletion writes, which run in one transaction.

pub mod team;
pub mod user;
pub mod workout;

pub use team::TeamRepository;
pub use user::UserRepository;
pub use workout::WorkoutRepository;
