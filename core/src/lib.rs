//! FitTrack Core
//!
//! The data-access layer of the FitTrack application: schema ownership,
//! credential hashing, and CRUD services across users, body measurements,
//! workouts, teams, and memberships, plus the meal-plan and UI-preference
//! helpers the screens consume.
//!
//! ## Architecture
//!
//! - Services: business rules, validation, and error translation
//! - Repositories: parameterized SQL per record kind
//! - Database: SQLite via SQLx with a single shared pool

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod prefs;
pub mod repositories;
pub mod services;
pub mod state;
