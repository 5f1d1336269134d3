//! Business-logic services
//!
//! Services validate input, run authorization checks, and translate
//! storage failures into the `AppError` taxonomy before anything reaches a
//! screen.

pub mod meal_plan;
pub mod profile;
pub mod team;
pub mod user;
pub mod workout;
