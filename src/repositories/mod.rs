//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access.

pub mod activity;
pub mod signup;
pub mod student;

pub use activity::{ActivityRepository, CreateActivityRequest};
pub use signup::SignupRepository;
pub use student::StudentRepository;
