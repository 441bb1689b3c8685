//! # Data Models
//!
//! This module contains all the data models used throughout the Mergington
//! activities API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod activity;
pub mod signup;
pub mod student;

pub use activity::Entity as Activity;
pub use signup::Entity as Signup;
pub use student::Entity as Student;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "mergington-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
