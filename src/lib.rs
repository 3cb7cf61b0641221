// User Model Library
// Core data model for user identity and contact data

pub mod models;

// Re-export commonly used types
pub use models::User;
