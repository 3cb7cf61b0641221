// Models Module
// User identity and contact data types

pub mod user;

// Re-export key types
pub use user::User;
