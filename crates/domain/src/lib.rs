//! Hospital Domain Models

/// Patient admission, billing and department notifications
pub mod admissions;

/// Registration form submission
pub mod registrations;

/// Domain errors
pub mod errors;

pub use errors::Error;
