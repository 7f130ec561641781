pub mod error;
pub mod id;
pub mod logger;
pub mod validation;
