//! Error codes shared by every setup error type.

pub mod error_code;

pub use error_code::ErrorCode;
