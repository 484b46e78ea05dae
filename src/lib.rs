//! Runtime settings bootstrap for the dataset replay viewer.
//!
//! [`config::resolve`] builds the immutable [`Settings`] record once at
//! process entry; the hosting application passes it by reference to every
//! component that needs it.

pub mod config;
pub mod error;
pub mod logger;

pub use config::Settings;
pub use error::AppError;
