//! Result type alias
//!
//! This module provides a convenient Result type alias that uses AtenaError
//! as the error type.

use super::errors::AtenaError;

/// Result type alias for converter operations
///
/// # Examples
///
/// ```
/// use atena::domain::result::Result;
/// use atena::domain::errors::AtenaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AtenaError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AtenaError>;
