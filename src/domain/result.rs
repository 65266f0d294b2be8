//! Result type alias for Harbour
//!
//! This module provides a convenient Result type alias that uses HarbourError
//! as the error type.

use super::errors::HarbourError;

/// Result type alias for Harbour operations
///
/// This is a convenience type alias that uses `HarbourError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use harbour::domain::result::Result;
/// use harbour::domain::errors::HarbourError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HarbourError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HarbourError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::HarbourError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(HarbourError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
