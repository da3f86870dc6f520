use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    // UnknownTheme tests
    #[test]
    fn test_unknown_theme_display() {
        let error = GameError::UnknownTheme("Neon Green".to_string());
        assert_eq!(format!("{}", error), "Unknown theme: Neon Green");
    }

    #[test]
    fn test_unknown_theme_debug() {
        let error = GameError::UnknownTheme("Neon Green".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownTheme"));
        assert!(debug_str.contains("Neon Green"));
    }

    // Io tests
    #[test]
    fn test_io_display() {
        let io_error = IoError::new(ErrorKind::BrokenPipe, "broken pipe");
        let error = GameError::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("broken pipe"));
    }

    #[test]
    fn test_io_from_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "not found");
        let error: GameError = io_error.into();
        match error {
            GameError::Io(_) => (),
            _ => panic!("Expected Io variant"),
        }
    }

    // Result type alias tests
    #[test]
    fn test_result_with_question_mark() {
        fn may_fail() -> Result<()> {
            Err(GameError::UnknownTheme("nope".to_string()))
        }

        fn caller() -> Result<String> {
            may_fail()?;
            Ok("success".to_string())
        }

        let result = caller();
        assert!(result.is_err());
    }

    #[test]
    fn test_error_trait_impl() {
        use std::error::Error;

        let error = GameError::UnknownTheme("x".to_string());
        let _ = &error as &dyn Error;
    }
}
