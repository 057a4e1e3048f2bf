/// Application error carrying the process exit code.
///
/// Exit codes:
/// - `2`: bad input (card file, CLI values, file I/O)
/// - `3`: nothing to compute (empty bag)
/// - `4`: internal failure (debug bundle, serialization)
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Invalid configuration or user input.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_exit_codes() {
        assert_eq!(AppError::input("bad").exit_code(), 2);
        assert_eq!(AppError::internal("oops").exit_code(), 4);
        assert_eq!(AppError::new(3, "empty").to_string(), "empty");
    }
}
