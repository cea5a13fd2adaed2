/// Failure classes surfaced by the application.
///
/// The kind decides the process exit code and lets callers (and tests) tell a
/// transport failure apart from a data problem. Unknown prefecture names are
/// deliberately not represented here: they are tolerated during parsing and
/// folded into a sentinel value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A local file could not be read, or stdout could not be written.
    Io,
    /// The upstream request failed, or returned a non-success status.
    Network,
    /// A CSV row did not have the expected field count, or could not be read.
    MalformedRow,
    /// A numeric CSV field did not parse as a base-10 integer.
    InvalidNumber,
    /// Year/month/day fields did not form a real calendar date.
    InvalidDate,
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Io => 2,
            ErrorKind::MalformedRow | ErrorKind::InvalidNumber | ErrorKind::InvalidDate => 3,
            ErrorKind::Network => 4,
        }
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
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_data_errors_together() {
        assert_eq!(AppError::new(ErrorKind::Io, "x").exit_code(), 2);
        assert_eq!(AppError::new(ErrorKind::MalformedRow, "x").exit_code(), 3);
        assert_eq!(AppError::new(ErrorKind::InvalidNumber, "x").exit_code(), 3);
        assert_eq!(AppError::new(ErrorKind::InvalidDate, "x").exit_code(), 3);
        assert_eq!(AppError::new(ErrorKind::Network, "x").exit_code(), 4);
    }

    #[test]
    fn display_shows_the_message_only() {
        let err = AppError::new(ErrorKind::Network, "request failed");
        assert_eq!(err.to_string(), "request failed");
    }
}
