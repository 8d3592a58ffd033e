use std::io;

#[derive(Debug)]
pub enum CipherError {
    Io(io::Error),
    /// Character reached digraph substitution without being in the table
    Lookup(char),
    Parse(String),
    InvalidPath(String),
    FileExists(String),
    Lock(String),
}

impl From<io::Error> for CipherError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::fmt::Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Lookup(c) => write!(f, "Lookup failed: {:?} is not in the cipher table", c),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            Self::FileExists(msg) => write!(f, "File exists: {}", msg),
            Self::Lock(msg) => write!(f, "Lock error: {}", msg),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lookup() {
        let err = CipherError::Lookup(',');
        assert_eq!(
            err.to_string(),
            "Lookup failed: ',' is not in the cipher table"
        );
    }

    #[test]
    fn test_io_source_is_preserved() {
        use std::error::Error;

        let err = CipherError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(CipherError::Lookup('J').source().is_none());
    }
}
