use std::fmt;

/// Error classification, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A manifest could not be represented as YAML.
    Encoding,
    /// A sink accepted fewer bytes than were handed to it.
    ShortWrite,
    /// The tar/gzip layer rejected a header or payload.
    Framing,
    /// Caller-supplied input cannot be packaged or parsed.
    Input,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Errors produced while building or reading archives.
///
/// Every error is fatal to the build that raised it. Bytes already written
/// to the destination sink are unusable and must be discarded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode manifest: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("failed to decode deployment source: {0}")]
    Decode(#[source] serde_yaml::Error),

    #[error("short write: expected {expected} bytes, wrote {written}")]
    ShortWrite { expected: usize, written: usize },

    #[error("archive entry {path}: {source}")]
    Archive {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("archive stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid job '{name}': {reason}")]
    InvalidJob { name: String, reason: &'static str },
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Encode(_) => ErrorClass::Encoding,
            Error::ShortWrite { .. } => ErrorClass::ShortWrite,
            Error::Archive { .. } | Error::Io(_) => ErrorClass::Framing,
            Error::Decode(_) | Error::InvalidJob { .. } => ErrorClass::Input,
        }
    }

    pub(crate) fn archive(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::Archive {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_variants() {
        let short = Error::ShortWrite {
            expected: 26,
            written: 13,
        };
        assert_eq!(short.class(), ErrorClass::ShortWrite);
        assert_eq!(short.to_string(), "short write: expected 26 bytes, wrote 13");

        let framing = Error::archive("./monit", std::io::Error::other("boom"));
        assert_eq!(framing.class(), ErrorClass::Framing);
        assert!(framing.to_string().contains("./monit"));

        let input = Error::InvalidJob {
            name: String::new(),
            reason: "job name is empty",
        };
        assert_eq!(input.class(), ErrorClass::Input);
    }
}
