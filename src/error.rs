use std::fmt;

#[derive(Debug)]
pub enum BiError {
    Status(u16),
    Network(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for BiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiError::Status(status) => {
                write!(f, "Request failed with status {}", status)
            }
            BiError::Network(e) => write!(f, "Network error: {}", e),
            BiError::Timeout => write!(f, "Request timed out"),
            BiError::IoError(e) => write!(f, "IO error: {}", e),
            BiError::JsonError(e) => write!(f, "JSON error: {}", e),
            BiError::YamlError(e) => write!(f, "YAML error: {}", e),
            BiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BiError::Network(e) => Some(e),
            BiError::IoError(e) => Some(e),
            BiError::JsonError(e) => Some(e),
            BiError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BiError {
    fn from(err: reqwest::Error) -> Self {
        BiError::Network(err)
    }
}

impl From<std::io::Error> for BiError {
    fn from(err: std::io::Error) -> Self {
        BiError::IoError(err)
    }
}

impl From<serde_json::Error> for BiError {
    fn from(err: serde_json::Error) -> Self {
        BiError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for BiError {
    fn from(err: serde_yaml::Error) -> Self {
        BiError::YamlError(err)
    }
}

impl From<anyhow::Error> for BiError {
    fn from(err: anyhow::Error) -> Self {
        BiError::Other(err.to_string())
    }
}

impl From<String> for BiError {
    fn from(msg: String) -> Self {
        BiError::Other(msg)
    }
}

impl From<&str> for BiError {
    fn from(msg: &str) -> Self {
        BiError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BiError>;
