use std::error::Error;

use mieruka_core::errors::MierukaError;

#[derive(Debug)]
pub enum ConfigError {
    ProfileNotFound { path: String },
    ProfileParseError { message: String },
    InvalidProfile { message: String },
    SerializeError { message: String },
    IoError { source: std::io::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ProfileNotFound { path } => {
                write!(f, "Profile not found at '{}'", path)
            }
            ConfigError::ProfileParseError { message } => {
                write!(f, "Failed to parse profile: {}", message)
            }
            ConfigError::InvalidProfile { message } => {
                write!(f, "Invalid profile: {}", message)
            }
            ConfigError::SerializeError { message } => {
                write!(f, "Failed to serialize profile: {}", message)
            }
            ConfigError::IoError { source } => {
                write!(f, "IO error accessing profile: {}", source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IoError { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(source: std::io::Error) -> Self {
        ConfigError::IoError { source }
    }
}

impl MierukaError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            ConfigError::ProfileParseError { .. } => "PROFILE_PARSE_ERROR",
            ConfigError::InvalidProfile { .. } => "INVALID_PROFILE",
            ConfigError::SerializeError { .. } => "PROFILE_SERIALIZE_ERROR",
            ConfigError::IoError { .. } => "PROFILE_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ProfileNotFound { .. }
                | ConfigError::ProfileParseError { .. }
                | ConfigError::InvalidProfile { .. }
        )
    }
}
