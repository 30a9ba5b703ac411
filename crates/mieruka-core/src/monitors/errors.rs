use crate::errors::MierukaError;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Monitor not found: '{stable_id}'")]
    MonitorNotFound { stable_id: String },

    #[error("App not found: '{id}'")]
    AppNotFound { id: String },

    #[error("Failed to read live monitor list '{path}': {message}")]
    LiveSourceUnreadable { path: String, message: String },

    #[error("Invalid live monitor list '{path}': {message}")]
    LiveSourceInvalid { path: String, message: String },
}

impl MierukaError for MonitorError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::MonitorNotFound { .. } => "MONITOR_NOT_FOUND",
            MonitorError::AppNotFound { .. } => "APP_NOT_FOUND",
            MonitorError::LiveSourceUnreadable { .. } => "LIVE_SOURCE_UNREADABLE",
            MonitorError::LiveSourceInvalid { .. } => "LIVE_SOURCE_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            MonitorError::MonitorNotFound { .. }
                | MonitorError::AppNotFound { .. }
                | MonitorError::LiveSourceInvalid { .. }
        )
    }
}
