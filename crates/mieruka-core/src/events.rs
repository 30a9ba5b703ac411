use tracing::{error, info, warn};

use crate::errors::MierukaError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// User errors (bad input, unknown ids) log as warnings; everything else as errors.
pub fn log_app_error<E: MierukaError + ?Sized>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
