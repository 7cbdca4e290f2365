use dioxus::prelude::*;
use dioxus_logger::tracing;

/// Shows a blocking `alert` with `message`
pub fn prompt(message: &str) {
    let message = match serde_json::to_string(message) {
        Ok(message) => message,
        Err(err) => {
            tracing::error!("Failed to encode prompt message: {}", err);
            return;
        }
    };

    let _ = document::eval(&format!("alert({});", message));
}
