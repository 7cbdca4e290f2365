use serde_json::{json, Value};

/// An application request as seen by the project owner
pub fn mock_application(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "message": "I would love to collaborate!",
        "portfolio_url": format!("https://github.com/applicant-{}", id),
        "status": status,
    })
}
