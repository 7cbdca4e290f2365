use serde_json::{json, Value};

/// A public project as listed by the backend
pub fn mock_project(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "skills_required": ["rust"],
        "duration": "4 weeks",
        "tags": ["open-source"],
        "visibility": "public",
    })
}

/// A list of projects with IDs `p1..=pN`
pub fn mock_projects(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| mock_project(&format!("p{}", i), &format!("Project {}", i)))
        .collect()
}
