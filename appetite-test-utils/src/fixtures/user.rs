use serde_json::{json, Value};

/// A user record as returned by the user listing endpoint.
///
/// # Arguments
/// - `id` - Numeric user ID
/// - `name` - Display name, the email is derived from it
pub fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "role": "carrier",
        "organizationName": "Acme Mutual",
        "isActive": true,
        "isLocked": false,
        "createdAt": "2024-03-01T09:30:00Z"
    })
}

/// Operator profile as stored alongside the session token.
pub fn profile_json(roles: Value, organization_name: Option<&str>) -> Value {
    let mut profile = json!({
        "name": "Jane Admin",
        "email": "jane.admin@example.com",
        "roles": roles
    });

    if let Some(organization_name) = organization_name {
        profile["organizationName"] = json!(organization_name);
    }

    profile
}

/// Successful login response carrying `token` and an admin profile.
pub fn login_response_json(token: &str) -> Value {
    json!({
        "token": token,
        "user": profile_json(json!(["admin"]), Some("Acme Mutual"))
    })
}
