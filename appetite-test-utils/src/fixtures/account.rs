use serde_json::{json, Value};

pub fn account_summary_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "failedLoginAttempts": 5
    })
}

pub fn locked_accounts_json(ids: &[i64]) -> Value {
    json!({
        "lockedUsers": ids
            .iter()
            .map(|id| account_summary_json(*id, &format!("locked{}", id)))
            .collect::<Vec<_>>()
    })
}

pub fn inactive_users_json(ids: &[i64]) -> Value {
    json!({
        "inactiveUsers": ids
            .iter()
            .map(|id| account_summary_json(*id, &format!("inactive{}", id)))
            .collect::<Vec<_>>()
    })
}

pub fn activity_entry_json(action: &str) -> Value {
    json!({
        "action": action,
        "reason": "Admin initiated",
        "performedBy": "jane.admin@example.com",
        "timestamp": "2024-06-01T08:00:00Z",
        "ipAddress": "10.0.0.1"
    })
}
