use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

/// A product record with every limit populated.
pub fn product_json(id: &str, name: &str) -> Value {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));

    json!({
        "id": id,
        "name": name,
        "description": "General liability for small contractors",
        "productTypeId": 4,
        "carrier": "Acme Mutual",
        "naicsAllowed": "238220,238210",
        "perOccurrence": 500000,
        "aggregate": 1000000,
        "minAnnualRevenue": 10000,
        "maxAnnualRevenue": 2500000,
        "createdAt": created_at
    })
}

pub fn product_types_json() -> Value {
    json!([
        { "productTypeId": 10, "typeName": "Cyber Insurance" },
        { "productTypeId": 11, "typeName": "Marine Insurance" }
    ])
}
