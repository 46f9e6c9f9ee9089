use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::model::api::{EntityId, Record};

/// A product record kept exactly as the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductDto(Record);

impl ProductDto {
    pub fn id(&self) -> Option<EntityId> {
        self.0.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.0.str("description")
    }

    pub fn product_type_id(&self) -> Option<i64> {
        self.0.i64("productTypeId")
    }

    pub fn carrier(&self) -> Option<&str> {
        self.0.str("carrier")
    }

    pub fn naics_allowed(&self) -> Option<&str> {
        self.0.str("naicsAllowed")
    }

    /// Raw `createdAt` string, in whatever format the backend used.
    pub fn created_at_raw(&self) -> Option<&str> {
        self.0.str("createdAt")
    }

    /// `createdAt` as a UTC instant; timestamps without an offset are taken as UTC.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at_raw()?;

        DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|at| at.and_utc())
            })
            .ok()
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

/// Product payload sent on create and update.
///
/// `id` is the empty string for a product that does not exist yet, otherwise the
/// identifier exactly as the backend sent it. Coverage limits and `createdAt` are forwarded
/// in the form they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub product_type_id: Option<i64>,
    pub carrier: String,
    pub naics_allowed: String,
    pub per_occurrence: Number,
    pub aggregate: Number,
    pub min_annual_revenue: Number,
    pub max_annual_revenue: Number,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub product_type_id: i64,
    pub type_name: String,
}

impl ProductType {
    /// Product types offered when the product-type endpoint cannot be reached.
    pub fn fallback() -> Vec<ProductType> {
        [
            (1, "Auto Insurance"),
            (2, "Health Insurance"),
            (3, "Life Insurance"),
            (4, "Property Insurance"),
            (5, "Travel Insurance"),
            (6, "Home Insurance"),
        ]
        .into_iter()
        .map(|(product_type_id, type_name)| ProductType {
            product_type_id,
            type_name: type_name.to_string(),
        })
        .collect()
    }
}
