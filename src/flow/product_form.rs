//! Create and edit form for carrier products.

use chrono::{SecondsFormat, Utc};
use serde_json::{Number, Value};

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        api::EntityId,
        product::{ProductDraft, ProductDto, ProductType},
        user::UserProfile,
    },
    service::ProductService,
};

pub const DEFAULT_CARRIER: &str = "Default Carrier";
pub const DEFAULT_PER_OCCURRENCE: i64 = 1_000_000;
pub const DEFAULT_AGGREGATE: i64 = 2_000_000;
pub const DEFAULT_MIN_ANNUAL_REVENUE: i64 = 0;
pub const DEFAULT_MAX_ANNUAL_REVENUE: i64 = 5_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub product_type_id: Option<i64>,
    pub naics_allowed: String,
    pub carrier: String,
    editing: Option<ProductDto>,
}

impl ProductForm {
    /// Empty form with the carrier taken from the operator's organization, else their name.
    pub fn for_new(operator: &UserProfile) -> Self {
        let carrier = operator
            .organization_name
            .as_deref()
            .filter(|org| !org.trim().is_empty())
            .or_else(|| Some(operator.name.as_str()).filter(|name| !name.trim().is_empty()))
            .unwrap_or(DEFAULT_CARRIER);

        Self {
            name: String::new(),
            description: String::new(),
            product_type_id: None,
            naics_allowed: String::new(),
            carrier: carrier.to_string(),
            editing: None,
        }
    }

    pub fn for_edit(product: &ProductDto) -> Self {
        let text = |value: Option<&str>| value.unwrap_or_default().to_string();

        Self {
            name: text(product.name()),
            description: text(product.description()),
            product_type_id: product.product_type_id(),
            naics_allowed: text(product.naics_allowed()),
            carrier: text(product.carrier()),
            editing: Some(product.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Build the payload, keeping identifier, coverage limits and creation time of an edited
    /// product as the backend sent them.
    ///
    /// Coverage limits are not editable here. A limit that is missing, `null` or zero falls
    /// back to the fixed default, for edited and new products alike.
    pub fn into_draft(self) -> ProductDraft {
        let existing = self.editing.as_ref();

        ProductDraft {
            id: existing
                .and_then(ProductDto::id)
                .unwrap_or_else(|| EntityId::Text(String::new())),
            name: self.name,
            description: self.description,
            product_type_id: self.product_type_id,
            carrier: self.carrier,
            naics_allowed: self.naics_allowed,
            per_occurrence: limit_or(existing, "perOccurrence", DEFAULT_PER_OCCURRENCE),
            aggregate: limit_or(existing, "aggregate", DEFAULT_AGGREGATE),
            min_annual_revenue: limit_or(existing, "minAnnualRevenue", DEFAULT_MIN_ANNUAL_REVENUE),
            max_annual_revenue: limit_or(existing, "maxAnnualRevenue", DEFAULT_MAX_ANNUAL_REVENUE),
            created_at: existing
                .and_then(ProductDto::created_at_raw)
                .filter(|created_at| !created_at.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    /// Create or update the product depending on how the form was opened.
    ///
    /// An edited record without an identifier cannot be addressed and is created instead.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - Saved product as returned by the backend
    /// - `Err(Error::ValidationError)` - Blank name, nothing was sent
    /// - `Err(Error::ApiError)` - Classified request failure
    pub async fn submit(self, products: &ProductService<'_>) -> Result<ProductDto, Error> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingProductName.into());
        }

        match self.editing.as_ref().and_then(ProductDto::id) {
            Some(id) => products.update_product(&id, &self.into_draft()).await,
            None => products.create_product(&self.into_draft()).await,
        }
    }
}

fn limit_or(product: Option<&ProductDto>, key: &str, default: i64) -> Number {
    match product.and_then(|product| product.record().get(key)) {
        Some(Value::Number(limit)) if limit.as_f64() != Some(0.0) => limit.clone(),
        _ => Number::from(default),
    }
}

/// Product types for the type picker, falling back to the built-in list on any failure.
pub async fn load_product_types(products: &ProductService<'_>) -> Vec<ProductType> {
    match products.get_product_types().await {
        Ok(types) => types,
        Err(e) => {
            tracing::warn!("Using built-in product types: {}", e);
            ProductType::fallback()
        }
    }
}
