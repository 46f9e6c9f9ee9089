use appetite_console::{
    error::{api::ErrorCategory, Error},
    model::{api::EntityId, page::PageQuery, product::ProductDraft},
    service::ProductService,
};
use appetite_test_utils::prelude::*;
use chrono::{TimeZone, Utc};
use serde_json::{json, Number};

use crate::TestContextExt;

fn draft() -> ProductDraft {
    ProductDraft {
        id: EntityId::Text(String::new()),
        name: "Contractors GL".to_string(),
        description: "General liability".to_string(),
        product_type_id: Some(4),
        carrier: "Acme Mutual".to_string(),
        naics_allowed: "238220".to_string(),
        per_occurrence: Number::from(1_000_000),
        aggregate: Number::from(2_000_000),
        min_annual_revenue: Number::from(0),
        max_annual_revenue: Number::from(5_000_000),
        created_at: "2024-05-01T00:00:00Z".to_string(),
    }
}

mod get_products {
    use super::*;

    /// Expect a bare array response and the carrier filter to be supported
    #[tokio::test]
    async fn lists_products_for_carrier() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("GET", "/api/canvas/products")
                    .bearer(TEST_TOKEN)
                    .query("page", "1")
                    .query("pageSize", "25")
                    .query("carrier", "Acme Mutual")
                    .json(json!([
                        product::product_json("p-1", "Contractors GL"),
                        product::product_json("p-2", "Cyber")
                    ])),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let products = ProductService::new(&client, &session)
            .get_products(PageQuery::default(), Some("Acme Mutual"))
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name(), Some("Cyber"));
        assert_eq!(products[0].record().i64("perOccurrence"), Some(500_000));
        test.assert_mocks();

        Ok(())
    }

    /// Expect a timestamp without an offset to be accepted and returned verbatim
    #[tokio::test]
    async fn accepts_timestamp_without_offset() -> Result<(), TestError> {
        let products = json!([
            { "id": 3, "name": "GL", "createdAt": "2024-05-01T10:20:30.1234567" },
            { "id": 4, "name": "Cyber", "createdAt": null, "aggregate": null }
        ]);
        let test = TestBuilder::new()
            .with_json_endpoint("GET", "/api/canvas/products", 200, products.clone(), 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = ProductService::new(&client, &session)
            .get_products(PageQuery::default(), None)
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&result).unwrap(), products);
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap()
            + chrono::Duration::nanoseconds(123_456_700);
        assert_eq!(result[0].created_at(), Some(expected));
        assert_eq!(result[1].created_at(), None);
        test.assert_mocks();

        Ok(())
    }

    /// Expect a 200 body that is not JSON to be a generic failure
    #[tokio::test]
    async fn fails_on_malformed_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_text_endpoint("GET", "/api/canvas/products", 200, "<html>", 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = ProductService::new(&client, &session)
            .get_products(PageQuery::default(), None)
            .await
            .unwrap_err();

        assert_eq!(err.api_category(), Some(ErrorCategory::GenericFailure));
        test.assert_mocks();

        Ok(())
    }
}

mod get_product {
    use super::*;

    /// Expect a single product to be fetched by ID
    #[tokio::test]
    async fn fetches_product() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_authenticated_json_endpoint(
                "GET",
                "/api/canvas/product/p-1",
                TEST_TOKEN,
                200,
                product::product_json("p-1", "Contractors GL"),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let product = ProductService::new(&client, &session)
            .get_product(&EntityId::from("p-1"))
            .await
            .unwrap();

        assert_eq!(product.id(), Some(EntityId::from("p-1")));
        assert_eq!(
            product.created_at(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
        );
        test.assert_mocks();

        Ok(())
    }

    /// Expect 404 to report the product as not found
    #[tokio::test]
    async fn fails_when_missing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_text_endpoint("GET", "/api/canvas/product/missing", 404, "", 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = ProductService::new(&client, &session)
            .get_product(&EntityId::from("missing"))
            .await
            .unwrap_err();

        assert_eq!(err.api_category(), Some(ErrorCategory::NotFound));
        assert_eq!(err.to_string(), "Product not found.");
        test.assert_mocks();

        Ok(())
    }
}

mod save_product {
    use super::*;

    /// Expect the draft to be posted in the backend's field names
    #[tokio::test]
    async fn creates_product() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("POST", "/api/canvas/products")
                    .bearer(TEST_TOKEN)
                    .request_json(json!({
                        "id": "",
                        "name": "Contractors GL",
                        "description": "General liability",
                        "productTypeId": 4,
                        "carrier": "Acme Mutual",
                        "naicsAllowed": "238220",
                        "perOccurrence": 1000000,
                        "aggregate": 2000000,
                        "minAnnualRevenue": 0,
                        "maxAnnualRevenue": 5000000,
                        "createdAt": "2024-05-01T00:00:00Z"
                    }))
                    .status(201)
                    .json(product::product_json("p-3", "Contractors GL")),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let product = ProductService::new(&client, &session)
            .create_product(&draft())
            .await
            .unwrap();

        assert_eq!(product.id(), Some(EntityId::from("p-3")));
        test.assert_mocks();

        Ok(())
    }

    /// Expect a 400 validation message to be surfaced verbatim
    #[tokio::test]
    async fn fails_with_validation_message() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint(
                "PUT",
                "/api/canvas/product/7",
                400,
                json!({ "message": "NAICS code 999999 is not allowed" }),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = ProductService::new(&client, &session)
            .update_product(&EntityId::Number(7), &draft())
            .await
            .unwrap_err();

        assert_eq!(err.api_category(), Some(ErrorCategory::BadRequest));
        assert_eq!(err.to_string(), "NAICS code 999999 is not allowed");
        test.assert_mocks();

        Ok(())
    }

    /// Expect a 400 without a usable message to fall back to the action
    #[tokio::test]
    async fn fails_with_default_message() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint("POST", "/api/canvas/products", 400, json!({}), 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = ProductService::new(&client, &session)
            .create_product(&draft())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to create product");
        test.assert_mocks();

        Ok(())
    }

    /// Expect delete to succeed on an empty body
    #[tokio::test]
    async fn deletes_product() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(Endpoint::new("DELETE", "/api/canvas/product/7").status(204))
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = ProductService::new(&client, &session)
            .delete_product(&EntityId::Number(7))
            .await;

        assert!(result.is_ok());
        test.assert_mocks();

        Ok(())
    }
}

mod get_product_types {
    use super::*;

    /// Expect product types to be read from the database endpoint
    #[tokio::test]
    async fn lists_product_types() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint(
                "GET",
                "/api/database/product-types",
                200,
                product::product_types_json(),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let types = ProductService::new(&client, &session)
            .get_product_types()
            .await
            .unwrap();

        assert_eq!(types.len(), 2);
        assert_eq!(types[0].type_name, "Cyber Insurance");
        test.assert_mocks();

        Ok(())
    }

    /// Expect failures to propagate; the fallback list belongs to the form
    #[tokio::test]
    async fn propagates_failure() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint("GET", "/api/database/product-types", 500, json!({}), 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = ProductService::new(&client, &session)
            .get_product_types()
            .await;

        assert!(matches!(result, Err(Error::ApiError(_))));
        test.assert_mocks();

        Ok(())
    }
}
