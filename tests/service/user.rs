use appetite_console::{
    error::{api::ApiError, validation::ValidationError, Error},
    model::{api::EntityId, page::PageQuery, user::NewUserDto},
    service::UserService,
};
use appetite_test_utils::prelude::*;
use serde_json::json;

use crate::TestContextExt;

mod get_users {
    use super::*;

    /// Expect the default page query and the exact `data` array to be returned
    #[tokio::test]
    async fn returns_data_array_of_first_page() -> Result<(), TestError> {
        let users = vec![user::user_json(1, "Jane Doe"), user::user_json(2, "John Roe")];
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("GET", "/api/canvas/carriers")
                    .bearer(TEST_TOKEN)
                    .query("page", "1")
                    .query("pageSize", "25")
                    .json(json!({ "data": users, "totalCount": 2, "page": 1, "pageSize": 25 })),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .get_users(PageQuery::default(), None)
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(serde_json::to_value(&result).unwrap(), json!(users));
        test.assert_mocks();

        Ok(())
    }

    /// Expect null fields to be returned as sent
    #[tokio::test]
    async fn keeps_null_fields() -> Result<(), TestError> {
        let users = json!([{
            "id": 1,
            "name": "Jane",
            "email": "j@x.io",
            "role": null,
            "organizationName": null
        }]);
        let test = TestBuilder::new()
            .with_json_endpoint(
                "GET",
                "/api/canvas/carriers",
                200,
                json!({ "data": users }),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .get_users(PageQuery::default(), None)
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&result).unwrap(), users);
        assert_eq!(result[0].role(), None);
        test.assert_mocks();

        Ok(())
    }

    /// Expect a record missing its email to be listed rather than failing the page
    #[tokio::test]
    async fn lists_partial_records() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint(
                "GET",
                "/api/canvas/carriers",
                200,
                json!({ "data": [{ "id": 1, "name": "Jane" }, user::user_json(2, "John Roe")] }),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .get_users(PageQuery::default(), None)
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name(), Some("Jane"));
        assert_eq!(result[0].email(), None);
        assert_eq!(
            serde_json::to_value(&result[0]).unwrap(),
            json!({ "id": 1, "name": "Jane" })
        );
        test.assert_mocks();

        Ok(())
    }

    /// Expect the role filter to be sent as a query parameter
    #[tokio::test]
    async fn filters_by_role() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("GET", "/api/canvas/carriers")
                    .query("page", "2")
                    .query("pageSize", "10")
                    .query("role", "carrier")
                    .json(json!([user::user_json(3, "Carrier Admin")])),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .get_users(PageQuery::new(2, 10), Some("carrier"))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), Some(EntityId::Number(3)));
        test.assert_mocks();

        Ok(())
    }

    /// Expect 403 to surface as the fixed access denied message
    #[tokio::test]
    async fn fails_with_access_denied() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint(
                "GET",
                "/api/canvas/carriers",
                403,
                json!({ "message": "role missing" }),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .get_users(PageQuery::default(), None)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::ApiError(ApiError::Forbidden)));
        assert_eq!(err.to_string(), "Access denied.");
        test.assert_mocks();

        Ok(())
    }

    /// Expect 401 to ask the operator to log in again
    #[tokio::test]
    async fn fails_with_login_again() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint("GET", "/api/canvas/carriers", 401, json!({}), 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = UserService::new(&client, &session)
            .get_users(PageQuery::default(), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please login again.");
        test.assert_mocks();

        Ok(())
    }
}

mod create_user {
    use super::*;

    fn new_user() -> NewUserDto {
        NewUserDto {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            organization_name: "Acme Mutual".to_string(),
            ..Default::default()
        }
    }

    /// Expect the user to be posted with the default role
    #[tokio::test]
    async fn posts_new_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("POST", "/api/canvas/create-user")
                    .bearer(TEST_TOKEN)
                    .request_json(json!({
                        "name": "Jane Doe",
                        "email": "jane.doe@example.com",
                        "role": "user",
                        "organizationName": "Acme Mutual"
                    }))
                    .status(201)
                    .json(user::user_json(9, "Jane Doe")),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let created = UserService::new(&client, &session)
            .create_user(&new_user())
            .await
            .unwrap();

        assert_eq!(created.id(), Some(EntityId::Number(9)));
        test.assert_mocks();

        Ok(())
    }

    /// Expect a blank email to be rejected without contacting the backend
    #[tokio::test]
    async fn rejects_missing_email_locally() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint("POST", "/api/canvas/create-user", 201, json!({}), 0)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());
        let user = NewUserDto {
            email: "  ".to_string(),
            ..new_user()
        };

        let err = UserService::new(&client, &session)
            .create_user(&user)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::ValidationError(ValidationError::MissingNameOrEmail)
        ));
        test.assert_mocks();

        Ok(())
    }

    /// Expect the quick-create endpoint to be used for quick users
    #[tokio::test]
    async fn posts_quick_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_authenticated_json_endpoint(
                "POST",
                "/api/canvas/users",
                TEST_TOKEN,
                200,
                user::user_json(10, "Jane Doe"),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let created = UserService::new(&client, &session)
            .create_quick_user(&new_user())
            .await
            .unwrap();

        assert_eq!(created.name(), Some("Jane Doe"));
        test.assert_mocks();

        Ok(())
    }
}

mod update_user {
    use super::*;

    /// Expect unknown fields of the user record to be sent back unchanged
    #[tokio::test]
    async fn puts_record_with_unknown_fields() -> Result<(), TestError> {
        let record = user::user_json(4, "Jane Doe");
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("PUT", "/api/canvas/carrier/4")
                    .request_json(record.clone())
                    .json(record.clone()),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());
        let user = serde_json::from_value(record).unwrap();

        let updated = UserService::new(&client, &session)
            .update_user(&EntityId::Number(4), &user)
            .await
            .unwrap();

        assert_eq!(updated, user);
        test.assert_mocks();

        Ok(())
    }

    /// Expect 404 to name the resource
    #[tokio::test]
    async fn fails_when_user_missing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint("PUT", "/api/canvas/carrier/404", 404, json!({}), 1)
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());
        let user = serde_json::from_value(user::user_json(404, "Ghost")).unwrap();

        let err = UserService::new(&client, &session)
            .update_user(&EntityId::Number(404), &user)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User not found.");
        test.assert_mocks();

        Ok(())
    }
}

mod delete_user {
    use super::*;

    /// Expect an empty success body to be accepted
    #[tokio::test]
    async fn deletes_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_endpoint(
                Endpoint::new("DELETE", "/api/canvas/carrier/abc-1")
                    .bearer(TEST_TOKEN)
                    .status(204),
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let result = UserService::new(&client, &session)
            .delete_user(&EntityId::from("abc-1"))
            .await;

        assert!(result.is_ok());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a 500 to carry the server's message
    #[tokio::test]
    async fn fails_with_server_message() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_json_endpoint(
                "DELETE",
                "/api/canvas/carrier/5",
                500,
                json!({ "message": "User owns products" }),
                1,
            )
            .build()
            .await?;
        let (client, session) = (test.client(), test.session());

        let err = UserService::new(&client, &session)
            .delete_user(&EntityId::Number(5))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User owns products");
        test.assert_mocks();

        Ok(())
    }
}
