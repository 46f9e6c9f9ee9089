use appetite_console::{
    error::api::ErrorCategory,
    service::AuthService,
    session::{MemoryStorage, Session, SessionStorage},
};
use appetite_test_utils::prelude::*;
use serde_json::json;

use crate::TestContextExt;

/// Expect credentials to be posted without a token and a session to be returned
#[tokio::test]
async fn logs_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::new("POST", "/api/canvas/login")
                .anonymous()
                .request_json(json!({ "Username": "jane", "Password": TEST_PASSWORD }))
                .json(user::login_response_json(TEST_TOKEN)),
        )
        .build()
        .await?;
    let client = test.client();

    let session = AuthService::new(&client)
        .login("jane", TEST_PASSWORD)
        .await
        .unwrap();

    assert_eq!(session.token(), Some(TEST_TOKEN));
    let user = session.user().unwrap();
    assert_eq!(user.primary_role(), "admin");
    assert_eq!(user.organization_name.as_deref(), Some("Acme Mutual"));
    test.assert_mocks();

    Ok(())
}

/// Expect rejected credentials to be classified as unauthorized
#[tokio::test]
async fn fails_with_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/api/canvas/login",
            401,
            json!({ "message": "Invalid credentials" }),
            1,
        )
        .build()
        .await?;
    let client = test.client();

    let err = AuthService::new(&client)
        .login("jane", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.api_category(), Some(ErrorCategory::Unauthorized));
    test.assert_mocks();

    Ok(())
}

/// Expect the session to be persisted on login and removed on logout
#[tokio::test]
async fn stores_and_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/api/canvas/login",
            200,
            user::login_response_json(TEST_TOKEN),
            1,
        )
        .build()
        .await?;
    let client = test.client();
    let storage = MemoryStorage::new();
    let auth = AuthService::new(&client);

    let session = auth
        .login_and_store(&storage, "jane", TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(Session::load(&storage).unwrap(), session);

    auth.logout(&storage).await.unwrap();
    assert_eq!(storage.get("token").unwrap(), None);
    assert!(!Session::load(&storage).unwrap().is_authenticated());
    test.assert_mocks();

    Ok(())
}
