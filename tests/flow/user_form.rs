use appetite_console::{flow::UserForm, model::user::UserProfile, service::UserService};
use appetite_test_utils::prelude::*;
use serde_json::json;

use crate::TestContextExt;

/// Expect a carrier admin's organization to be submitted with the new user
#[tokio::test]
async fn submits_prefilled_organization() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::new("POST", "/api/canvas/create-user")
                .request_json(json!({
                    "name": "John Roe",
                    "email": "john.roe@example.com",
                    "role": "user",
                    "organizationName": "Acme Mutual"
                }))
                .json(user::user_json(11, "John Roe")),
        )
        .build()
        .await?;
    let (client, session) = (test.client(), test.session());
    let operator: UserProfile =
        serde_json::from_value(user::profile_json(json!("carrier,admin"), Some("Acme Mutual")))
            .unwrap();

    let mut form = UserForm::for_operator(Some(&operator));
    form.user.name = "John Roe".to_string();
    form.user.email = "john.roe@example.com".to_string();

    let created = form
        .submit(&UserService::new(&client, &session))
        .await
        .unwrap();

    assert_eq!(created.name(), Some("John Roe"));
    test.assert_mocks();

    Ok(())
}
