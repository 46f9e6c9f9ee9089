use crate::{
    client::{ApiClient, ApiRequest},
    error::{validation::ValidationError, Error},
    model::{
        api::EntityId,
        page::{Listing, PageQuery},
        user::{NewUserDto, UserDto},
    },
    session::Session,
};

const USERS_PATH: &str = "/api/canvas/carriers";
const USER_PATH: &str = "/api/canvas/carrier";
const CREATE_USER_PATH: &str = "/api/canvas/create-user";
const QUICK_USER_PATH: &str = "/api/canvas/users";
const RESOURCE: &str = "User";

/// Service for listing and editing console users.
pub struct UserService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> UserService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Retrieves one page of users, optionally restricted to a role.
    ///
    /// # Arguments
    /// - `page` - Page number and size sent as `page` / `pageSize`
    /// - `role` - Only list users holding this role
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - The `data` array of the response, records unmodified
    /// - `Err(Error::ApiError)` - Classified request failure
    pub async fn get_users(
        &self,
        page: PageQuery,
        role: Option<&str>,
    ) -> Result<Vec<UserDto>, Error> {
        let mut request = ApiRequest::get(USERS_PATH)
            .page(page)
            .resource(RESOURCE)
            .action("fetch users");
        if let Some(role) = role {
            request = request.query("role", role);
        }

        let users: Listing<UserDto> = self.client.send(request, Some(self.session)).await?;

        Ok(users.into_items())
    }

    /// Creates a user; name and email are required before anything is sent.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user as returned by the backend
    /// - `Err(Error::ValidationError)` - Name or email blank, no request was issued
    /// - `Err(Error::ApiError)` - Classified request failure
    pub async fn create_user(&self, user: &NewUserDto) -> Result<UserDto, Error> {
        if user.name.trim().is_empty() || user.email.trim().is_empty() {
            return Err(ValidationError::MissingNameOrEmail.into());
        }

        let request = ApiRequest::post(CREATE_USER_PATH)
            .json(user)?
            .resource(RESOURCE)
            .action("create user");

        Ok(self.client.send(request, Some(self.session)).await?)
    }

    pub async fn update_user(&self, user_id: &EntityId, user: &UserDto) -> Result<UserDto, Error> {
        let request = ApiRequest::put(format!("{}/{}", USER_PATH, user_id))
            .json(user)?
            .resource(RESOURCE)
            .action("update user");

        Ok(self.client.send(request, Some(self.session)).await?)
    }

    pub async fn delete_user(&self, user_id: &EntityId) -> Result<(), Error> {
        let request = ApiRequest::delete(format!("{}/{}", USER_PATH, user_id))
            .resource(RESOURCE)
            .action("delete user");

        Ok(self.client.send_empty(request, Some(self.session)).await?)
    }

    /// Creates a user through the quick-create endpoint, which skips organisation setup.
    pub async fn create_quick_user(&self, user: &NewUserDto) -> Result<UserDto, Error> {
        if user.name.trim().is_empty() || user.email.trim().is_empty() {
            return Err(ValidationError::MissingNameOrEmail.into());
        }

        let request = ApiRequest::post(QUICK_USER_PATH)
            .json(user)?
            .resource(RESOURCE)
            .action("create user");

        Ok(self.client.send(request, Some(self.session)).await?)
    }
}
