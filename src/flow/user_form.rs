use crate::{
    error::Error,
    model::user::{NewUserDto, UserDto, UserProfile, CARRIER_ROLE},
    service::UserService,
};

/// Form for creating a console user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub user: NewUserDto,
}

impl UserForm {
    /// Carrier admins can only create users in their own organization, so it is pre-filled.
    pub fn for_operator(operator: Option<&UserProfile>) -> Self {
        let mut user = NewUserDto::default();

        if let Some(operator) = operator {
            if operator.primary_role() == CARRIER_ROLE {
                if let Some(org) = &operator.organization_name {
                    user.organization_name = org.clone();
                }
            }
        }

        Self { user }
    }

    pub async fn submit(&self, users: &UserService<'_>) -> Result<UserDto, Error> {
        users.create_user(&self.user).await
    }
}
