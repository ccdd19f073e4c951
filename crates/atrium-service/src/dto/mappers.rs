//! Entity to DTO mappers

use atrium_core::entities::User;

use super::responses::CurrentUserResponse;

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url(),
            verified: user.is_verified(),
            pending_email: user
                .pending_email
                .clone()
                .filter(|pending| pending != &user.email),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
