//! User entity <-> model mapper

use atrium_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity; the password hash stays behind
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            oauth_provider: model.oauth_provider,
            oauth_id: model.oauth_id,
            avatar: model.avatar,
            verified_at: model.verified_at,
            pending_email: model.pending_email,
            verification_token: model.verification_token,
            verification_requested_at: model.verification_requested_at,
            reset_token: model.reset_token,
            reset_requested_at: model.reset_requested_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
