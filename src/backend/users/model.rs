/**
 * User Model
 *
 * The shape of a user document in the `users` collection, plus the
 * conversion to the public `UserResponse` view.
 */

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::UserResponse;

/// Store-assigned user identifier
pub type UserId = ObjectId;

/// User document as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Assigned by the store on insert, never changed afterwards
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    /// bcrypt hash string (embeds salt and cost)
    pub password_hash: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

/// A user that has not been inserted yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub admin: bool,
}

impl NewUser {
    /// Attach the identifier the store generated
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            email: self.email,
            admin: self.admin,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id.to_hex(),
            username: user.username.clone(),
            email: user.email.clone(),
            admin: user.admin,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}

/// Parse an identifier taken from a URL path or token subject
///
/// Returns `None` for anything that is not a 24-character hex ObjectId; such
/// an id can never match a stored document.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    ObjectId::parse_str(raw.trim()).ok()
}
