use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account as returned by the API.
///
/// The stored password hash is never part of this type; the handlers that
/// need it query the column directly.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("password").is_none());
    }
}
