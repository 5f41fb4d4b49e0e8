use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// User information returned alongside the token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_parses_backend_shape() {
        let json = r#"{"token":"t1","user":{"id":7,"name":"Ali","email":"a@x.com"}}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(auth.token, "t1");
        assert_eq!(auth.user.id, 7);
        assert_eq!(auth.user.name, "Ali");
    }

    #[test]
    fn test_register_request_fields() {
        let request = RegisterRequest {
            name: "Ali".to_string(),
            email: "a@x.com".to_string(),
            password: "password1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["name"], "Ali");
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["password"], "password1");
    }
}
