use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::{Identity, Role};

/// Request DTO for `POST /auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for `POST /auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_role"))
    )]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(feature = "validation")]
fn validate_role(role: &Role) -> Result<(), ValidationError> {
    if *role == Role::Unknown {
        let mut err = ValidationError::new("role");
        err.message = Some("Select a role".into());
        return Err(err);
    }
    Ok(())
}

/// Response returned after successful authentication (login or register).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_request_serializes_role_as_code() {
        let req = RegisterRequest {
            username: "jdoe".into(),
            email: "jdoe@example.org".into(),
            password: "secret123".into(),
            password_confirm: "secret123".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            role: Role::Student,
            phone_number: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], 3);
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn auth_response_decodes_token_and_user() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"token": "abc123", "user": {"id": 4, "username": "mr_smith", "role": 2}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc123");
        assert_eq!(resp.user.role, Role::Teacher);
    }

    #[test]
    fn auth_response_requires_token() {
        assert!(serde_json::from_str::<AuthResponse>(r#"{"user": {"id": 1}}"#).is_err());
    }

    #[cfg(feature = "validation")]
    mod validation {
        use super::*;
        use crate::AppError;
        use pretty_assertions::assert_eq;

        fn valid() -> RegisterRequest {
            RegisterRequest {
                username: "jdoe".into(),
                email: "jdoe@example.org".into(),
                password: "secret123".into(),
                password_confirm: "secret123".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                role: Role::Student,
                phone_number: Some("555-0100".into()),
            }
        }

        #[test]
        fn valid_registration_passes() {
            assert!(valid().validate().is_ok());
        }

        #[test]
        fn mismatched_passwords_flag_confirm_field() {
            let req = RegisterRequest {
                password_confirm: "different".into(),
                ..valid()
            };
            let err: AppError = req.validate().unwrap_err().into();
            assert_eq!(
                err.field_errors.get("password_confirm").map(String::as_str),
                Some("Passwords do not match")
            );
        }

        #[test]
        fn short_and_blank_fields_are_left_to_the_server() {
            let req = RegisterRequest {
                username: "al".into(),
                email: String::new(),
                password: "pw1234".into(),
                password_confirm: "pw1234".into(),
                first_name: String::new(),
                last_name: String::new(),
                ..valid()
            };
            assert!(req.validate().is_ok());
        }

        #[test]
        fn unknown_role_is_rejected() {
            let req = RegisterRequest {
                role: Role::Unknown,
                ..valid()
            };
            let err: AppError = req.validate().unwrap_err().into();
            assert!(err.field_errors.contains_key("role"));
        }

        #[test]
        fn empty_login_fields_are_rejected() {
            let err = LoginRequest::default().validate().unwrap_err();
            let fields = err.field_errors();
            assert!(fields.contains_key("username"));
            assert!(fields.contains_key("password"));
        }
    }
}
