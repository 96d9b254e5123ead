//! User-related DTOs.

use quill_core::validation::rules::not_blank;
use quill_core::NewUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser::new(request.name)
    }
}

/// Request to overwrite a user's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_valid() {
        let request = CreateUserRequest {
            name: "alice".to_string(),
        };
        assert!(request.validate().is_ok());
        assert_eq!(NewUser::from(request).name, "alice");
    }

    #[test]
    fn test_create_user_request_blank_name() {
        let request = CreateUserRequest {
            name: "   ".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_user_request_requires_name() {
        let missing: Result<UpdateUserRequest, _> = serde_json::from_str("{}");
        assert!(missing.is_err());

        let blank = UpdateUserRequest {
            name: String::new(),
        };
        assert!(blank.validate().is_err());
    }
}
