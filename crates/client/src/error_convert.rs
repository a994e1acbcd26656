use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::decode(err.to_string());
    }
    if let Some(status) = err.status() {
        return AppError::from_response(status.as_u16(), "", &err.to_string());
    }
    if err.is_builder() {
        return AppError::internal(err.to_string());
    }
    AppError::network(err.to_string())
}

/// Convert a serde_json::Error (response body did not match) into an AppError.
pub fn json_to_app_error(err: serde_json::Error) -> AppError {
    AppError::decode(format!("unexpected response body: {err}"))
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_app_error()` on serde_json::Error.
pub trait JsonErrorExt {
    fn into_app_error(self) -> AppError;
}

impl JsonErrorExt for serde_json::Error {
    fn into_app_error(self) -> AppError {
        json_to_app_error(self)
    }
}

/// Trait for validating request DTOs before they are sent.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
