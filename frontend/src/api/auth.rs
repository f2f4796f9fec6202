use reqwest::StatusCode;

use super::{
    client::ApiClient,
    types::{
        ApiError, Credentials, LoginError, LoginResponse, LoginSuccess, SharedUser,
        ValidationErrorBody,
    },
};

impl ApiClient {
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess, LoginError> {
        let config = self.resolved_config().await;
        let request = self
            .http_client()
            .post(Self::endpoint(&config, "login"))
            .json(credentials);
        let response = Self::with_session(request)
            .send()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;
        interpret_login_response(status, &body, &config.home_path)
    }

    /// `Ok(None)` when no session is active.
    pub async fn current_user(&self) -> Result<Option<SharedUser>, ApiError> {
        let config = self.resolved_config().await;
        let request = self.http_client().get(Self::endpoint(&config, "user"));
        let response = Self::with_session(request)
            .send()
            .await
            .map_err(|e| ApiError::unknown(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status.as_u16() == 419 {
            return Ok(None);
        }
        if status.is_success() {
            return response
                .json::<SharedUser>()
                .await
                .map(Some)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        Err(ApiError::with_status(
            status.as_u16(),
            format!("User lookup failed ({})", status),
        ))
    }
}

/// Maps an auth endpoint response onto the login outcome.
///
/// `2xx` is success with an optional `redirect`; `422` carries field errors;
/// anything else is a form-level rejection.
pub fn interpret_login_response(
    status: StatusCode,
    body: &str,
    home_path: &str,
) -> Result<LoginSuccess, LoginError> {
    if status.is_success() {
        let redirect = serde_json::from_str::<LoginResponse>(body)
            .ok()
            .and_then(|r| r.redirect)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| home_path.to_string());
        return Ok(LoginSuccess { redirect });
    }

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let parsed: ValidationErrorBody =
            serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
        return Err(LoginError::Validation {
            message: parsed.message,
            errors: parsed.errors,
        });
    }

    let mut error = serde_json::from_str::<ApiError>(body)
        .unwrap_or_else(|_| ApiError::with_status(status.as_u16(), format!("Login failed ({})", status)));
    if error.code.is_empty() {
        error.code = format!("HTTP_{}", status.as_u16());
    }
    Err(LoginError::Rejected(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_without_body_redirects_home() {
        let ok = interpret_login_response(StatusCode::NO_CONTENT, "", "/dashboard").unwrap();
        assert_eq!(ok.redirect, "/dashboard");

        let ok = interpret_login_response(StatusCode::OK, r#"{"two_factor":false}"#, "/dashboard")
            .unwrap();
        assert_eq!(ok.redirect, "/dashboard");
    }

    #[test]
    fn success_honours_server_redirect() {
        let ok =
            interpret_login_response(StatusCode::OK, r#"{"redirect":"/guru/jadwal"}"#, "/dashboard")
                .unwrap();
        assert_eq!(ok.redirect, "/guru/jadwal");
    }

    #[test]
    fn unprocessable_entity_becomes_field_errors() {
        let body = r#"{"message":"invalid","errors":{"email":["invalid"]}}"#;
        let err =
            interpret_login_response(StatusCode::UNPROCESSABLE_ENTITY, body, "/dashboard").unwrap_err();
        let errors = match err {
            LoginError::Validation { errors, .. } => errors,
            other => panic!("expected field errors, got {other:?}"),
        };
        assert_eq!(errors.get("email"), Some("invalid"));
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn malformed_validation_body_is_decode_error() {
        let err = interpret_login_response(StatusCode::UNPROCESSABLE_ENTITY, "<html>", "/")
            .unwrap_err();
        assert!(matches!(err, LoginError::Decode(_)));
    }

    #[test]
    fn other_statuses_are_rejections_with_codes() {
        let err = interpret_login_response(
            StatusCode::from_u16(419).unwrap(),
            r#"{"message":"CSRF token mismatch."}"#,
            "/",
        )
        .unwrap_err();
        match err {
            LoginError::Rejected(api) => {
                assert_eq!(api.error, "CSRF token mismatch.");
                assert_eq!(api.code, "HTTP_419");
            }
            other => panic!("unexpected {other:?}"),
        }

        let err =
            interpret_login_response(StatusCode::INTERNAL_SERVER_ERROR, "oops", "/").unwrap_err();
        assert!(matches!(err, LoginError::Rejected(ref api) if api.code == "HTTP_500"));
    }
}
