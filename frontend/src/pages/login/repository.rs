use super::utils::LoginOutcome;
use crate::api::{ApiClient, Credentials, LoginError};
use std::rc::Rc;

pub const CONNECTION_ERROR: &str =
    "Tidak dapat terhubung ke server. Periksa koneksi Anda lalu coba lagi.";
pub const UNEXPECTED_RESPONSE: &str = "Terjadi kesalahan tak terduga. Silakan coba lagi.";

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: Credentials) -> LoginOutcome {
        to_outcome(self.client.login(&credentials).await.map(|s| s.redirect))
    }
}

pub fn to_outcome(result: Result<String, LoginError>) -> LoginOutcome {
    match result {
        Ok(redirect) => LoginOutcome::Authenticated { redirect },
        Err(LoginError::Validation { message, errors }) => {
            if errors.is_empty() {
                LoginOutcome::Failed(message)
            } else {
                LoginOutcome::Rejected(errors)
            }
        }
        Err(LoginError::Rejected(err)) => LoginOutcome::Failed(err.error),
        Err(LoginError::Request(err)) => {
            log::warn!("login request failed: {err}");
            LoginOutcome::Failed(CONNECTION_ERROR.to_string())
        }
        Err(LoginError::Decode(err)) => {
            log::warn!("login response could not be decoded: {err}");
            LoginOutcome::Failed(UNEXPECTED_RESPONSE.to_string())
        }
    }
}
