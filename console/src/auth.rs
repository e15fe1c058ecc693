//! Login flow.
//!
//! A successful login stores exactly the returned `access_token` and points
//! the caller at the jobs view. Any failure leaves the session untouched and
//! yields a fixed user-facing message; the caller stays on the login view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::LoginRequest;

use crate::api::{ApiClient, RequestError};
use crate::nav::Route;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed, check username and password";
pub const DEFAULT_USERNAME: &str = "admin";

/// Login was rejected or could not complete.
#[derive(Debug, thiserror::Error)]
#[error("Login failed, check username and password")]
pub struct LoginError {
    #[source]
    cause: RequestError,
}

impl LoginError {
    /// Underlying request failure, for logs.
    #[must_use]
    pub fn cause(&self) -> &RequestError {
        &self.cause
    }
}

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// [`LoginError`] for a rejected pair, an unreachable server, or a response
/// without a usable token.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<Route, LoginError> {
    let credentials = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let token = match api.post_login(&credentials).await {
        Ok(response) if !response.access_token.trim().is_empty() => response.access_token,
        Ok(_) => {
            let cause = RequestError::Decode("empty access_token".to_owned());
            tracing::warn!(error = %cause, "login response unusable");
            return Err(LoginError { cause });
        }
        Err(cause) => {
            tracing::warn!(error = %cause, status = ?cause.status(), "login rejected");
            return Err(LoginError { cause });
        }
    };
    api.session().set(&token);
    tracing::info!(username, "logged in");
    Ok(Route::Jobs)
}
