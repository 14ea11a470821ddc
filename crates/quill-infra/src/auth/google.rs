//! Google OAuth2 client (authorization-code flow).
//!
//! The browser is sent to Google's consent page with the `profile` scope;
//! the callback code is exchanged for an access token which in turn fetches
//! the userinfo document. Only the stable subject id (`sub`) is kept.

use async_trait::async_trait;
use serde::Deserialize;

use quill_core::ports::{AuthError, IdentityProvider};

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Client credentials and callback location, from configuration.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Google identity-provider adapter.
pub struct GoogleOAuth {
    config: GoogleConfig,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Userinfo {
    sub: String,
}

impl GoogleOAuth {
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "token exchange failed with status {}",
                response.status()
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))
    }

    async fn fetch_userinfo(&self, access_token: &str) -> Result<Userinfo, AuthError> {
        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "userinfo fetch failed with status {}",
                response.status()
            )));
        }

        response
            .json::<Userinfo>()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for GoogleOAuth {
    fn authorize_url(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "profile")
            .finish();

        format!("{AUTH_ENDPOINT}?{query}")
    }

    async fn fetch_subject(&self, code: &str) -> Result<String, AuthError> {
        let token = self.exchange_code(code).await?;
        let userinfo = self.fetch_userinfo(&token.access_token).await?;

        tracing::debug!("Resolved Google subject for callback code");
        Ok(userinfo.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleOAuth {
        GoogleOAuth::new(GoogleConfig {
            client_id: "client-123".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/home".to_string(),
        })
    }

    #[test]
    fn authorize_url_carries_code_flow_params() {
        let url = provider().authorize_url();

        assert!(url.starts_with(AUTH_ENDPOINT));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=profile"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fhome"));
    }
}
