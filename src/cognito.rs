//! Amazon Cognito user pool client over the JSON HTTP API. Every operation is a
//! `POST` to the regional endpoint with an `X-Amz-Target` header naming the
//! action. Only unauthenticated public-client actions are used, so no request
//! signing is involved. Request bodies carry passwords and codes and must never
//! be logged.

use crate::{
    config::IdentityConfig,
    error::{Error, Result},
    provider::{
        AuthSession, ClientMetadata, CurrentUser, IdentityProvider, SignUpOutcome, SignUpRequest,
    },
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};
use std::collections::BTreeMap;
use tracing::{Instrument, debug, info_span};
use url::Url;

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const AMZ_JSON: &str = "application/x-amz-json-1.1";
const PASSWORD_AUTH_FLOW: &str = "USER_PASSWORD_AUTH";
/// Maximum number of error body characters kept in [`Error::Response`].
const MAX_ERROR_CHARS: usize = 200;
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Cognito-backed [`IdentityProvider`].
#[derive(Clone, Debug)]
pub struct CognitoClient {
    http: reqwest::Client,
    endpoint: Url,
    client_id: String,
}

impl CognitoClient {
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &IdentityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: http_client()?,
            endpoint: config.endpoint_url()?,
            client_id: config.client_id.trim().to_string(),
        })
    }

    async fn call<B, T>(&self, operation: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let span = info_span!(
            "cognito.request",
            http.method = "POST",
            operation,
            url = %self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", AMZ_JSON)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{operation}"))
            .body(payload)
            .send()
            .instrument(span)
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = provider_error(status.as_u16(), &bytes);
            debug!(operation, status = status.as_u16(), "provider rejected request: {err}");
            return Err(err);
        }

        debug!(operation, "provider request succeeded");
        let body: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };
        Ok(serde_json::from_slice(body)?)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for CognitoClient {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome> {
        let body = SignUpBody {
            client_id: &self.client_id,
            username: &request.username,
            password: request.password.expose_secret(),
            user_attributes: request
                .attributes
                .iter()
                .map(|(name, value)| AttributeType {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
            client_metadata: &request.client_metadata,
        };

        let response: SignUpResponse = self.call("SignUp", &body).await?;
        Ok(SignUpOutcome {
            user_confirmed: response.user_confirmed,
            user_sub: response.user_sub,
        })
    }

    async fn confirm_sign_up(&self, username: &str, code: &str) -> Result<()> {
        let body = ConfirmSignUpBody {
            client_id: &self.client_id,
            username,
            confirmation_code: code,
            force_alias_creation: true,
        };
        let _: IgnoredAny = self.call("ConfirmSignUp", &body).await?;
        Ok(())
    }

    async fn initiate_auth(
        &self,
        username: &str,
        password: &SecretString,
        client_metadata: ClientMetadata,
    ) -> Result<AuthSession> {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("USERNAME", username);
        auth_parameters.insert("PASSWORD", password.expose_secret());

        let body = InitiateAuthBody {
            auth_flow: PASSWORD_AUTH_FLOW,
            client_id: &self.client_id,
            auth_parameters,
            client_metadata: &client_metadata,
        };

        let response: InitiateAuthResponse = self.call("InitiateAuth", &body).await?;

        if let Some(result) = response.authentication_result {
            let access_token = result
                .access_token
                .ok_or_else(|| Error::Response("no AccessToken in AuthenticationResult".to_string()))?;
            return Ok(AuthSession {
                access_token: SecretString::from(access_token),
                id_token: result.id_token.map(SecretString::from),
                refresh_token: result.refresh_token.map(SecretString::from),
                expires_in: result.expires_in,
                token_type: result.token_type,
            });
        }

        match response.challenge_name {
            Some(challenge) => Err(Error::ChallengeRequired(challenge)),
            None => Err(Error::Response(
                "no AuthenticationResult or ChallengeName found".to_string(),
            )),
        }
    }

    async fn get_user(&self, access_token: &SecretString) -> Result<CurrentUser> {
        let body = GetUserBody {
            access_token: access_token.expose_secret(),
        };
        let response: GetUserResponse = self.call("GetUser", &body).await?;
        Ok(CurrentUser {
            username: response.username,
            attributes: response
                .user_attributes
                .into_iter()
                .map(|attribute| (attribute.name, attribute.value))
                .collect(),
        })
    }

    async fn resend_confirmation_code(&self, username: &str) -> Result<()> {
        let body = ResendConfirmationCodeBody {
            client_id: &self.client_id,
            username,
        };
        let _: IgnoredAny = self.call("ResendConfirmationCode", &body).await?;
        Ok(())
    }
}

fn http_client() -> Result<reqwest::Client> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = reqwest::Client::builder()
        .user_agent(crate::APP_USER_AGENT)
        .timeout(REQUEST_TIMEOUT);
    #[cfg(target_arch = "wasm32")]
    let builder = reqwest::Client::builder();

    Ok(builder.build()?)
}

/// Maps an error response to [`Error::Provider`], falling back to a
/// sanitized [`Error::Response`] when the body is not a Cognito error.
fn provider_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            error_type: Some(error_type),
            message,
        }) => Error::Provider {
            code: error_code(&error_type).to_string(),
            message: message.unwrap_or_default(),
        },
        _ => Error::Response(format!(
            "HTTP {status}: {}",
            sanitize_body(&String::from_utf8_lossy(body))
        )),
    }
}

/// Strips the optional namespace (`com.amazonaws...#NotAuthorizedException`).
fn error_code(error_type: &str) -> &str {
    error_type
        .rsplit_once('#')
        .map_or(error_type, |(_, code)| code)
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AttributeType {
    name: String,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpBody<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    user_attributes: Vec<AttributeType>,
    client_metadata: &'a ClientMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpResponse {
    #[serde(default)]
    user_confirmed: bool,
    user_sub: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ConfirmSignUpBody<'a> {
    client_id: &'a str,
    username: &'a str,
    confirmation_code: &'a str,
    force_alias_creation: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthBody<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: BTreeMap<&'a str, &'a str>,
    client_metadata: &'a ClientMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: Option<String>,
    id_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    token_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserBody<'a> {
    access_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserResponse {
    username: String,
    #[serde(default)]
    user_attributes: Vec<AttributeType>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResendConfirmationCodeBody<'a> {
    client_id: &'a str,
    username: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}
