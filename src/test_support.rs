//! In-process identity provider double that records every call.

use crate::{
    error::{Error, Result},
    provider::{
        AuthSession, ClientMetadata, CurrentUser, IdentityProvider, SignUpOutcome, SignUpRequest,
    },
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    SignUp {
        username: String,
        password: String,
        attributes: Vec<(String, String)>,
        metadata: Vec<(String, String)>,
    },
    ConfirmSignUp {
        username: String,
        code: String,
    },
    InitiateAuth {
        username: String,
        password: String,
        metadata: Vec<(String, String)>,
    },
    GetUser {
        access_token: String,
    },
    ResendConfirmationCode {
        username: String,
    },
}

#[derive(Debug)]
struct State {
    calls: Vec<Call>,
    failure: Option<String>,
    access_token: String,
    pending: bool,
}

/// Clones share recorded calls and behavior.
#[derive(Clone, Debug)]
pub struct FakeProvider {
    state: Rc<RefCell<State>>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                calls: Vec::new(),
                failure: None,
                access_token: "access-token".to_string(),
                pending: false,
            })),
        }
    }
}

impl FakeProvider {
    pub fn with_access_token(self, token: &str) -> Self {
        self.state.borrow_mut().access_token = token.to_string();
        self
    }

    /// Every call fails with the given provider error code.
    pub fn failing(self, code: &str) -> Self {
        self.state.borrow_mut().failure = Some(code.to_string());
        self
    }

    /// Every call stays pending until the caller is aborted.
    pub fn pending(self) -> Self {
        self.state.borrow_mut().pending = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    async fn record(&self, call: Call) -> Result<()> {
        let (failure, pending) = {
            let mut state = self.state.borrow_mut();
            state.calls.push(call);
            (state.failure.clone(), state.pending)
        };
        if pending {
            futures::future::pending::<()>().await;
        }
        match failure {
            Some(code) => Err(Error::Provider {
                message: format!("{code} raised by fake provider"),
                code,
            }),
            None => Ok(()),
        }
    }
}

fn pairs(metadata: &ClientMetadata) -> Vec<(String, String)> {
    metadata
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome> {
        self.record(Call::SignUp {
            username: request.username.clone(),
            password: request.password.expose_secret().to_string(),
            attributes: request.attributes.clone(),
            metadata: pairs(&request.client_metadata),
        })
        .await?;
        Ok(SignUpOutcome {
            user_confirmed: false,
            user_sub: Some("sub-1".to_string()),
        })
    }

    async fn confirm_sign_up(&self, username: &str, code: &str) -> Result<()> {
        self.record(Call::ConfirmSignUp {
            username: username.to_string(),
            code: code.to_string(),
        })
        .await
    }

    async fn initiate_auth(
        &self,
        username: &str,
        password: &SecretString,
        client_metadata: ClientMetadata,
    ) -> Result<AuthSession> {
        self.record(Call::InitiateAuth {
            username: username.to_string(),
            password: password.expose_secret().to_string(),
            metadata: pairs(&client_metadata),
        })
        .await?;
        let access_token = self.state.borrow().access_token.clone();
        Ok(AuthSession {
            access_token: SecretString::from(access_token),
            id_token: None,
            refresh_token: None,
            expires_in: Some(3600),
            token_type: Some("Bearer".to_string()),
        })
    }

    async fn get_user(&self, access_token: &SecretString) -> Result<CurrentUser> {
        self.record(Call::GetUser {
            access_token: access_token.expose_secret().to_string(),
        })
        .await?;
        Ok(CurrentUser {
            username: "u@x.com".to_string(),
            attributes: vec![("email".to_string(), "u@x.com".to_string())],
        })
    }

    async fn resend_confirmation_code(&self, username: &str) -> Result<()> {
        self.record(Call::ResendConfirmationCode {
            username: username.to_string(),
        })
        .await
    }
}
