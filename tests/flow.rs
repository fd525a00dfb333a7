//! Drives the screens end to end against a mocked Cognito endpoint.

use anyhow::{Result, anyhow};
use secrecy::SecretString;
use serde_json::json;
use std::net::TcpListener;
use tenantgate::screens::{
    ConfirmSignUpScreen, LOGIN_FAILED_MESSAGE, LoginForm, LoginScreen, SignUpForm, SignUpScreen,
    SuccessScreen,
};
use tenantgate::storage::ACCESS_TOKEN_KEY;
use tenantgate::{
    CognitoClient, IdentityClient, IdentityConfig, MemoryTokenStore, Navigation,
    PendingRegistration, Route, ScreenError, ScreenLifetime, ScreenState, TokenStore,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOST: &str = "acme.example.com";

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn identity(
    server: &MockServer,
    store: &MemoryTokenStore,
) -> Result<IdentityClient<CognitoClient, MemoryTokenStore>> {
    let config = IdentityConfig::new("us-east-2_3NUtAHXmB", "flow-client").with_endpoint(server.uri());
    Ok(IdentityClient::new(
        CognitoClient::new(&config)?,
        store.clone(),
    ))
}

fn target(operation: &str) -> String {
    format!("AWSCognitoIdentityProviderService.{operation}")
}

fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

#[tokio::test]
async fn sign_up_confirm_login_and_welcome() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("X-Amz-Target", target("SignUp").as_str()))
        .and(body_partial_json(json!({
            "Username": "u@x.com",
            "Password": "Secret123!",
            "UserAttributes": [
                {"Name": "email", "Value": "u@x.com"},
                {"Name": "custom:tenantId", "Value": "acme"}
            ],
            "ClientMetadata": {"subdomain": "acme"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "UserConfirmed": false,
            "UserSub": "sub-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("ConfirmSignUp").as_str()))
        .and(body_partial_json(json!({
            "Username": "u@x.com",
            "ConfirmationCode": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("InitiateAuth").as_str()))
        .and(body_partial_json(json!({
            "AuthFlow": "USER_PASSWORD_AUTH",
            "AuthParameters": {"USERNAME": "u@x.com", "PASSWORD": "Secret123!"},
            "ClientMetadata": {"tenantId": "acme"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AuthenticationResult": {
                "AccessToken": "token-T",
                "IdToken": "id-T",
                "ExpiresIn": 3600,
                "TokenType": "Bearer"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("GetUser").as_str()))
        .and(body_partial_json(json!({"AccessToken": "token-T"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Username": "u@x.com",
            "UserAttributes": [{"Name": "custom:tenantId", "Value": "acme"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let signup = SignUpScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let navigation = signup
        .submit(
            HOST,
            SignUpForm {
                email: "u@x.com".to_string(),
                password: secret("Secret123!"),
            },
        )
        .await?;
    assert_eq!(navigation.route, Route::Confirm);
    let pending = navigation
        .state
        .ok_or_else(|| anyhow!("confirm route needs the email"))?;
    assert_eq!(pending.to_state()?, r#"{"email":"u@x.com"}"#);

    let confirm = ConfirmSignUpScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let navigation = confirm.submit(pending.clone(), "123456").await?;
    assert_eq!(navigation, Navigation::with_state(Route::Login, pending));

    let login = LoginScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let navigation = login
        .submit(
            HOST,
            LoginForm {
                email: "u@x.com".to_string(),
                password: secret("Secret123!"),
            },
        )
        .await?;
    assert_eq!(navigation, Navigation::to(Route::Success));
    assert_eq!(store.get(ACCESS_TOKEN_KEY)?.as_deref(), Some("token-T"));
    assert_eq!(store.snapshot().len(), 1);

    let success = SuccessScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    assert_eq!(success.load().await?, Some("u@x.com".to_string()));
    Ok(())
}

#[tokio::test]
async fn wrong_password_stays_on_login() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("InitiateAuth").as_str()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "NotAuthorizedException",
            "message": "Incorrect username or password."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let login = LoginScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let result = login
        .submit(
            HOST,
            LoginForm {
                email: "u@x.com".to_string(),
                password: secret("wrong"),
            },
        )
        .await;

    let expected = ScreenError::Rejected(LOGIN_FAILED_MESSAGE.to_string());
    assert_eq!(result, Err(expected.clone()));
    assert_eq!(
        expected.to_string(),
        "Login failed. Please check your credentials and try again."
    );
    assert_eq!(login.lifetime().state(), ScreenState::Failed(expected));
    assert!(store.snapshot().is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_sign_up_surfaces_provider_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("SignUp").as_str()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "UsernameExistsException",
            "message": "An account with the given email already exists."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let signup = SignUpScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let result = signup
        .submit(
            HOST,
            SignUpForm {
                email: "u@x.com".to_string(),
                password: secret("Secret123!"),
            },
        )
        .await;

    assert_eq!(
        result,
        Err(ScreenError::Rejected(
            "An account with the given email already exists.".to_string()
        ))
    );
    assert!(matches!(signup.lifetime().state(), ScreenState::Failed(_)));
    Ok(())
}

#[tokio::test]
async fn confirm_without_context_keeps_tenant_absent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", target("ConfirmSignUp").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    // A reload drops history state; the user retypes the email.
    let typed = PendingRegistration::from_state("").unwrap_or_else(|| PendingRegistration::new("u@x.com"));
    let confirm = ConfirmSignUpScreen::new(identity(&server, &store)?, ScreenLifetime::new());
    let navigation = confirm.submit(typed, "123456").await?;

    assert_eq!(
        navigation.state.map(|state| state.tenant_id),
        Some(None::<String>)
    );
    Ok(())
}
