mod common;

use account_service::account::errors::AuthError;
use account_service::account::models::EmailAddress;
use account_service::account::models::ProfilePatch;
use account_service::account::models::RegisterCommand;
use account_service::account::ports::AuthGatewayPort;
use common::test_gateway;

fn register_command(email: &str, password: &str) -> RegisterCommand {
    RegisterCommand {
        email: EmailAddress::new(email.to_string()).unwrap(),
        password: password.to_string(),
        full_name: "Test Account".to_string(),
        phone: Some("+5511912345678".to_string()),
    }
}

#[tokio::test]
async fn test_register_returns_bearer_pair() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("a@b.com", "Abcdef1!"))
        .await
        .expect("Registration failed");

    assert_eq!(session.account.email.as_str(), "a@b.com");
    assert!(session.account.is_active);
    assert_eq!(session.tokens.token_type, "bearer");
    assert_eq!(session.tokens.expires_in, 30 * 60);
    assert_ne!(session.tokens.access_token, session.tokens.refresh_token);
}

#[tokio::test]
async fn test_register_duplicate_email_fails() {
    let (_, gateway) = test_gateway();

    gateway
        .register(register_command("a@b.com", "Abcdef1!"))
        .await
        .expect("First registration failed");

    // Case-folded duplicate
    let result = gateway
        .register(register_command("A@B.com", "Abcdef1!"))
        .await;
    assert!(matches!(result, Err(AuthError::EmailTaken(_))));
}

#[tokio::test]
async fn test_register_weak_password_fails() {
    let (_, gateway) = test_gateway();

    for weak in ["Abcde1!", "abcdef1!", "ABCDEF1!", "Abcdefg!", "Abcdefg1"] {
        let result = gateway.register(register_command("a@b.com", weak)).await;
        assert!(
            matches!(result, Err(AuthError::WeakPassword)),
            "password {:?} should be rejected",
            weak
        );
    }
}

#[tokio::test]
async fn test_login_round_trip() {
    let (_, gateway) = test_gateway();

    let registered = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    let session = gateway
        .login("Alice@Example.com", "Abcdef1!")
        .await
        .expect("Login failed");

    assert_eq!(session.account.id, registered.account.id);

    let claims = gateway
        .resolve_identity(&session.tokens.access_token)
        .expect("Access token should resolve");
    assert_eq!(claims.sub, session.account.id.to_string());
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (_, gateway) = test_gateway();

    gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    // Unknown email and wrong password fail with the same kind and message
    let unknown = gateway.login("ghost@example.com", "Abcdef1!").await;
    let wrong = gateway.login("alice@example.com", "Wrong-pass1!").await;

    let unknown = unknown.expect_err("Unknown email must fail");
    let wrong = wrong.expect_err("Wrong password must fail");

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_login_disabled_account() {
    let (store, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();
    store.set_active(&session.account.id, false);

    let result = gateway.login("alice@example.com", "Abcdef1!").await;
    assert!(matches!(result, Err(AuthError::AccountDisabled)));
}

#[tokio::test]
async fn test_refresh_issues_new_pair_without_rotation() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    let refreshed = gateway
        .refresh(&session.tokens.refresh_token)
        .await
        .expect("Refresh failed");

    assert!(gateway
        .resolve_identity(&refreshed.tokens.access_token)
        .is_ok());

    // The old refresh token is not rotated out and still works
    let again = gateway.refresh(&session.tokens.refresh_token).await;
    assert!(again.is_ok());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    let result = gateway.refresh(&session.tokens.access_token).await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn test_refresh_disabled_account() {
    let (store, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();
    store.set_active(&session.account.id, false);

    let result = gateway.refresh(&session.tokens.refresh_token).await;
    assert!(matches!(result, Err(AuthError::AccountDisabled)));
}

#[tokio::test]
async fn test_resolve_identity_rejects_refresh_token() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    let result = gateway.resolve_identity(&session.tokens.refresh_token);
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn test_resolve_identity_rejects_tampered_token() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();

    let mut tampered = session.tokens.access_token.clone();
    tampered.pop();

    assert!(matches!(
        gateway.resolve_identity(&tampered),
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_change_password_full_flow() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();
    let id = session.account.id;

    // Wrong current password
    let result = gateway.change_password(&id, "Wrong-pass1!", "Brand-new2#").await;
    assert!(matches!(result, Err(AuthError::WrongCurrentPassword)));

    // Weak replacement
    let result = gateway.change_password(&id, "Abcdef1!", "feeble").await;
    assert!(matches!(result, Err(AuthError::WeakPassword)));

    // Success
    gateway
        .change_password(&id, "Abcdef1!", "Brand-new2#")
        .await
        .expect("Password change failed");

    let old = gateway.login("alice@example.com", "Abcdef1!").await;
    assert!(matches!(old, Err(AuthError::InvalidCredentials)));

    gateway
        .login("alice@example.com", "Brand-new2#")
        .await
        .expect("Login with new password failed");

    // Tokens issued before the change stay valid until natural expiry
    assert!(gateway
        .resolve_identity(&session.tokens.access_token)
        .is_ok());
}

#[tokio::test]
async fn test_update_profile_merges_only_provided_fields() {
    let (_, gateway) = test_gateway();

    let session = gateway
        .register(register_command("alice@example.com", "Abcdef1!"))
        .await
        .unwrap();
    let id = session.account.id;

    let patch = ProfilePatch {
        full_name: Some("Alice Cooper".to_string()),
        phone: None,
        bio: Some("Sells things".to_string()),
    };

    let updated = gateway.update_profile(&id, patch).await.unwrap();
    assert_eq!(updated.full_name.as_deref(), Some("Alice Cooper"));
    assert_eq!(updated.phone.as_deref(), Some("+5511912345678"));
    assert_eq!(updated.bio.as_deref(), Some("Sells things"));

    let current = gateway.current_account(&id).await.unwrap();
    assert_eq!(current.full_name.as_deref(), Some("Alice Cooper"));
}
