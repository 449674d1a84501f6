use crate::config::AuthConfig;
use crate::errors::{AppError, ErrorKind};
use crate::models::user::User;
use crate::store::UserStore;
use crate::utils::{jwt, password};

/// Outcome of login and signup. An unknown user or a wrong password is not a
/// GraphQL error: it comes back with no token, no user and the reason.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub token: Option<String>,
    pub user: Option<User>,
    pub message: String,
}

impl AuthOutcome {
    fn rejected(message: &str) -> Self {
        AuthOutcome {
            token: None,
            user: None,
            message: message.to_string(),
        }
    }
}

pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn issue_token(user: &User, auth: &AuthConfig) -> Result<String, AppError> {
    jwt::generate_token(&user.user_id.to_hex(), &auth.jwt_secret)
        .map_err(|_| AppError::Unexpected("Token generation error".to_string()))
}

pub async fn login(users: &dyn UserStore, auth: &AuthConfig, req: LoginRequest) -> Result<AuthOutcome, AppError> {
    match attempt_login(users, auth, req).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => match err.kind() {
            ErrorKind::NotFound | ErrorKind::CredentialMismatch => Ok(AuthOutcome::rejected(err.message())),
            _ => {
                log::error!("Login Error: {}", err);
                Err(AppError::Unexpected("Unable to login".to_string()))
            }
        },
    }
}

async fn attempt_login(users: &dyn UserStore, auth: &AuthConfig, req: LoginRequest) -> Result<AuthOutcome, AppError> {
    // Username takes precedence; email is only consulted when no username is given.
    let user = match (non_empty(req.username), non_empty(req.email)) {
        (Some(username), _) => users.find_by_username(&username).await?,
        (None, Some(email)) => users.find_by_email(&email).await?,
        (None, None) => None,
    };
    let user = user.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !password::verify_password(req.password, user.password.clone()).await? {
        return Err(AppError::CredentialMismatch("Invalid password".to_string()));
    }

    let token = issue_token(&user, auth)?;
    Ok(AuthOutcome {
        token: Some(token),
        user: Some(user),
        message: "Login successful".to_string(),
    })
}

pub async fn signup(users: &dyn UserStore, auth: &AuthConfig, req: SignupRequest) -> Result<AuthOutcome, AppError> {
    attempt_signup(users, auth, req).await.map_err(|err| {
        log::error!("Signup Error: {}", err);
        err
    })
}

async fn attempt_signup(users: &dyn UserStore, auth: &AuthConfig, req: SignupRequest) -> Result<AuthOutcome, AppError> {
    const CONFLICT: &str = "Username or Email already exists";

    if users
        .find_by_username_or_email(&req.username, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(CONFLICT.to_string()));
    }

    let password_hash = password::hash_password(req.password, auth.bcrypt_cost).await?;
    let user = User::new(req.username, req.email, password_hash);

    users.insert(&user).await.map_err(|err| match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict(CONFLICT.to_string()),
        other => other,
    })?;

    let token = issue_token(&user, auth)?;
    Ok(AuthOutcome {
        token: Some(token),
        user: Some(user),
        message: "Account created successfully".to_string(),
    })
}
