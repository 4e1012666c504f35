//! Auth Endpoints

use serde::{Deserialize, Serialize};

use super::{get_empty, get_json, post_empty, ApiResult};

#[derive(Debug, Deserialize)]
struct AuthStatus {
    authenticated: bool,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn user_is_logged_in() -> ApiResult<bool> {
    let status: AuthStatus = get_json("/auth/user_is_logged_in").await?;
    Ok(status.authenticated)
}

pub async fn login(email: &str, password: &str) -> ApiResult<()> {
    post_empty("/auth/login", &LoginBody { email, password }).await
}

pub async fn logout() -> ApiResult<()> {
    get_empty("/auth/logout").await
}
