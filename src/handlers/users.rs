use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::repositories;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub data: UserResponse,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /users
///
/// Creates a user. The password is hashed before it touches the database and
/// the hash never appears in a response.
#[utoipa::path(
    post,
    path = "/users",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Empty username, email or password"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "users"
)]
pub async fn signup(
    pool: web::Data<DbPool>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.username.is_empty() || body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::InvalidInput(
            "username, email and password must be non-empty".to_string(),
        ));
    }

    let user = web::block(move || {
        let mut conn = pool.get()?;
        repositories::users::create_user(&mut conn, &body.username, &body.email, &body.password)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(SignupResponse {
        data: UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}
