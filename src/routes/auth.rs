use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest, TokenResponse,
        TokenService},
    error::AppError,
    models::User,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns it (without the password hash).
/// Uniqueness of username and email is enforced by the database constraints;
/// a duplicate surfaces as 409 Conflict.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Hash password
    let hashed_password = hash_password(&register_data.password)?;

    // Insert new user
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, hashed_password) VALUES ($1, $2, $3)
         RETURNING id, username, email",
    )
    .bind(&register_data.username)
    .bind(&register_data.email)
    .bind(&hashed_password)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// Authenticates a user by email and password and returns a bearer token
/// carrying the email as its identity claim.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get credentials from database
    let user = sqlx::query_as::<_, (String, String)>(
        "SELECT email, hashed_password FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    // Unknown email and wrong password report the same message.
    match user {
        Some((email, hashed_password)) => {
            if verify_password(&login_data.password, &hashed_password) {
                let token = tokens.issue(&email)?;
                Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
            } else {
                Err(AppError::Unauthorized("Incorrect email or password".into()))
            }
        }
        None => Err(AppError::Unauthorized("Incorrect email or password".into())),
    }
}
