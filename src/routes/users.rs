use crate::{error::AppError, models::User};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// List all users
///
/// Returns every registered user. This endpoint is deliberately left
/// unauthenticated, matching the behavior of the system it reimplements.
#[get("/get-users")]
pub async fn get_users(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users ORDER BY id")
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(users))
}
