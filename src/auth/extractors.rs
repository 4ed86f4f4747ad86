use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::User;

/// Extracts the authenticated user from the request.
///
/// This extractor is intended for routes protected by `AuthMiddleware`, which
/// validates the bearer token and stores its `Claims` in request extensions.
/// The identity claim carries the user's email; the user row is resolved
/// through the database pool so handlers get a concrete user id to scope
/// queries with.
///
/// If the claims are missing, or the email no longer matches a user, the
/// extractor fails with `AppError::Unauthorized`.
#[derive(Debug)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let claims = req.extensions().get::<Claims>().cloned().ok_or_else(|| {
                AppError::Unauthorized(
                    "Authentication claims not found. Ensure AuthMiddleware is active.".into(),
                )
            })?;

            let pool = req
                .app_data::<web::Data<PgPool>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalServerError("Database pool not configured".into())
                })?;

            let user = sqlx::query_as::<_, User>(
                "SELECT id, username, email FROM users WHERE email = $1",
            )
            .bind(&claims.sub)
            .fetch_optional(&**pool)
            .await
            .map_err(AppError::from)?;

            match user {
                Some(user) => Ok(CurrentUser(user)),
                None => Err(AppError::Unauthorized("User not found".into()).into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_current_user_extractor_without_claims() {
        let req = test::TestRequest::default().to_http_request();
        // No claims in extensions, as if AuthMiddleware never ran.

        let mut payload = Payload::None;
        let result = CurrentUser::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let err = result.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
