use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the caller, taken from the `X-User-Id` header.
///
/// This only carries the id; no credential is checked.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "missing X-User-Id header".into()))?;

        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(CurrentUser(id)),
            _ => Err((StatusCode::UNAUTHORIZED, "invalid X-User-Id header".into())),
        }
    }
}
