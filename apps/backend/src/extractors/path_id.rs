//! Non-negative integer ids taken from the route path. Zero passes through
//! so the lookup reports it as not found.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_id_segment(req: &HttpRequest, key: &str) -> Result<i64, AppError> {
    let raw = req.match_info().get(key).ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidPathParameter,
            format!("Missing {key} parameter"),
        )
    })?;

    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidPathParameter,
            format!("Invalid {key}: {raw}"),
        )
    })?;

    if id < 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidPathParameter,
            format!("{key} must not be negative, got: {id}"),
        ));
    }

    Ok(id)
}

/// The `{id}` segment of `/people/{id}` and `/planets/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl FromRequest for ResourceId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id_segment(req, "id").map(ResourceId))
    }
}

/// The `{user_id}` segment of `/favorites/{user_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl FromRequest for UserId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id_segment(req, "user_id").map(UserId))
    }
}
