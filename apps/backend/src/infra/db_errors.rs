//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here (through
//! `From<DbErr> for DomainError`) and handlers map the result to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(&format!("SQLSTATE({code})")) || msg.contains(&format!("code: {code}"))
}

/// `table.column` from SQLite's "UNIQUE constraint failed: table.column".
fn sqlite_unique_target(msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = msg.find(MARKER)? + MARKER.len();
    msg[start..].split_whitespace().next()
}

fn unique_conflict_for(msg: &str) -> Option<(ConflictKind, &'static str)> {
    let target = sqlite_unique_target(msg);
    if target == Some("users.email") || msg.contains("users_email_key") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if target == Some("characters.name") || msg.contains("characters_name_key") {
        return Some((
            ConflictKind::UniqueCharacterName,
            "A character with this name already exists",
        ));
    }
    None
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

fn is_fk_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

fn is_check_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23514")
        || msg.contains("violates check constraint")
        || msg.contains("CHECK constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail. The raw
/// error is logged with PII redacted.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Row decoding failed");
            return DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored data could not be decoded",
            );
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        if let Some((kind, detail)) = unique_conflict_for(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if is_fk_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::ForeignKey,
            "Referenced record does not exist",
        );
    }

    if is_check_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation(
            ValidationKind::CheckConstraint,
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
