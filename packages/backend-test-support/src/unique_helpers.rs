//! Collision-free test data.
//!
//! Integration tests share one process and sometimes one database, so names
//! and emails that hit unique columns are suffixed with a ULID.

use ulid::Ulid;

/// `{prefix}-{ulid}`, usable for character names and other unique columns.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("Luke");
/// assert!(a.starts_with("Luke-"));
/// assert_ne!(a, unique_str("Luke"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// `{prefix}-{ulid}@example.test`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("rebel");
/// assert!(email.starts_with("rebel-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.test", Ulid::new())
}
