//! PII scrubbing for log output.
//!
//! Database errors echo offending values back (a duplicate email, a
//! password hash), so anything raw that goes into a log field is wrapped in
//! [`Redacted`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Long base64/hex-ish runs: hashes, tokens, secrets.
#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9+/$.]{24,}={0,2}").unwrap());

const TOKEN_MASK: &str = "[REDACTED_TOKEN]";

/// Mask emails (first character of the local part survives) and opaque
/// tokens of 24 or more characters.
pub fn redact(input: &str) -> String {
    let emails_masked = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let email = &caps[0];
        match email.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => email.to_string(),
        }
    });

    OPAQUE_TOKEN
        .replace_all(&emails_masked, TOKEN_MASK)
        .into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
