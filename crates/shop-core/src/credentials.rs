//! Extraction of Basic credentials from the `Authorization` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Transient per-request credentials. Never persisted; extracted fresh from
/// the `Authorization` header and dropped at response time.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Manual Debug so a stray log line cannot leak the password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Parse an `Authorization` header value.
    ///
    /// Recognizes only the `Basic` scheme (case-insensitive). The base64
    /// payload is decoded and split on the *first* colon into email and
    /// password, so passwords may themselves contain colons. Every failure
    /// mode — unsupported scheme, bad base64, non-UTF-8 payload, missing
    /// colon — yields `None`, indistinguishable from a missing header.
    pub fn from_header(header: &str) -> Option<Self> {
        let (scheme, payload) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(payload.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (email, password) = decoded.split_once(':')?;
        Some(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_well_formed_header() {
        let creds = Credentials::from_header(&encode("a@example.com:secretpass")).unwrap();
        assert_eq!(creds.email, "a@example.com");
        assert_eq!(creds.password, "secretpass");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let header = format!("basic {}", STANDARD.encode("a@example.com:pw"));
        assert!(Credentials::from_header(&header).is_some());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let creds = Credentials::from_header(&encode("a@example.com:pa:ss:word")).unwrap();
        assert_eq!(creds.password, "pa:ss:word");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(Credentials::from_header("Bearer abc.def.ghi").is_none());
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(Credentials::from_header("Basic !!!not-base64!!!").is_none());
        // valid base64 but no colon separator
        let no_colon = format!("Basic {}", STANDARD.encode("justanemail"));
        assert!(Credentials::from_header(&no_colon).is_none());
        // scheme only
        assert!(Credentials::from_header("Basic").is_none());
        assert!(Credentials::from_header("").is_none());
    }

    #[test]
    fn debug_never_prints_password() {
        let creds = Credentials::from_header(&encode("a@example.com:hunter2000")).unwrap();
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2000"));
    }
}
