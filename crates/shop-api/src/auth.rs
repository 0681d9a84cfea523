//! Authentication: resolving Basic credentials to a verified principal.

use axum::http::{header, HeaderMap};

use shop_core::{Credentials, Principal};
use shop_store::UserStore;

/// Resolve the request's `Authorization` header to a principal.
///
/// Reads exactly one record by email (case-sensitive equality on the
/// stored, lowercased address) and verifies the password digest in
/// constant time. Every failure mode — missing header, unsupported
/// scheme, malformed payload, unknown email, wrong password — collapses
/// to `None`, so the response never reveals which check failed.
pub fn authenticate(users: &UserStore, headers: &HeaderMap) -> Option<Principal> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let credentials = Credentials::from_header(header)?;
    let user = users.find_by_email(&credentials.email)?;
    if !user.verify_password(&credentials.password) {
        tracing::debug!("password verification failed");
        return None;
    }
    Some(user.principal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use shop_core::Role;
    use shop_store::User;

    fn store_with_user() -> UserStore {
        let users = UserStore::new();
        users
            .insert(User::create("Maija", "maija@example.com", "0123456789", Role::Customer).unwrap())
            .unwrap();
        users
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn basic(email: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
    }

    #[test]
    fn valid_credentials_resolve_to_a_principal() {
        let users = store_with_user();
        let principal =
            authenticate(&users, &headers_with(&basic("maija@example.com", "0123456789"))).unwrap();
        assert_eq!(principal.role, Role::Customer);
    }

    #[test]
    fn all_failure_modes_collapse_to_none() {
        let users = store_with_user();
        // no header
        assert!(authenticate(&users, &HeaderMap::new()).is_none());
        // unsupported scheme
        assert!(authenticate(&users, &headers_with("Bearer token")).is_none());
        // unknown email
        assert!(
            authenticate(&users, &headers_with(&basic("who@example.com", "0123456789"))).is_none()
        );
        // wrong password
        assert!(
            authenticate(&users, &headers_with(&basic("maija@example.com", "wrongpassword")))
                .is_none()
        );
    }

    #[test]
    fn email_matching_is_case_sensitive() {
        let users = store_with_user();
        assert!(
            authenticate(&users, &headers_with(&basic("Maija@example.com", "0123456789")))
                .is_none()
        );
    }
}
