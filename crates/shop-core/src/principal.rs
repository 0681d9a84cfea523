//! Caller identity: the role enum and the per-request principal.

use serde::{Deserialize, Serialize};

/// Caller role. A closed set — the decision table matches on this
/// exhaustively, so a new role is a compile error until every rule
/// says what it means for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// The lowercase wire form (`"admin"` / `"customer"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Parse the lowercase wire form. Anything else is `None` — roles are
    /// never free-form strings.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "admin" => Some(Role::Admin),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verified identity attached to one request.
///
/// Produced only by successful authentication; an absent principal means
/// the caller is anonymous. Immutable for the lifetime of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Document id of the backing user record.
    pub id: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_form() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("customer"), Some(Role::Customer));
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Customer.as_str(), "customer");
    }

    #[test]
    fn role_rejects_unknown_and_cased_variants() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(parsed, Role::Customer);
    }

    #[test]
    fn principal_admin_check() {
        assert!(Principal::new("a1b2c3d4e5f6a1b2c3d4e5f6", Role::Admin).is_admin());
        assert!(!Principal::new("a1b2c3d4e5f6a1b2c3d4e5f6", Role::Customer).is_admin());
    }
}
