//! Path classification: which resource, if any, does a request name?

/// Prefix under which the JSON API lives. Everything else is static-asset
/// territory handled by the file server.
pub const API_PREFIX: &str = "/api";

/// The resource classes the API exposes. `Register` exists only as a
/// collection — user creation goes through registration, never through
/// the users collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Product,
    Order,
    Register,
}

impl ResourceKind {
    fn from_collection_segment(segment: &str) -> Option<ResourceKind> {
        match segment {
            "users" => Some(ResourceKind::User),
            "products" => Some(ResourceKind::Product),
            "orders" => Some(ResourceKind::Order),
            "register" => Some(ResourceKind::Register),
            _ => None,
        }
    }

    /// Collections that also expose item routes (`/{id}` suffix).
    fn has_item_routes(self) -> bool {
        !matches!(self, ResourceKind::Register)
    }
}

/// Classification of one request path. Computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Path outside the API prefix; served by the static file server.
    StaticAsset,
    /// Exact collection path, e.g. `/api/products`.
    Collection(ResourceKind),
    /// Collection path plus one identifier segment, e.g.
    /// `/api/products/f398d576bcaf672382ff2ac6`.
    Item { kind: ResourceKind, id: String },
    /// Anything under the API prefix that names nothing.
    Unknown,
}

impl Route {
    /// Classify a request path.
    ///
    /// The identifier check is syntactic only — a well-shaped id for a
    /// nonexistent document still classifies as an item route, and the
    /// resource operation surfaces the miss as not-found.
    pub fn match_path(path: &str) -> Route {
        if !path.starts_with(API_PREFIX) {
            return Route::StaticAsset;
        }
        // "/api" alone, or "/apifoo", names nothing.
        let Some(rest) = path[API_PREFIX.len()..].strip_prefix('/') else {
            return Route::Unknown;
        };

        let mut segments = rest.split('/');
        let collection = segments.next().unwrap_or("");
        let id = segments.next();
        if segments.next().is_some() {
            return Route::Unknown;
        }

        let Some(kind) = ResourceKind::from_collection_segment(collection) else {
            return Route::Unknown;
        };
        match id {
            None => Route::Collection(kind),
            Some(id) if kind.has_item_routes() && is_id_token(id) => Route::Item {
                kind,
                id: id.to_string(),
            },
            Some(_) => Route::Unknown,
        }
    }
}

/// Identifier token shape: `[0-9a-z]{8,24}`. A syntactic filter only.
fn is_id_token(segment: &str) -> bool {
    (8..=24).contains(&segment.len())
        && segment
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_api_paths_are_static() {
        assert_eq!(Route::match_path("/"), Route::StaticAsset);
        assert_eq!(Route::match_path("/index.html"), Route::StaticAsset);
        assert_eq!(Route::match_path("/css/styles.css"), Route::StaticAsset);
    }

    #[test]
    fn collection_routes() {
        assert_eq!(
            Route::match_path("/api/users"),
            Route::Collection(ResourceKind::User)
        );
        assert_eq!(
            Route::match_path("/api/products"),
            Route::Collection(ResourceKind::Product)
        );
        assert_eq!(
            Route::match_path("/api/orders"),
            Route::Collection(ResourceKind::Order)
        );
        assert_eq!(
            Route::match_path("/api/register"),
            Route::Collection(ResourceKind::Register)
        );
    }

    #[test]
    fn item_routes_require_token_shaped_ids() {
        assert_eq!(
            Route::match_path("/api/products/f398d576bcaf672382ff2ac6"),
            Route::Item {
                kind: ResourceKind::Product,
                id: "f398d576bcaf672382ff2ac6".to_string()
            }
        );
        // minimum length 8
        assert_eq!(
            Route::match_path("/api/users/abcd1234"),
            Route::Item {
                kind: ResourceKind::User,
                id: "abcd1234".to_string()
            }
        );
    }

    #[test]
    fn malformed_ids_fall_through_to_unknown() {
        // too short
        assert_eq!(Route::match_path("/api/users/abc123"), Route::Unknown);
        // too long (25 chars)
        assert_eq!(
            Route::match_path("/api/users/a234567890123456789012345"),
            Route::Unknown
        );
        // uppercase is outside the token alphabet
        assert_eq!(
            Route::match_path("/api/users/ABCD1234EF567890"),
            Route::Unknown
        );
        // punctuation
        assert_eq!(
            Route::match_path("/api/users/abcd-1234-ef56"),
            Route::Unknown
        );
    }

    #[test]
    fn register_has_no_item_route() {
        assert_eq!(
            Route::match_path("/api/register/f398d576bcaf672382ff2ac6"),
            Route::Unknown
        );
    }

    #[test]
    fn api_prefix_oddities_name_nothing() {
        assert_eq!(Route::match_path("/api"), Route::Unknown);
        assert_eq!(Route::match_path("/apifoo"), Route::Unknown);
        assert_eq!(Route::match_path("/api/"), Route::Unknown);
        assert_eq!(Route::match_path("/api/unknown"), Route::Unknown);
        // trailing slash after a collection is not the collection
        assert_eq!(Route::match_path("/api/users/"), Route::Unknown);
        // extra segment after an id
        assert_eq!(
            Route::match_path("/api/users/abcd1234efgh/extra"),
            Route::Unknown
        );
    }
}
