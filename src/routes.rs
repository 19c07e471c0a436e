// Route path constants - single source of truth for all paths

// Navigation routes (no leading slash, matched exactly)
pub const LANDING: &str = "";
pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const VERIFICATION: &str = "verification";
pub const VERIFICATION_MAIL: &str = "verification/mail";

// Service endpoints
pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/api/routes";
pub const ROUTE_RESOLVE: &str = "/api/routes/resolve";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// First path segments owned by service endpoints; navigation routes may not use them.
pub const RESERVED_SEGMENTS: &[&str] = &["health", "api", "swagger-ui", "api-docs"];

/// Root of the JSON API; unmatched requests at or under it always get a JSON 404.
pub const API_ROOT: &str = "/api";

/// Whether `path` is the API root or lies below it.
pub fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_ROOT)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/unknown"));
        assert!(!is_api_path("/apis"));
        assert!(!is_api_path("/login"));
        assert!(!is_api_path("/"));
    }
}
