use std::collections::HashSet;

use crate::error::RouteTableError;
use crate::routes;
use crate::views::View;

/// A binding from a URL path to the view rendered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

impl RouteEntry {
    pub const fn new(path: &'static str, view: View) -> Self {
        Self { path, view }
    }

    /// Absolute URL path of the entry, e.g. `/verification/mail`.
    pub fn url(&self) -> String {
        format!("/{}", self.path)
    }
}

/// The front end's navigation routes, in declaration order.
pub const APP_ROUTES: [RouteEntry; 5] = [
    RouteEntry::new(routes::LOGIN, View::Login),
    RouteEntry::new(routes::LANDING, View::Login),
    RouteEntry::new(routes::REGISTER, View::Registration),
    RouteEntry::new(routes::VERIFICATION_MAIL, View::MailVerification),
    RouteEntry::new(routes::VERIFICATION, View::VerificationChoice),
];

/// Ordered, validated, immutable route table.
///
/// Construction is the only place a table can fail; once built, every
/// path is unique and well formed and the landing route is present.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate `entries` and build the table.
    ///
    /// # Errors
    /// Returns the first [`RouteTableError`] found, checking entries in order.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RouteTableError> {
        let entries: Vec<RouteEntry> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            validate_path(entry.path)?;
            if !seen.insert(entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path.to_string()));
            }
        }

        if !seen.contains(routes::LANDING) {
            return Err(RouteTableError::MissingDefaultRoute);
        }

        Ok(Self { entries })
    }

    /// The certificate manager's route table.
    pub fn app() -> Result<Self, RouteTableError> {
        Self::new(APP_ROUTES)
    }

    /// Exact-match lookup of a navigated path (no leading slash).
    pub fn resolve(&self, path: &str) -> Option<View> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.view)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Turn a URL path into a route table key by dropping one leading slash.
pub fn navigated_path(url_path: &str) -> &str {
    url_path.strip_prefix('/').unwrap_or(url_path)
}

fn validate_path(path: &'static str) -> Result<(), RouteTableError> {
    let malformed = |reason| RouteTableError::MalformedPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Ok(());
    }
    if path.starts_with('/') {
        return Err(malformed("leading slash"));
    }
    if path.ends_with('/') {
        return Err(malformed("trailing slash"));
    }
    if path.split('/').any(str::is_empty) {
        return Err(malformed("empty segment"));
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(malformed("dot segment"));
    }
    if !path
        .chars()
        .all(|c| c == '/' || c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
    {
        return Err(malformed("only unreserved URL characters are allowed"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_table_resolves_every_declared_path() {
        let table = RouteTable::app().unwrap();

        assert_eq!(table.resolve("login"), Some(View::Login));
        assert_eq!(table.resolve(""), Some(View::Login));
        assert_eq!(table.resolve("register"), Some(View::Registration));
        assert_eq!(table.resolve("verification/mail"), Some(View::MailVerification));
        assert_eq!(table.resolve("verification"), Some(View::VerificationChoice));
    }

    #[test]
    fn test_landing_and_login_share_a_view() {
        let table = RouteTable::app().unwrap();
        assert_eq!(table.resolve(""), table.resolve("login"));
    }

    #[test]
    fn test_app_paths_are_unique() {
        let table = RouteTable::app().unwrap();
        let unique: HashSet<_> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(unique.len(), table.len());
    }

    #[test]
    fn test_no_prefix_matching() {
        let table = RouteTable::app().unwrap();
        assert_ne!(table.resolve("verification"), table.resolve("verification/mail"));
        assert_eq!(table.resolve("verification/"), None);
        assert_eq!(table.resolve("verification/mail/extra"), None);
        assert_eq!(table.resolve("log"), None);
    }

    #[test]
    fn test_unknown_path_does_not_match() {
        let table = RouteTable::app().unwrap();
        assert_eq!(table.resolve("does-not-exist"), None);
        assert_eq!(table.resolve("/login"), None);
        assert_eq!(table.resolve("LOGIN"), None);
    }

    #[test]
    fn test_navigation_sequence() {
        let table = RouteTable::app().unwrap();
        let resolved: Vec<_> = ["", "login", "register", "verification", "verification/mail"]
            .into_iter()
            .map(|path| table.resolve(path))
            .collect();

        assert_eq!(
            resolved,
            vec![
                Some(View::Login),
                Some(View::Login),
                Some(View::Registration),
                Some(View::VerificationChoice),
                Some(View::MailVerification),
            ]
        );
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let table = RouteTable::app().unwrap();
        let paths: Vec<_> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec!["login", "", "register", "verification/mail", "verification"]
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new([
            RouteEntry::new("", View::Login),
            RouteEntry::new("register", View::Registration),
            RouteEntry::new("register", View::Login),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteTableError::DuplicatePath("register".to_string())
        );
    }

    #[test]
    fn test_missing_default_route_rejected() {
        let result = RouteTable::new([RouteEntry::new("login", View::Login)]);
        assert_eq!(result.unwrap_err(), RouteTableError::MissingDefaultRoute);
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for path in [
            "/login",
            "login/",
            "verification//mail",
            ":id",
            "user/{id}",
            "*",
            "log in",
            ".",
            "..",
            "verification/..",
            "./login",
        ] {
            let result = RouteTable::new([
                RouteEntry::new("", View::Login),
                RouteEntry::new(path, View::Login),
            ]);
            assert!(
                matches!(result, Err(RouteTableError::MalformedPath { .. })),
                "expected '{}' to be rejected",
                path
            );
        }
    }

    #[test]
    fn test_url_adds_leading_slash() {
        assert_eq!(RouteEntry::new("", View::Login).url(), "/");
        assert_eq!(
            RouteEntry::new("verification/mail", View::MailVerification).url(),
            "/verification/mail"
        );
    }

    #[test]
    fn test_navigated_path_strips_one_slash() {
        assert_eq!(navigated_path("/"), "");
        assert_eq!(navigated_path("/verification/mail"), "verification/mail");
        assert_eq!(navigated_path("register"), "register");
        assert_eq!(navigated_path("//login"), "/login");
    }
}
