use serde::{Deserialize, Serialize};
use std::fmt;

/// A screen of the certificate manager front end.
///
/// Views are opaque to the router: it only needs their identifier to
/// pick which shell to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum View {
    Login,
    Registration,
    MailVerification,
    VerificationChoice,
}

impl View {
    /// Stable identifier used in the shell's `data-view` attribute.
    pub fn id(self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Registration => "Registration",
            View::MailVerification => "MailVerification",
            View::VerificationChoice => "VerificationChoice",
        }
    }

    /// Human-readable heading shown at the top of the view.
    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::Registration => "Create an account",
            View::MailVerification => "Verify your email",
            View::VerificationChoice => "Choose a verification method",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_matches_serialized_name() {
        for view in [
            View::Login,
            View::Registration,
            View::MailVerification,
            View::VerificationChoice,
        ] {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.id()));
        }
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(View::MailVerification.to_string(), "MailVerification");
    }
}
