//! Sign-in failure categories shown on the login page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorKind {
    /// Missing or invalid OAuth settings.
    #[error("Configuration")]
    Configuration,
    /// The account is not an administrator, or the provider/backend refused it.
    #[error("AccessDenied")]
    AccessDenied,
    /// The OAuth round trip could not be verified (state, code exchange).
    #[error("Verification")]
    Verification,
    /// The backend could not be reached.
    #[error("ServiceUnavailable")]
    ServiceUnavailable,
    #[error("AuthenticationFailed")]
    AuthenticationFailed,
}

impl AuthErrorKind {
    pub const ALL: [AuthErrorKind; 5] = [
        Self::Configuration,
        Self::AccessDenied,
        Self::Verification,
        Self::ServiceUnavailable,
        Self::AuthenticationFailed,
    ];

    /// Value of the `error` query parameter on `/login`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Configuration => "Configuration",
            Self::AccessDenied => "AccessDenied",
            Self::Verification => "Verification",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::AuthenticationFailed => "AuthenticationFailed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Configuration => "Configuration Error",
            Self::AccessDenied => "Access Denied",
            Self::Verification => "Verification Failed",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::AuthenticationFailed => "Authentication Failed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Configuration => {
                "There is a problem with the server configuration. Please contact the administrator."
            }
            Self::AccessDenied => {
                "Your account does not have administrator privileges. Please contact the administrator if you believe this is an error."
            }
            Self::Verification => "The sign-in verification failed. Please try again.",
            Self::ServiceUnavailable => {
                "Unable to connect to the authentication service. Please try again later or contact the administrator if the problem persists."
            }
            Self::AuthenticationFailed => {
                "An unexpected error occurred during sign-in. Please try again or contact the administrator."
            }
        }
    }

    /// Where the browser is sent after a failed sign-in.
    pub fn login_redirect(self) -> String {
        format!("{}?error={}", super::LOGIN_PATH, self.code())
    }
}

/// Title and description for the login page alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthErrorMessage {
    pub title: &'static str,
    pub description: &'static str,
}

impl AuthErrorMessage {
    /// `None` when there is no error to show. Unrecognised codes still get a
    /// generic message.
    pub fn for_code(code: Option<&str>) -> Option<Self> {
        let code = code.map(str::trim).filter(|code| !code.is_empty())?;
        Some(match AuthErrorKind::from_code(code) {
            Some(kind) => kind.into(),
            None => Self {
                title: "Authentication Error",
                description: "An error occurred during sign-in. Please try again.",
            },
        })
    }
}

impl From<AuthErrorKind> for AuthErrorMessage {
    fn from(kind: AuthErrorKind) -> Self {
        Self {
            title: kind.title(),
            description: kind.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in AuthErrorKind::ALL {
            assert_eq!(AuthErrorKind::from_code(kind.code()), Some(kind));
            assert_eq!(kind.to_string(), kind.code());
        }
        assert_eq!(AuthErrorKind::from_code("accessdenied"), None);
    }

    #[test]
    fn test_login_redirect() {
        assert_eq!(
            AuthErrorKind::ServiceUnavailable.login_redirect(),
            "/login?error=ServiceUnavailable"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AuthErrorMessage::for_code(None), None);
        assert_eq!(AuthErrorMessage::for_code(Some("")), None);

        let denied = AuthErrorMessage::for_code(Some("AccessDenied")).unwrap();
        assert_eq!(denied.title, "Access Denied");

        let other = AuthErrorMessage::for_code(Some("OAuthCallback")).unwrap();
        assert_eq!(other.title, "Authentication Error");
        assert_eq!(
            other.description,
            "An error occurred during sign-in. Please try again."
        );
    }
}
