//! Routing Guard
//!
//! Pure decisions for the authenticated `/app` section and the debug header
//! chrome, kept free of browser types so the contract is testable.

/// Prefix under which every route requires a token.
pub const AUTHED_PREFIX: &str = "/app";

pub const LOG_IN_PATH: &str = "/log-in";

/// What the router does with a request for `path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested view.
    Allow,
    /// Redirect to the log-in view, forwarding the originally requested path
    /// when there is one to forward.
    RedirectToLogIn { original_path: Option<String> },
}

/// Decide whether `path` may render given the presence of a token. The
/// original path is forwarded so the log-in view can show contextual
/// messaging, except when the target is the log-in view itself.
pub fn guard(path: &str, has_token: bool) -> GuardOutcome {
    if !path.starts_with(AUTHED_PREFIX) || has_token {
        return GuardOutcome::Allow;
    }

    let original_path = if path == LOG_IN_PATH {
        None
    } else {
        Some(path.to_string())
    };
    GuardOutcome::RedirectToLogIn { original_path }
}

/// Back button shows everywhere except the index and the dashboard root.
pub fn show_back_button(path: &str) -> bool {
    path != "/" && path != AUTHED_PREFIX
}

/// Log-out button hides on the public entry views.
pub fn show_log_out_button(path: &str) -> bool {
    path != "/" && path != LOG_IN_PATH && path != "/sign-up"
}

/// The debug header itself hides on the index.
pub fn show_header(path: &str) -> bool {
    path != "/"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_paths_without_token_redirect_with_context() {
        for path in ["/app", "/app/create", "/app/entity/e-1/join"] {
            assert_eq!(
                guard(path, false),
                GuardOutcome::RedirectToLogIn {
                    original_path: Some(path.to_string())
                },
                "path {path}"
            );
        }
    }

    #[test]
    fn test_app_paths_with_token_render() {
        assert_eq!(guard("/app", true), GuardOutcome::Allow);
        assert_eq!(guard("/app/entity/e-1/administer", true), GuardOutcome::Allow);
    }

    #[test]
    fn test_public_paths_never_redirect() {
        for path in ["/", "/sign-up", "/log-in"] {
            assert_eq!(guard(path, false), GuardOutcome::Allow, "path {path}");
        }
    }

    #[test]
    fn test_log_in_target_carries_no_forwarding_context() {
        // Guards against a self-referential redirect loop.
        assert_eq!(
            guard(LOG_IN_PATH, false),
            GuardOutcome::Allow,
            "log-in is public"
        );
    }

    #[test]
    fn test_header_chrome_visibility() {
        assert!(!show_header("/"));
        assert!(show_header("/app"));

        assert!(!show_back_button("/"));
        assert!(!show_back_button("/app"));
        assert!(show_back_button("/app/create"));
        assert!(show_back_button("/log-in"));

        assert!(!show_log_out_button("/"));
        assert!(!show_log_out_button("/log-in"));
        assert!(!show_log_out_button("/sign-up"));
        assert!(show_log_out_button("/app"));
    }
}
