//! Path guard: only `/login` is public.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

fn is_login(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

/// Anonymous visitors go to `/login`, signed-in users are sent away from it.
pub fn decide(path: &str, authenticated: bool) -> RouteDecision {
    match (authenticated, is_login(path)) {
        (false, false) => RouteDecision::Redirect(LOGIN_PATH),
        (true, true) => RouteDecision::Redirect(HOME_PATH),
        _ => RouteDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_sent_to_login() {
        assert_eq!(decide("/", false), RouteDecision::Redirect(LOGIN_PATH));
        assert_eq!(decide("/reports/monthly", false), RouteDecision::Redirect(LOGIN_PATH));
        assert_eq!(decide("", false), RouteDecision::Redirect(LOGIN_PATH));
        assert_eq!(decide("/login", false), RouteDecision::Allow);
        assert_eq!(decide("/login/", false), RouteDecision::Allow);
    }

    #[test]
    fn test_signed_in_user_leaves_login() {
        assert_eq!(decide("/login", true), RouteDecision::Redirect(HOME_PATH));
        assert_eq!(decide("/", true), RouteDecision::Allow);
        assert_eq!(decide("/anything", true), RouteDecision::Allow);
    }

    #[test]
    fn test_login_prefix_is_not_login() {
        assert_eq!(decide("/login-help", false), RouteDecision::Redirect(LOGIN_PATH));
    }
}
