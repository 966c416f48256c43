//! Cookie-backed session storage.
//!
//! Two cookies are kept: `token` holds the bearer token, `session` holds the
//! URL-encoded JSON [`SessionInfo`] used for menu gating.

use contracts::system::auth::SessionInfo;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

pub const TOKEN_COOKIE: &str = "token";
pub const SESSION_COOKIE: &str = "session";

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn read_cookies() -> String {
    html_document()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

fn write_cookie(assignment: &str) {
    if let Some(doc) = html_document() {
        if let Err(e) = doc.set_cookie(assignment) {
            log::warn!("Failed to write cookie: {:?}", e);
        }
    }
}

/// Find a cookie value in a `document.cookie` string.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Build a `document.cookie` assignment. `max_age_secs <= 0` expires it.
pub fn cookie_assignment(name: &str, value: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        name,
        value,
        max_age_secs.max(0)
    )
}

pub fn encode_session(info: &SessionInfo) -> Option<String> {
    serde_json::to_string(info)
        .ok()
        .map(|json| urlencoding::encode(&json).into_owned())
}

pub fn decode_session(raw: &str) -> Option<SessionInfo> {
    let json = urlencoding::decode(raw).ok()?;
    serde_json::from_str(&json).ok()
}

/// Get bearer token from the cookie store
pub fn get_token() -> Option<String> {
    parse_cookie(&read_cookies(), TOKEN_COOKIE)
        .and_then(|raw| urlencoding::decode(&raw).ok().map(|t| t.into_owned()))
}

/// Get session profile from the cookie store
pub fn get_session() -> Option<SessionInfo> {
    parse_cookie(&read_cookies(), SESSION_COOKIE).and_then(|raw| decode_session(&raw))
}

/// Save token and session profile
pub fn save_session(token: &str, info: &SessionInfo, max_age_secs: i64) {
    write_cookie(&cookie_assignment(
        TOKEN_COOKIE,
        &urlencoding::encode(token),
        max_age_secs,
    ));
    match encode_session(info) {
        Some(encoded) => write_cookie(&cookie_assignment(SESSION_COOKIE, &encoded, max_age_secs)),
        None => log::warn!("Failed to encode session for {}", info.email),
    }
}

/// Clear both cookies
pub fn clear_session() {
    write_cookie(&cookie_assignment(TOKEN_COOKIE, "", 0));
    write_cookie(&cookie_assignment(SESSION_COOKIE, "", 0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    #[test]
    fn test_parse_cookie() {
        let cookies = "theme=dark; token=abc.def=; session=%7B%7D";
        assert_eq!(parse_cookie(cookies, "token"), Some("abc.def=".to_string()));
        assert_eq!(parse_cookie(cookies, "theme"), Some("dark".to_string()));
        assert_eq!(parse_cookie(cookies, "missing"), None);
        assert_eq!(parse_cookie("token=", "token"), None);
        assert_eq!(parse_cookie("", "token"), None);
    }

    #[test]
    fn test_session_encoding_survives_cookie_parsing() {
        let info = SessionInfo {
            name: "Rina Putri; Admin".into(),
            email: "rina@playpro.id".into(),
            role: UserRole::Admin,
        };
        let encoded = encode_session(&info).unwrap();
        assert!(!encoded.contains(';'));

        let cookies = format!("token=t; session={}", encoded);
        let raw = parse_cookie(&cookies, SESSION_COOKIE).unwrap();
        assert_eq!(decode_session(&raw), Some(info));
    }

    #[test]
    fn test_garbage_session_is_ignored() {
        assert_eq!(decode_session("not-json"), None);
    }

    #[test]
    fn test_cookie_assignment() {
        assert_eq!(
            cookie_assignment("token", "abc", 3600),
            "token=abc; path=/; max-age=3600; SameSite=Lax"
        );
        assert_eq!(
            cookie_assignment("token", "", -5),
            "token=; path=/; max-age=0; SameSite=Lax"
        );
    }
}
