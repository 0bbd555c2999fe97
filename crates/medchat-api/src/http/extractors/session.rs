//! Browser session cookie extractor.
//!
//! Reads the `medchat_session` cookie. A missing or unparseable cookie yields
//! a fresh [`SessionId`]; handlers then call [`SessionCookie::attach`] so the
//! browser keeps the new id.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

use medchat_types::chat::SessionId;

pub const SESSION_COOKIE: &str = "medchat_session";

/// The caller's session id, and whether it was just minted.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    pub id: SessionId,
    pub is_new: bool,
}

impl<S: Send + Sync> FromRequestParts<S> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match read_session_id(&parts.headers) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: SessionId::new(),
                is_new: true,
            },
        })
    }
}

impl SessionCookie {
    /// Add `Set-Cookie` to `response` when the session id is new.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

fn read_session_id(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_reads_session_among_other_cookies() {
        let id = SessionId::new();
        let found = read_session_id(&headers(&format!("theme=dark; {SESSION_COOKIE}={id}; x=1")));
        assert_eq!(found, Some(id));
    }

    #[test]
    fn test_invalid_or_missing_cookie_is_none() {
        assert_eq!(read_session_id(&headers(&format!("{SESSION_COOKIE}=not-a-uuid"))), None);
        assert_eq!(read_session_id(&headers("theme=dark")), None);
        assert_eq!(read_session_id(&HeaderMap::new()), None);
    }

    #[test]
    fn test_attach_sets_cookie_only_for_new_sessions() {
        let fresh = SessionCookie {
            id: SessionId::new(),
            is_new: true,
        };
        let response = fresh.attach(().into_response());
        let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}={}", fresh.id)));

        let known = SessionCookie {
            is_new: false,
            ..fresh
        };
        assert!(known.attach(().into_response()).headers().get(SET_COOKIE).is_none());
    }
}
