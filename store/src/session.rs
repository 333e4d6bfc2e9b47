//! # Session store — bearer token and derived identity
//!
//! [`SessionStore`] owns the only piece of cross-page shared mutable state in
//! the app: the bearer token and the [`UserIdentity`] derived from it. The
//! identity is always decoded from the token, never set on its own, so
//! `user.is_some()` holds exactly when the token is present and decodable.
//!
//! The token is treated as an opaque credential. [`decode_identity`] reads the
//! JWT payload segment without verifying the signature or expiry. The result
//! is display-only; the backend rejects the token if it is actually invalid.
//!
//! Lifecycle: [`SessionStore::hydrate`] restores a persisted token at startup
//! (discarding a corrupt one), [`login`](SessionStore::login) replaces the
//! session wholesale, [`logout`](SessionStore::logout) clears it wholesale.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::token_store::TokenStore;

/// Identity claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
}

/// Why a token could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a valid claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the payload segment of a JWT into a [`UserIdentity`].
///
/// No signature or expiry check is performed; an expired-but-decodable token
/// is accepted until the backend rejects a request made with it.
pub fn decode_identity(token: &str) -> Result<UserIdentity, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The session: a persisted bearer token plus the identity decoded from it.
#[derive(Clone, Debug)]
pub struct SessionStore<S: TokenStore> {
    store: S,
    token: Option<String>,
    user: Option<UserIdentity>,
}

impl<S: TokenStore> SessionStore<S> {
    /// Restore a session from persisted storage.
    ///
    /// A stored token that fails to decode is discarded and the storage
    /// cleared, so a corrupt value cannot resurface on the next load.
    pub fn hydrate(store: S) -> Self {
        let (token, user) = match store.load() {
            Some(token) => match decode_identity(&token) {
                Ok(user) => (Some(token), Some(user)),
                Err(err) => {
                    tracing::warn!("discarding undecodable stored token: {err}");
                    store.clear();
                    (None, None)
                }
            },
            None => (None, None),
        };
        Self { store, token, user }
    }

    /// Replace the session with a freshly issued token.
    ///
    /// If the token does not decode, the failure is logged and the prior
    /// session is left untouched.
    pub fn login(&mut self, token: &str) {
        match decode_identity(token) {
            Ok(user) => {
                self.store.save(token);
                self.token = Some(token.to_string());
                self.user = Some(user);
            }
            Err(err) => {
                tracing::error!("rejecting login token: {err}");
            }
        }
    }

    /// Clear the persisted token and the in-memory session unconditionally.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The raw bearer token, for `Authorization` headers.
    ///
    /// Read this at request time rather than capturing a copy, so a request
    /// issued after logout does not carry a just-invalidated token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }
}

impl<S: TokenStore> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.user == other.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryTokenStore;

    /// Unsigned JWT carrying the given payload JSON.
    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_identity_from_payload() {
        let token = token_with_payload(r#"{"id":42,"iat":1700000000}"#);
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.id, 42);
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert!(matches!(
            decode_identity("just-a-string"),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            decode_identity("a.b.c.d"),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn login_persists_token_and_sets_identity() {
        let storage = MemoryTokenStore::new();
        let mut session = SessionStore::hydrate(storage.clone());
        assert!(!session.is_logged_in());

        let token = token_with_payload(r#"{"id":7}"#);
        session.login(&token);

        assert!(session.is_logged_in());
        assert_eq!(session.user().map(|u| u.id), Some(7));
        assert_eq!(session.token(), Some(token.as_str()));
        assert_eq!(storage.load(), Some(token));
    }

    #[test]
    fn failed_login_leaves_prior_session_untouched() {
        let good = token_with_payload(r#"{"id":7}"#);
        let storage = MemoryTokenStore::with_token(&good);
        let mut session = SessionStore::hydrate(storage.clone());
        assert!(session.is_logged_in());

        session.login("garbage");

        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some(good.as_str()));
        assert_eq!(storage.load(), Some(good));
    }

    #[test]
    fn logout_clears_storage_and_state() {
        let token = token_with_payload(r#"{"id":7}"#);
        let storage = MemoryTokenStore::with_token(&token);
        let mut session = SessionStore::hydrate(storage.clone());

        session.logout();

        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
        assert!(storage.load().is_none());
    }

    #[test]
    fn hydrating_a_corrupt_token_clears_storage() {
        let storage = MemoryTokenStore::with_token("corrupt");
        let session = SessionStore::hydrate(storage.clone());

        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
        assert!(storage.load().is_none(), "corrupt token must not persist");
    }

    #[test]
    fn hydrating_a_valid_token_restores_the_session() {
        let token = token_with_payload(r#"{"id":9}"#);
        let storage = MemoryTokenStore::with_token(&token);
        let session = SessionStore::hydrate(storage);

        assert!(session.is_logged_in());
        assert_eq!(session.user().map(|u| u.id), Some(9));
    }
}
