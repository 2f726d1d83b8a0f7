//! Server-side session store
//!
//! Sessions are keyed by opaque UUID bearer tokens. Logout removes the entry,
//! which immediately invalidates the token; expired entries are swept by a
//! background task.

use dashmap::DashMap;
use shared::client::SessionUser;
use shared::util::now_millis;

/// One logged-in session
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token handed to the client
    pub token: String,
    /// Remote user id
    pub user_id: String,
    pub email: String,
    pub name: String,
    /// Token issued by the remote API on login
    pub api_token: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
}

/// Current user context injected into request extensions by the middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&Session> for CurrentUser {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id.clone(),
            email: session.email.clone(),
            name: session.name.clone(),
        }
    }
}

impl CurrentUser {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// In-memory session store
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl_millis: i64,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl_millis: ttl_minutes * 60 * 1000,
        }
    }

    /// Create a session and return its bearer token
    pub fn create(
        &self,
        user_id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        api_token: Option<String>,
    ) -> Session {
        let now = now_millis();
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            email: email.into(),
            name: name.into(),
            api_token,
            created_at: now,
            expires_at: now + self.ttl_millis,
        };
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Resolve a bearer token, removing it when expired
    pub fn get(&self, token: &str) -> Option<Session> {
        let expired = match self.sessions.get(token) {
            Some(session) if session.expires_at > now_millis() => return Some(session.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Remove a session (logout)
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop all expired sessions, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = now_millis();
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.expires_at > now);
        before - self.sessions.len()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = SessionStore::new(60);
        let session = store.create("7", "maria@teste.com", "Maria", Some("api-token".into()));

        let found = store.get(&session.token).expect("session should resolve");
        assert_eq!(found.user_id, "7");
        assert_eq!(found.email, "maria@teste.com");
        assert_eq!(found.api_token.as_deref(), Some("api-token"));
    }

    #[test]
    fn test_remove_invalidates_token() {
        let store = SessionStore::new(60);
        let session = store.create("7", "maria@teste.com", "Maria", None);

        assert!(store.remove(&session.token));
        assert!(store.get(&session.token).is_none());
        assert!(!store.remove(&session.token));
    }

    #[test]
    fn test_expired_session_is_dropped_on_get() {
        // Zero TTL: the session is already expired when created
        let store = SessionStore::new(0);
        let session = store.create("7", "maria@teste.com", "Maria", None);

        assert!(store.get(&session.token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let expired = SessionStore::new(0);
        expired.create("1", "a@b.c", "A", None);
        expired.create("2", "b@b.c", "B", None);
        assert_eq!(expired.purge_expired(), 2);

        let live = SessionStore::new(60);
        live.create("1", "a@b.c", "A", None);
        assert_eq!(live.purge_expired(), 0);
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_unknown_token() {
        let store = SessionStore::new(60);
        assert!(store.get("nope").is_none());
    }
}
