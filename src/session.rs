//! Explicit session context for the marketplace.
//!
//! There is no credential check: any non-empty email and password pair opens a
//! session. What the context adds is an owned, expiring token table that the
//! request guard consults, instead of a process-wide "logged in" flag.

use chrono::{DateTime, Duration, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub name: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// Display name is the part of the email before '@'
fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[derive(Clone)]
pub struct SessionContext {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionContext {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest("Please enter both email and password".into()));
        }

        let issued_at = Utc::now();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: display_name(email),
            issued_at,
            expires_at: issued_at + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        // Expired tokens that were never looked up again are dropped here
        sessions.retain(|_, s| !s.is_expired(issued_at));
        sessions.insert(session.token.clone(), session.clone());
        tracing::info!(
            user = %session.name,
            expires_at = %session.expires_at,
            active = sessions.len(),
            "Session opened"
        );
        Ok(session)
    }

    /// Returns the live session for `token`, evicting it if it has expired.
    pub async fn lookup(&self, token: &str) -> Option<Session> {
        let now = Utc::now();
        let read_guard = self.sessions.read().await;
        match read_guard.get(token) {
            Some(session) if !session.is_expired(now) => return Some(session.clone()),
            Some(_) => {}
            None => return None,
        }
        drop(read_guard); // Release read lock before acquiring write lock

        let mut write_guard = self.sessions.write().await;
        if write_guard.get(token).is_some_and(|s| s.is_expired(now)) {
            write_guard.remove(token);
            tracing::info!("Evicted expired session");
        }
        None
    }

    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token);
        if let Some(session) = &removed {
            tracing::info!(user = %session.name, "Session closed");
        }
        removed.is_some()
    }
}
