/**
 * In-Memory User Repository
 *
 * Volatile backend for development and tests. Users live in a pair of maps
 * (primary by id, secondary index by email) next to a monotonically
 * increasing id counter starting at 1. All three sit behind one RwLock so
 * concurrent writers always see the maps and the counter move together.
 *
 * Every instance is an isolated store; nothing survives a restart and
 * nothing is shared across instances.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{RepositoryError, UserRepository};
use crate::auth::users::User;

struct Inner {
    users: HashMap<i64, User>,
    ids_by_email: HashMap<String, i64>,
    next_id: i64,
}

/// Volatile in-process user store.
pub struct MemoryUserRepository {
    inner: RwLock<Inner>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                ids_by_email: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(
        &self,
        email: &str,
        name: &str,
        hashed_password: &str,
    ) -> Result<User, RepositoryError> {
        let mut inner = self.inner.write().await;

        // Checked under the same write lock that inserts, so two concurrent
        // creates for one email cannot both pass.
        if inner.ids_by_email.contains_key(email) {
            return Err(RepositoryError::DuplicateEmail);
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let user = User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            hashed_password: hashed_password.to_string(),
            created_at: now,
            updated_at: now,
        };

        inner.ids_by_email.insert(email.to_string(), id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let inner = self.inner.read().await;
        let user = inner
            .ids_by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }
}
