//! Repository for the `users` collection.

use questboard_store::{to_fields, CollectionPath, StoreError, StoreHandle};

use crate::models::user::User;
use crate::names::USERS;

/// Provides profile upsert and lookup, keyed by auth uid.
pub struct UserRepo {
    store: StoreHandle,
    users: CollectionPath,
}

impl UserRepo {
    /// Create a new repository over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            users: CollectionPath::new(USERS),
        }
    }

    /// Write the sign-in profile at `users/{uid}`.
    ///
    /// Runs on every sign-in. An existing document's role survives the
    /// overwrite, so a returning admin is not demoted by the default
    /// role the auth layer supplies.
    pub async fn upsert(&self, profile: &User) -> Result<(), StoreError> {
        let path = self.users.doc(profile.uid.as_str());
        let existing = self.store.get_document(&path).await?.decode::<User>()?;

        let mut stored = profile.clone();
        if let Some(previous) = existing {
            stored.role = previous.role;
        }
        self.store.set_document(&path, to_fields(&stored)?).await?;
        tracing::debug!(uid = %profile.uid, "Upserted user");
        Ok(())
    }

    /// Look up a profile by uid.
    pub async fn find(&self, uid: &str) -> Result<Option<User>, StoreError> {
        self.store.get_document(&self.users.doc(uid)).await?.decode()
    }
}
