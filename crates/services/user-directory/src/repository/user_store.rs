//! Record store: the authoritative, persisted user collection.

use std::collections::HashSet;
use std::sync::Arc;

use common::{AppResult, USERS_STORAGE_KEY};
use domain::{NewUser, User};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::seed::seed_users;
use super::slot::SlotStorage;

/// Ordered user collection mirrored into one durable slot.
///
/// The store exclusively owns the collection; callers get read-only slices.
/// Every mutation rewrites the whole slot before returning. If that write
/// fails the in-memory change is kept and the storage error is returned, so
/// the session stays consistent even when durability is lost.
///
/// `update` and `delete` on an unknown id are silent no-ops that report
/// `false` and do not touch storage.
pub struct UserStore {
    storage: Arc<dyn SlotStorage>,
    key: String,
    users: Vec<User>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("key", &self.key)
            .field("users", &self.users.len())
            .finish()
    }
}

impl UserStore {
    /// Rehydrate from the default `users` slot, seeding from the bundled
    /// dataset when it is absent or unreadable.
    pub fn open(storage: Arc<dyn SlotStorage>) -> Self {
        Self::open_with(storage, USERS_STORAGE_KEY, seed_users())
    }

    /// Rehydrate from `key`, falling back to `seed`.
    ///
    /// Falling back does not write the seed: unreadable content stays on
    /// disk until the first mutation replaces it.
    pub fn open_with(storage: Arc<dyn SlotStorage>, key: impl Into<String>, seed: Vec<User>) -> Self {
        let key = key.into();
        let users = match load(storage.as_ref(), &key) {
            Some(users) => {
                info!("Loaded {} users from slot {:?}", users.len(), key);
                users
            }
            None => {
                info!("Seeding {} users for slot {:?}", seed.len(), key);
                seed
            }
        };

        Self {
            storage,
            key,
            users,
        }
    }

    /// Current collection in stored order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Slot key the collection is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a new record with a freshly generated id.
    ///
    /// `data` must already be validated; the store does not re-check it.
    pub fn create(&mut self, data: NewUser) -> AppResult<User> {
        let user = User::new(self.fresh_id(), data);
        self.users.push(user.clone());
        info!(user_id = %user.id, "User created");

        self.persist()?;
        Ok(user)
    }

    /// Replace the record with the same id. Returns false if there is none.
    pub fn update(&mut self, user: User) -> AppResult<bool> {
        let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) else {
            debug!(user_id = %user.id, "Update ignored: no such user");
            return Ok(false);
        };

        *slot = user;
        info!(user_id = %slot.id, "User updated");

        self.persist()?;
        Ok(true)
    }

    /// Remove the record with `id`. Returns false if there is none.
    pub fn delete(&mut self, id: Uuid) -> AppResult<bool> {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            debug!(user_id = %id, "Delete ignored: no such user");
            return Ok(false);
        };

        self.users.remove(index);
        info!(user_id = %id, "User deleted");

        self.persist()?;
        Ok(true)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.contains(id) {
                return id;
            }
        }
    }

    fn persist(&self) -> AppResult<()> {
        let json = serde_json::to_string(&self.users)?;
        self.storage
            .write(&self.key, &json)
            .inspect_err(|e| warn!("Failed to persist slot {:?}: {}", self.key, e))?;

        debug!("Persisted {} users to slot {:?}", self.users.len(), self.key);
        Ok(())
    }
}

/// Read and decode a persisted collection. None means "use the seed".
fn load(storage: &dyn SlotStorage, key: &str) -> Option<Vec<User>> {
    let content = match storage.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("Slot {:?} is empty", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read slot {:?}: {}", key, e);
            return None;
        }
    };

    let users: Vec<User> = match serde_json::from_str(&content) {
        Ok(users) => users,
        Err(e) => {
            warn!("Slot {:?} holds invalid content: {}", key, e);
            return None;
        }
    };

    let mut seen = HashSet::with_capacity(users.len());
    if let Some(dup) = users.iter().find(|u| !seen.insert(u.id)) {
        warn!("Slot {:?} holds duplicate id {}", key, dup.id);
        return None;
    }

    Some(users)
}

#[cfg(test)]
mod tests {
    use domain::{UserRole, UserStatus};

    use super::*;
    use crate::repository::slot::MockSlotStorage;
    use crate::repository::MemorySlotStorage;
    use common::AppError;

    fn new_user(name: &str, email: &str, role: UserRole, status: UserStatus) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            profile_photo: None,
        }
    }

    fn seed() -> Vec<User> {
        vec![
            User::new(
                Uuid::new_v4(),
                new_user("Ann", "ann@example.com", UserRole::User, UserStatus::Active),
            ),
            User::new(
                Uuid::new_v4(),
                new_user("Bob", "bob@example.com", UserRole::Admin, UserStatus::Inactive),
            ),
        ]
    }

    fn store_with(storage: MockSlotStorage) -> UserStore {
        UserStore::open_with(Arc::new(storage), "users", seed())
    }

    #[test]
    fn test_missing_slot_falls_back_to_seed_without_writing() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().times(1).returning(|_| Ok(None));
        storage.expect_write().never();

        let store = store_with(storage);

        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "Ann");
    }

    #[test]
    fn test_read_failure_falls_back_to_seed() {
        let mut storage = MockSlotStorage::new();
        storage
            .expect_read()
            .returning(|_| Err(AppError::storage("unreadable")));

        let store = store_with(storage);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_corrupt_content_falls_back_to_seed() {
        let mut storage = MockSlotStorage::new();
        storage
            .expect_read()
            .returning(|_| Ok(Some("{not json".to_string())));

        let store = store_with(storage);
        assert_eq!(store.list()[1].name, "Bob");
    }

    #[test]
    fn test_duplicate_ids_fall_back_to_seed() {
        let user = seed().remove(0);
        let content = serde_json::to_string(&vec![user.clone(), user]).unwrap();

        let mut storage = MockSlotStorage::new();
        storage
            .expect_read()
            .returning(move |_| Ok(Some(content.clone())));

        let store = store_with(storage);
        assert_eq!(store.len(), 2);
        assert_ne!(store.list()[0].id, store.list()[1].id);
    }

    #[test]
    fn test_persisted_collection_wins_over_seed() {
        let persisted = vec![seed().remove(1)];
        let storage = MemorySlotStorage::with_slot("users", serde_json::to_string(&persisted).unwrap());

        let store = UserStore::open_with(Arc::new(storage), "users", seed());

        assert_eq!(store.list(), persisted.as_slice());
    }

    #[test]
    fn test_create_appends_and_persists() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().times(1).returning(|_, _| Ok(()));

        let mut store = store_with(storage);
        let created = store
            .create(new_user("Cleo", "c@x.com", UserRole::Guest, UserStatus::Active))
            .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[2], created);
        assert_eq!(created.name, "Cleo");
        assert_eq!(created.email, "c@x.com");
        assert_eq!(created.role, UserRole::Guest);
        assert_eq!(created.status, UserStatus::Active);
        assert!(store.list()[..2].iter().all(|u| u.id != created.id));
    }

    #[test]
    fn test_write_failure_keeps_in_memory_change() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .returning(|_, _| Err(AppError::storage("quota exceeded")));

        let mut store = store_with(storage);
        let result = store.create(new_user("Cleo", "c@x.com", UserRole::Guest, UserStatus::Active));

        assert!(result.unwrap_err().is_storage());
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[2].name, "Cleo");
    }

    #[test]
    fn test_update_replaces_matching_record_only() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().times(1).returning(|_, _| Ok(()));

        let mut store = store_with(storage);
        let ann = store.list()[0].clone();
        let bob = store.list()[1].clone();

        let updated = store
            .update(User {
                status: UserStatus::Active,
                ..bob.clone()
            })
            .unwrap();

        assert!(updated);
        assert_eq!(store.get(bob.id).unwrap().status, UserStatus::Active);
        assert_eq!(store.get(ann.id), Some(&ann));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().never();

        let mut store = store_with(storage);
        let before = store.list().to_vec();
        let stranger = User {
            id: Uuid::new_v4(),
            ..before[0].clone()
        };

        assert!(!store.update(stranger).unwrap());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut storage = MockSlotStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().times(1).returning(|_, _| Ok(()));

        let mut store = store_with(storage);
        let ann_id = store.list()[0].id;

        assert!(store.delete(ann_id).unwrap());
        let after_first = store.list().to_vec();

        assert!(!store.delete(ann_id).unwrap());
        assert_eq!(store.list(), after_first.as_slice());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut store = UserStore::open_with(Arc::new(MemorySlotStorage::new()), "users", Vec::new());

        for i in 0..50 {
            store
                .create(new_user(
                    &format!("User {i}"),
                    &format!("u{i}@example.com"),
                    UserRole::User,
                    UserStatus::Active,
                ))
                .unwrap();
        }

        let ids: HashSet<_> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_every_mutation_writes_full_collection() {
        let storage = Arc::new(MemorySlotStorage::new());
        let mut store = UserStore::open_with(storage.clone(), "users", seed());

        let cleo = store
            .create(new_user("Cleo", "c@x.com", UserRole::Guest, UserStatus::Active))
            .unwrap();
        store.delete(store.list()[0].id).unwrap();

        let persisted: Vec<User> =
            serde_json::from_str(&storage.read("users").unwrap().unwrap()).unwrap();
        assert_eq!(persisted, store.list());
        assert_eq!(persisted.last(), Some(&cleo));
    }
}
