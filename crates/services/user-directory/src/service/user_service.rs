//! User service - Orchestrates the directory's use cases.
//!
//! Validates operator input, mutates the record store, drives the edit
//! session and reports every outcome to the notifier.

use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserForm};
use tracing::info;
use uuid::Uuid;

use crate::edit::{EditDraft, EditField, EditSession};
use crate::media::{resolve_photo, PhotoSource};
use crate::notify::{Notice, Notifier};
use crate::repository::UserStore;
use crate::view::{UserQuery, UserStats};

const MSG_ADDED: &str = "User added successfully";
const MSG_UPDATED: &str = "User updated successfully";
const MSG_DELETED: &str = "User deleted successfully";

/// Directory facade used by the CLI.
///
/// Unlike the store, operations that address a record by id report
/// [`AppError::NotFound`] when it does not exist.
pub struct UserManager {
    store: UserStore,
    session: EditSession,
    notifier: Arc<dyn Notifier>,
}

impl UserManager {
    pub fn new(store: UserStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            session: EditSession::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Current collection in stored order
    pub fn users(&self) -> &[User] {
        self.store.list()
    }

    pub fn get_user(&self, id: Uuid) -> AppResult<&User> {
        self.store.get(id).ok_or_not_found()
    }

    /// Rows to display for the given view inputs
    pub fn query(&self, query: &UserQuery) -> Vec<&User> {
        query.apply(self.store.list())
    }

    pub fn stats(&self) -> UserStats {
        UserStats::from_users(self.store.list())
    }

    /// Convert a photo for embedding, reporting rejected uploads.
    pub fn prepare_photo(&self, source: PhotoSource) -> AppResult<String> {
        source
            .into_data_url()
            .inspect_err(|e| self.notifier.notify(Notice::from_error(e)))
    }

    /// Resolve a photo argument (file path or data URL) and convert it.
    ///
    /// Every rejection, including files refused before they are read, is
    /// reported once.
    pub fn prepare_photo_arg(&self, value: &str) -> AppResult<String> {
        resolve_photo(value)
            .and_then(PhotoSource::into_data_url)
            .inspect_err(|e| self.notifier.notify(Notice::from_error(e)))
    }

    /// Validate the form and create the record.
    pub fn add_user(&mut self, form: UserForm, photo: Option<String>) -> AppResult<User> {
        let result = form
            .into_new_user()
            .map_err(AppError::from)
            .and_then(|new_user| {
                let new_user = match photo {
                    Some(photo) => new_user.with_photo(photo),
                    None => new_user,
                };
                self.store.create(new_user)
            });

        self.report(&result, MSG_ADDED);
        result
    }

    /// Replace a whole record.
    pub fn update_user(&mut self, user: User) -> AppResult<User> {
        let result = self
            .store
            .update(user.clone())
            .and_then(|found| if found { Ok(user) } else { Err(AppError::NotFound) });

        self.report(&result, MSG_UPDATED);
        result
    }

    pub fn delete_user(&mut self, id: Uuid) -> AppResult<()> {
        let result = self
            .store
            .delete(id)
            .and_then(|found| if found { Ok(()) } else { Err(AppError::NotFound) });

        self.report(&result, MSG_DELETED);
        result
    }

    // =========================================================================
    // Inline editing
    // =========================================================================

    /// Start editing a record. Returns the id of a discarded pending edit.
    pub fn begin_edit(&mut self, id: Uuid) -> AppResult<Option<Uuid>> {
        let user = self.store.get(id).ok_or_not_found()?;
        let discarded = self.session.begin(user);
        if let Some(previous) = discarded {
            info!(user_id = %previous, "Uncommitted edit discarded");
        }
        Ok(discarded)
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.session.editing_id()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.session.draft()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.session.has_changes()
    }

    pub fn stage(&mut self, field: EditField) -> AppResult<()> {
        self.session.stage(field)
    }

    pub fn cancel_edit(&mut self) -> Option<Uuid> {
        self.session.cancel()
    }

    /// Commit the staged edit to the store.
    pub fn commit_edit(&mut self) -> AppResult<User> {
        let result = self
            .session
            .commit(&mut self.store)
            .and_then(|saved| saved.ok_or(AppError::NotFound));

        self.report(&result, MSG_UPDATED);
        result
    }

    fn report<T>(&self, result: &AppResult<T>, success: &str) {
        let notice = match result {
            Ok(_) => Notice::success(success),
            Err(e) => Notice::from_error(e),
        };
        self.notifier.notify(notice);
    }
}
