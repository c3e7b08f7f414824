//! Inline edit session for a single user record.

use common::{AppError, AppResult};
use domain::{User, UserForm, UserRole, UserStatus};
use tracing::debug;
use uuid::Uuid;

use crate::repository::UserStore;

/// Working copy of a record's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile_photo: Option<String>,
}

impl EditDraft {
    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            profile_photo: user.profile_photo.clone(),
        }
    }

    /// The original record with every draft field applied
    fn merge_into(&self, original: &User) -> User {
        User {
            id: original.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
            profile_photo: self.profile_photo.clone(),
        }
    }

    fn apply(&mut self, field: EditField) {
        match field {
            EditField::Name(name) => self.name = name,
            EditField::Email(email) => self.email = email,
            EditField::Role(role) => self.role = role,
            EditField::Status(status) => self.status = status,
            EditField::ProfilePhoto(photo) => self.profile_photo = photo,
        }
    }

    fn validate(&self) -> AppResult<()> {
        UserForm::new(
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
            self.status.as_str(),
        )
        .validate_form()?;
        Ok(())
    }
}

/// One staged field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Name(String),
    Email(String),
    Role(UserRole),
    Status(UserStatus),
    ProfilePhoto(Option<String>),
}

#[derive(Debug, Clone)]
struct ActiveEdit {
    original: User,
    draft: EditDraft,
}

/// Tracks at most one record being edited.
///
/// Staged changes live only in the draft until [`EditSession::commit`].
/// Starting an edit on another record discards the pending one; nothing is
/// saved implicitly.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    current: Option<ActiveEdit>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `user`, replacing any edit in progress.
    ///
    /// Returns the id of the previous edit if it had unsaved changes.
    pub fn begin(&mut self, user: &User) -> Option<Uuid> {
        let discarded = self
            .current
            .take()
            .filter(|edit| edit.draft != EditDraft::from_user(&edit.original))
            .map(|edit| edit.original.id);

        if let Some(id) = discarded {
            debug!(user_id = %id, "Discarded uncommitted edit");
        }

        self.current = Some(ActiveEdit {
            original: user.clone(),
            draft: EditDraft::from_user(user),
        });
        debug!(user_id = %user.id, "Editing user");

        discarded
    }

    /// Id of the record being edited
    pub fn editing_id(&self) -> Option<Uuid> {
        self.current.as_ref().map(|edit| edit.original.id)
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.current.as_ref().map(|edit| &edit.draft)
    }

    /// Whether the draft differs from the record as it was when editing began
    pub fn has_changes(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|edit| edit.draft != EditDraft::from_user(&edit.original))
    }

    /// Update the working copy only.
    pub fn stage(&mut self, field: EditField) -> AppResult<()> {
        let edit = self.current.as_mut().ok_or_else(no_edit)?;
        edit.draft.apply(field);
        Ok(())
    }

    /// Drop the working copy without touching the store.
    pub fn cancel(&mut self) -> Option<Uuid> {
        self.current.take().map(|edit| {
            debug!(user_id = %edit.original.id, "Edit cancelled");
            edit.original.id
        })
    }

    /// Write the draft merged over the original record back to the store.
    ///
    /// An invalid draft is rejected and the session stays open. Otherwise
    /// the session is closed whatever the store reports. Returns the saved
    /// record, or None if it no longer exists in the store.
    pub fn commit(&mut self, store: &mut UserStore) -> AppResult<Option<User>> {
        let edit = self.current.as_ref().ok_or_else(no_edit)?;
        edit.draft.validate()?;

        let merged = edit.draft.merge_into(&edit.original);
        self.current = None;

        let found = store.update(merged.clone())?;
        Ok(found.then_some(merged))
    }
}

fn no_edit() -> AppError {
    AppError::validation("No user is being edited")
}
