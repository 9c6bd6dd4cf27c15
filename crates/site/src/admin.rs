//! The admin session: unlock gate, content CRUD, the buffered project
//! editor, two-step deletes, and image uploads.
//!
//! Edits come in two deliberate modes. Bulk structural edits (a whole
//! project) accumulate in the buffered editor and commit via one explicit
//! [`save_project`](AdminSession::save_project); single-field quick edits
//! (profile image, inline experience fields, identity fields) write
//! immediately. Every store failure propagates to the caller untried and
//! leaves local state as it was.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::watch;

use nexus_core::booking::AppointmentRequest;
use nexus_core::experience::{Experience, UpdateExperience};
use nexus_core::identity::{AboutContent, ContactChannels, SiteIdentity};
use nexus_core::message::ContactMessage;
use nexus_core::project::Project;
use nexus_core::{booking, experience, identity, message, project, seed};
use nexus_core::{AdminPanel, CoreError, DocId};
use nexus_store::{typed, AssetStore, ContentStore};

use crate::access::AccessPolicy;
use crate::error::SiteError;
use crate::sync::ContentSync;

// ---------------------------------------------------------------------------
// Editor and delete state
// ---------------------------------------------------------------------------

/// The buffered project editor: field edits accumulate in `draft` and
/// commit in one save.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEditor {
    pub id: DocId,
    pub draft: Project,
}

/// Which collection a pending delete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Project,
    Experience,
    Appointment,
    Message,
}

impl DeleteTarget {
    pub fn collection(self) -> &'static str {
        match self {
            Self::Project => project::COLLECTION,
            Self::Experience => experience::COLLECTION,
            Self::Appointment => booking::COLLECTION,
            Self::Message => message::COLLECTION,
        }
    }
}

/// A delete awaiting explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub target: DeleteTarget,
    pub id: DocId,
}

// ---------------------------------------------------------------------------
// AdminSession
// ---------------------------------------------------------------------------

/// Locked/unlocked editing session over the shared content.
///
/// Lists mirror the [`ContentSync`] read-models; there is no separate
/// fetch. Every operation other than [`unlock`](Self::unlock) returns
/// [`CoreError::Unauthorized`] while locked.
pub struct AdminSession {
    store: Arc<dyn ContentStore>,
    assets: Arc<dyn AssetStore>,
    policy: Arc<dyn AccessPolicy>,
    unlocked: bool,
    denied_attempts: u32,
    panel: Option<AdminPanel>,
    editor: Option<ProjectEditor>,
    pending_delete: Option<PendingDelete>,
    experiences: watch::Receiver<Vec<Experience>>,
    projects: watch::Receiver<Vec<Project>>,
    appointments: watch::Receiver<Vec<AppointmentRequest>>,
    messages: watch::Receiver<Vec<ContactMessage>>,
    identity: watch::Receiver<SiteIdentity>,
}

impl AdminSession {
    pub fn new(
        store: Arc<dyn ContentStore>,
        assets: Arc<dyn AssetStore>,
        policy: Arc<dyn AccessPolicy>,
        sync: &ContentSync,
    ) -> Self {
        Self {
            store,
            assets,
            policy,
            unlocked: false,
            denied_attempts: 0,
            panel: None,
            editor: None,
            pending_delete: None,
            experiences: sync.experiences(),
            projects: sync.projects(),
            appointments: sync.appointments(),
            messages: sync.messages(),
            identity: sync.identity(),
        }
    }

    // -- Lock state ---------------------------------------------------------

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Denied unlock attempts this session. Counted and logged; no lockout.
    pub fn denied_attempts(&self) -> u32 {
        self.denied_attempts
    }

    /// Unlock with a submitted access code.
    pub fn unlock(&mut self, code: &str) -> Result<(), CoreError> {
        if self.policy.verify(code) {
            self.unlocked = true;
            tracing::info!("Admin session unlocked");
            Ok(())
        } else {
            self.denied_attempts += 1;
            tracing::warn!(denied_attempts = self.denied_attempts, "Admin unlock denied");
            Err(CoreError::Unauthorized("Access code rejected".into()))
        }
    }

    /// Lock unconditionally, closing any open editor, panel, and pending
    /// delete.
    pub fn lock(&mut self) {
        self.unlocked = false;
        self.panel = None;
        self.editor = None;
        self.pending_delete = None;
        tracing::info!("Admin session locked");
    }

    fn ensure_unlocked(&self) -> Result<(), CoreError> {
        if self.unlocked {
            Ok(())
        } else {
            Err(CoreError::Unauthorized("Admin session is locked".into()))
        }
    }

    // -- Panels -------------------------------------------------------------

    pub fn open_panel(&mut self, panel: AdminPanel) -> Result<(), CoreError> {
        self.ensure_unlocked()?;
        self.panel = Some(panel);
        Ok(())
    }

    pub fn close_panel(&mut self) {
        self.panel = None;
    }

    pub fn panel(&self) -> Option<AdminPanel> {
        self.panel
    }

    // -- Lists (read-model mirrors) -----------------------------------------

    pub fn experiences(&self) -> Result<Vec<Experience>, CoreError> {
        self.ensure_unlocked()?;
        Ok(self.experiences.borrow().clone())
    }

    pub fn projects(&self) -> Result<Vec<Project>, CoreError> {
        self.ensure_unlocked()?;
        Ok(self.projects.borrow().clone())
    }

    pub fn appointments(&self) -> Result<Vec<AppointmentRequest>, CoreError> {
        self.ensure_unlocked()?;
        Ok(self.appointments.borrow().clone())
    }

    pub fn messages(&self) -> Result<Vec<ContactMessage>, CoreError> {
        self.ensure_unlocked()?;
        Ok(self.messages.borrow().clone())
    }

    pub fn identity(&self) -> Result<SiteIdentity, CoreError> {
        self.ensure_unlocked()?;
        Ok(self.identity.borrow().clone())
    }

    // -- Projects: create, buffered editor, save ----------------------------

    /// Insert the placeholder project and immediately open it for editing.
    pub async fn create_project(&mut self) -> Result<DocId, SiteError> {
        self.ensure_unlocked()?;
        let mut draft = seed::placeholder_project();
        let fields = typed::encode_fields(&draft)?;
        let id = self.store.create(project::COLLECTION, fields).await?;
        tracing::info!(id = %id, "Project created");
        draft.id = id.clone();
        self.editor = Some(ProjectEditor {
            id: id.clone(),
            draft,
        });
        Ok(id)
    }

    /// Open the buffered editor on an existing project.
    pub fn open_editor(&mut self, project: Project) -> Result<(), CoreError> {
        self.ensure_unlocked()?;
        self.editor = Some(ProjectEditor {
            id: project.id.clone(),
            draft: project,
        });
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn editor(&self) -> Option<&ProjectEditor> {
        self.editor.as_ref()
    }

    /// Mutable access to the editor draft for field edits. Nothing is
    /// written until [`save_project`](Self::save_project).
    pub fn editor_mut(&mut self) -> Option<&mut Project> {
        if !self.unlocked {
            return None;
        }
        self.editor.as_mut().map(|editor| &mut editor.draft)
    }

    /// Write the whole editor draft (minus the id) back in one call.
    ///
    /// A validation or store failure leaves the editor open and the draft
    /// intact.
    pub async fn save_project(&mut self) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        let editor = self
            .editor
            .as_ref()
            .ok_or_else(|| CoreError::Validation("No project open in the editor".into()))?;
        project::validate_draft(&editor.draft)?;

        let fields = typed::encode_fields(&editor.draft)?;
        self.store
            .set(project::COLLECTION, &editor.id, fields, false)
            .await?;
        tracing::info!(id = %editor.id, "Project saved");
        Ok(())
    }

    // -- Experiences: immediate writes --------------------------------------

    /// Insert the placeholder experience. Immediate write, no editor.
    pub async fn add_experience(&self) -> Result<DocId, SiteError> {
        self.ensure_unlocked()?;
        let fields = typed::encode_fields(&seed::placeholder_experience())?;
        let id = self.store.create(experience::COLLECTION, fields).await?;
        tracing::info!(id = %id, "Experience created");
        Ok(id)
    }

    /// Inline partial update: only the present fields are written.
    pub async fn update_experience(
        &self,
        id: &str,
        update: UpdateExperience,
    ) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        let partial = serde_json::to_value(&update).map_err(nexus_store::StoreError::from)?;
        self.store
            .update(experience::COLLECTION, id, partial)
            .await?;
        tracing::info!(id, "Experience updated");
        Ok(())
    }

    // -- Identity: merge writes ---------------------------------------------

    /// Save the about and contact blocks, leaving `displayName` and
    /// `profileImage` untouched (partial merge).
    pub async fn save_identity(
        &self,
        about: AboutContent,
        contact: ContactChannels,
    ) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        let fields = json!({ "about": about, "contact": contact });
        self.store
            .set(identity::CONFIG_COLLECTION, identity::CONFIG_DOC_ID, fields, true)
            .await?;
        tracing::info!("Site identity saved");
        Ok(())
    }

    pub async fn set_display_name(&self, name: &str) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        self.store
            .set(
                identity::CONFIG_COLLECTION,
                identity::CONFIG_DOC_ID,
                json!({ "displayName": name }),
                true,
            )
            .await?;
        Ok(())
    }

    pub async fn set_profile_image(&self, url: &str) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        self.store
            .set(
                identity::CONFIG_COLLECTION,
                identity::CONFIG_DOC_ID,
                json!({ "profileImage": url }),
                true,
            )
            .await?;
        Ok(())
    }

    // -- Deletes: two-step --------------------------------------------------

    /// Record a delete awaiting confirmation.
    pub fn request_delete(&mut self, target: DeleteTarget, id: impl Into<DocId>) -> Result<(), CoreError> {
        self.ensure_unlocked()?;
        self.pending_delete = Some(PendingDelete {
            target,
            id: id.into(),
        });
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Issue the confirmed delete. When the deleted project is the one open
    /// in the buffered editor, the editor closes as part of the same
    /// completion. A store failure leaves the pending delete (and editor)
    /// as they were.
    pub async fn confirm_delete(&mut self) -> Result<(), SiteError> {
        self.ensure_unlocked()?;
        let pending = self
            .pending_delete
            .clone()
            .ok_or_else(|| CoreError::Validation("No delete pending confirmation".into()))?;

        self.store
            .delete(pending.target.collection(), &pending.id)
            .await?;
        tracing::info!(collection = pending.target.collection(), id = %pending.id, "Document deleted");

        self.pending_delete = None;
        if pending.target == DeleteTarget::Project {
            if let Some(editor) = &self.editor {
                if editor.id == pending.id {
                    self.editor = None;
                }
            }
        }
        Ok(())
    }

    // -- Image uploads ------------------------------------------------------

    /// Upload a binary payload under `{folder}/{unix_millis}_{file_name}`
    /// and return its retrieval URL.
    pub async fn upload_image(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, SiteError> {
        self.ensure_unlocked()?;
        let key = format!("{folder}/{}_{file_name}", Utc::now().timestamp_millis());
        let asset = self.assets.upload(&key, bytes).await?;
        let url = self.assets.download_url(&asset).await?;
        tracing::info!(key, size = bytes.len(), "Image uploaded");
        Ok(url)
    }

    /// Upload a profile image and persist its URL immediately.
    ///
    /// Upload and the follow-up write are two independently-failable
    /// operations; a failure between them leaves the asset unreferenced.
    pub async fn upload_profile_image(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, SiteError> {
        let url = self.upload_image("profile", file_name, bytes).await?;
        if let Err(error) = self.set_profile_image(&url).await {
            tracing::warn!(%url, %error, "Profile image uploaded but not persisted");
            return Err(error);
        }
        Ok(url)
    }

    /// Upload a company logo and persist it to the experience immediately.
    pub async fn upload_experience_logo(
        &self,
        id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, SiteError> {
        let url = self.upload_image("experiences", file_name, bytes).await?;
        if let Err(error) = self
            .store
            .update(experience::COLLECTION, id, json!({ "logo": url }))
            .await
        {
            tracing::warn!(%url, %error, "Logo uploaded but not persisted");
            return Err(error.into());
        }
        Ok(url)
    }

    /// Upload a cover image into the open editor draft. No id-bound write
    /// happens until save.
    pub async fn upload_project_cover(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, SiteError> {
        let url = self.upload_image("projects", file_name, bytes).await?;
        let draft = self
            .editor_mut()
            .ok_or_else(|| CoreError::Validation("No project open in the editor".into()))?;
        draft.image = url.clone();
        Ok(url)
    }

    /// Upload a gallery image into the open editor draft.
    pub async fn upload_project_gallery_image(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, SiteError> {
        let url = self.upload_image("projects", file_name, bytes).await?;
        let draft = self
            .editor_mut()
            .ok_or_else(|| CoreError::Validation("No project open in the editor".into()))?;
        draft.gallery.push(url.clone());
        Ok(url)
    }
}
