//! User context: language preference and the logged-in farmer profile
//!
//! The context is an explicit object handed to whoever needs it. It is
//! hydrated once at startup from a [`ProfileStore`] (or defaults) and written
//! back on every change. There is no teardown beyond process exit.

use crate::{Error, Language, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// File name of the persisted context inside the root folder
pub const CONTEXT_FILE_NAME: &str = "user_context.json";

/// Farmer profile captured at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub mobile_number: String,
    pub first_name: String,
    pub last_name: String,
    pub state: String,
    pub district: String,
    pub taluka: String,
    pub village: String,
    pub language: Language,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub mobile_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub taluka: Option<String>,
    pub village: Option<String>,
    pub language: Option<Language>,
}

impl UserProfile {
    fn merge(&mut self, update: ProfileUpdate) {
        if let Some(v) = update.mobile_number {
            self.mobile_number = v;
        }
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.state {
            self.state = v;
        }
        if let Some(v) = update.district {
            self.district = v;
        }
        if let Some(v) = update.taluka {
            self.taluka = v;
        }
        if let Some(v) = update.village {
            self.village = v;
        }
        if let Some(v) = update.language {
            self.language = v;
        }
    }

    /// "First Last" for greetings
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Document written by a [`ProfileStore`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedContext {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Storage backend for the user context
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the stored document, `None` when nothing was saved yet
    async fn load(&self) -> Result<Option<PersistedContext>>;

    /// Replace the stored document
    async fn save(&self, context: &PersistedContext) -> Result<()>;
}

/// JSON file under the root folder
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<root_folder>/user_context.json`
    pub fn in_root_folder(root_folder: &Path) -> Self {
        Self::new(root_folder.join(CONTEXT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load(&self) -> Result<Option<PersistedContext>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let context = serde_json::from_str(&content)?;
        Ok(Some(context))
    }

    async fn save(&self, context: &PersistedContext) -> Result<()> {
        let content = serde_json::to_string_pretty(context)?;
        // Write to a sibling then rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// Volatile store for tests and ephemeral deployments
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<PersistedContext>>,
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn load(&self) -> Result<Option<PersistedContext>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| Error::Internal("profile store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, context: &PersistedContext) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::Internal("profile store lock poisoned".to_string()))?;
        *guard = Some(context.clone());
        Ok(())
    }
}

/// Language + auth state for one running service
pub struct UserContext {
    store: Box<dyn ProfileStore>,
    state: PersistedContext,
}

impl std::fmt::Debug for UserContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserContext")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl UserContext {
    /// Hydrate from the store, falling back to `default_language` and no user
    ///
    /// An unreadable document is logged and replaced by defaults rather than
    /// failing startup.
    pub async fn hydrate(store: Box<dyn ProfileStore>, default_language: Language) -> Self {
        let state = match store.load().await {
            Ok(Some(stored)) => {
                info!(
                    language = %stored.language,
                    logged_in = stored.user.is_some(),
                    "User context restored from storage"
                );
                stored
            }
            Ok(None) => {
                debug!("No stored user context, using defaults");
                PersistedContext {
                    language: default_language,
                    user: None,
                }
            }
            Err(e) => {
                warn!("Stored user context unreadable ({}), using defaults", e);
                PersistedContext {
                    language: default_language,
                    user: None,
                }
            }
        };

        Self { store, state }
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.user.is_some()
    }

    pub fn snapshot(&self) -> PersistedContext {
        self.state.clone()
    }

    pub async fn set_language(&mut self, language: Language) -> Result<()> {
        self.state.language = language;
        self.persist().await
    }

    /// Record the profile as the logged-in user
    pub async fn login(&mut self, profile: UserProfile) -> Result<()> {
        if profile.mobile_number.trim().is_empty() {
            return Err(Error::InvalidInput("mobile number is required".to_string()));
        }
        info!(user_id = %profile.id, "User logged in");
        self.state.language = profile.language;
        self.state.user = Some(profile);
        self.persist().await
    }

    pub async fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.state.user.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.persist().await
    }

    /// Merge a partial update into the logged-in profile
    ///
    /// Without a logged-in user this is a no-op returning `Ok(None)`.
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<Option<&UserProfile>> {
        let Some(user) = self.state.user.as_mut() else {
            debug!("Profile update ignored: no user logged in");
            return Ok(None);
        };
        user.merge(update);
        self.persist().await?;
        Ok(self.state.user.as_ref())
    }

    async fn persist(&self) -> Result<()> {
        self.store.save(&self.state).await
    }
}
