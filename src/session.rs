use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A dashboard account as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub google_enabled: bool,
    /// Protected accounts cannot be disabled from the admin panel
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub google_protected: bool,
}

impl User {
    pub fn is_superadmin(&self) -> bool {
        self.role == "superadmin"
    }
}

/// Signed-in session issued by the auth endpoints. Passed explicitly to
/// whoever needs the token or the current user; never held in a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Resolve (and create) the app data directory used for session persistence
pub fn default_data_path() -> AppResult<PathBuf> {
    let path = dirs::data_local_dir()
        .ok_or_else(|| AppError::storage("Failed to get local data dir"))?
        .join("RenewalDesk");
    fs::create_dir_all(&path).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(path)
}

/// Persist the session so a restart stays signed in
pub fn save_session(data_path: &Path, session: &Session) -> AppResult<()> {
    let path = data_path.join("session.json");
    let content =
        serde_json::to_string_pretty(session).map_err(|e| AppError::storage(e.to_string()))?;
    fs::write(&path, content).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(())
}

/// Load a previously saved session, if any. An unreadable file is treated
/// as signed out rather than an error.
pub fn load_session(data_path: &Path) -> AppResult<Option<Session>> {
    let path = data_path.join("session.json");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|e| AppError::storage(e.to_string()))?;
    match serde_json::from_str(&content) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            eprintln!("Discarding unreadable session file: {}", e);
            Ok(None)
        }
    }
}

/// Remove the persisted session (sign out)
pub fn clear_session(data_path: &Path) -> AppResult<()> {
    let path = data_path.join("session.json");
    if path.exists() {
        fs::remove_file(&path).map_err(|e| AppError::storage(e.to_string()))?;
    }
    Ok(())
}
