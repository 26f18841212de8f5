// store/mod.rs - Flat-file user store
//
// The users file is re-read on every call to `load`. Nothing is cached, so
// edits to the file show up on the next login attempt.

pub mod user;

pub use user::User;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading the users file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read users file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse users file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the users file. Holds only the path.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the users file, preserving file order
    pub async fn load(&self) -> Result<Vec<User>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        parse_users(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parse a users document. A literal `null` is an empty store and anything
/// after the first JSON value is ignored.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    let users: Option<Vec<User>> = crate::codec::decode_first(bytes)?;
    Ok(users.unwrap_or_default())
}

/// Linear scan, first match wins
pub fn find_user<'a>(users: &'a [User], username: &str, password: &str) -> Option<&'a User> {
    users.iter().find(|user| user.matches(username, password))
}
