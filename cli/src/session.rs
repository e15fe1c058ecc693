//! File-backed session store.
//!
//! The token lives alone in a small file (default `.jobwatch-session` in the
//! working directory). A missing or unreadable file reads as "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use console::session::normalize_token;
use console::{Session, SessionStore};

pub const DEFAULT_SESSION_FILE: &str = ".jobwatch-session";

#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn shared(self) -> Session {
        Rc::new(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_token(&self, token: &str) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(token.as_bytes())
    }
}

impl SessionStore for FileSession {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        normalize_token(Some(raw.trim_end().to_owned()))
    }

    fn set(&self, token: &str) {
        if let Err(e) = self.write_token(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session token");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file"),
        }
    }
}
