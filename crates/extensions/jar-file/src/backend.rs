//! File jar implementation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use switcher_core::MemoryCookieJar;
use switcher_protocols::{Cookie, CookieJar, JarError};

use crate::error::FileJarError;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct JarFile {
    version: u32,
    #[serde(default)]
    cookies: Vec<Cookie>,
}

/// Cookie jar persisted as a JSON file.
pub struct FileCookieJar {
    path: PathBuf,
    cookies: MemoryCookieJar,
}

impl FileCookieJar {
    /// Open the jar at `path`, creating its directory if needed.
    ///
    /// A missing file is an empty jar. A file that cannot be parsed is
    /// logged and treated as empty; it is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FileJarError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| FileJarError::CreateDirFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })?;
                info!("Created jar directory: {:?}", parent);
            }
        }

        let cookies = Self::read(&path)?;
        debug!("Opened file jar {:?} with {} cookies", path, cookies.cookies().len());

        Ok(Self { path, cookies })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cookies(&self) -> &[Cookie] {
        self.cookies.cookies()
    }

    fn read(path: &Path) -> Result<MemoryCookieJar, FileJarError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MemoryCookieJar::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<JarFile>(&content) {
            Ok(file) => {
                if file.version != FORMAT_VERSION {
                    warn!(
                        "Jar file {:?} has version {}, expected {}",
                        path, file.version, FORMAT_VERSION
                    );
                }
                Ok(MemoryCookieJar::from_cookies(file.cookies))
            }
            Err(e) => {
                warn!("Ignoring unreadable jar file {:?}: {}", path, e);
                Ok(MemoryCookieJar::new())
            }
        }
    }

    /// Write the whole jar, replacing the file atomically.
    fn save(&self) -> Result<(), FileJarError> {
        let file = JarFile {
            version: FORMAT_VERSION,
            cookies: self.cookies.cookies().to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Saved {} cookies to {:?}", file.cookies.len(), self.path);
        Ok(())
    }
}

impl CookieJar for FileCookieJar {
    fn id(&self) -> &str {
        "file"
    }

    fn header(&self) -> Result<String, JarError> {
        self.cookies.header()
    }

    fn set(&mut self, set_cookie: &str) -> Result<(), JarError> {
        self.cookies.set(set_cookie)?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
