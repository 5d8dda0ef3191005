//! NoteStore — the notes directory as a flat key/value store
//!
//! Each operation is a single filesystem action whose outcome decides the
//! result: a missing file surfaces as `NotFound` from the read/remove itself,
//! and creation relies on `hard_link` refusing to overwrite. Writes go through
//! a hidden staging file so a reader never observes a half-written note.

use super::error::{NoteError, Result};
use super::resolver;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A note as returned by listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    /// Get the notes directory path
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Resolve a note name to its confined path in this store
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        resolver::resolve(name, &self.notes_dir)
    }

    /// Create the notes directory (and any missing parents)
    pub async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.notes_dir).await?;
        log::info!("[NOTES] Using notes directory {}", self.notes_dir.display());
        Ok(())
    }

    /// Whether a regular file exists at `path`. I/O errors count as absent.
    pub async fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Read the full text of a note. Symlinks are not notes and are never
    /// followed.
    pub async fn read(&self, path: &Path) -> Result<String> {
        self.require_note(path).await?;
        fs::read_to_string(path)
            .await
            .map_err(|e| classify(e, path))
    }

    /// Create a new note. Fails with `Conflict` if the name is taken.
    pub async fn create(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.resolve(name)?;
        let staging = self.write_staging(text).await?;

        // hard_link never replaces an existing target, which makes it the
        // exclusive-create step; the note appears with its full contents.
        let linked = fs::hard_link(&staging, &path).await;
        remove_staging(&staging).await;

        match linked {
            Ok(()) => {
                log::debug!("[NOTES] Created {}", path.display());
                Ok(path)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(NoteError::Conflict(note_name(&path)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the text of an existing note. A missing note is not created.
    pub async fn update(&self, path: &Path, text: &str) -> Result<()> {
        let staging = self.write_staging(text).await?;

        // A delete landing between this check and the rename recreates the
        // note; there is no rename-if-exists primitive to close that gap.
        if !self.exists(path).await {
            remove_staging(&staging).await;
            return Err(NoteError::NotFound(note_name(path)));
        }

        if let Err(e) = fs::rename(&staging, path).await {
            remove_staging(&staging).await;
            return Err(classify(e, path));
        }

        log::debug!("[NOTES] Updated {}", path.display());
        Ok(())
    }

    /// Delete a note
    pub async fn delete(&self, path: &Path) -> Result<()> {
        self.require_note(path).await?;
        fs::remove_file(path)
            .await
            .map_err(|e| classify(e, path))?;
        log::debug!("[NOTES] Deleted {}", path.display());
        Ok(())
    }

    /// Read every note in the notes directory, in directory order.
    ///
    /// Any note that exists but cannot be read fails the whole listing.
    /// Dot-files, subdirectories, symlinks and names that are not valid UTF-8
    /// are not notes and are skipped. A note deleted while the listing runs is
    /// skipped as well.
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        let mut read_dir = fs::read_dir(&self.notes_dir).await?;
        let mut notes = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let name = match entry.file_name().into_string() {
                Ok(n) => n,
                Err(raw) => {
                    log::warn!("[NOTES] Skipping non UTF-8 file name {:?}", raw);
                    continue;
                }
            };

            // Skip staging files and anything else hidden
            if name.starts_with('.') {
                continue;
            }

            if !entry.file_type().await?.is_file() {
                continue;
            }

            match fs::read_to_string(entry.path()).await {
                Ok(text) => notes.push(Note { name, text }),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("[NOTES] {} vanished during listing", name);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(notes)
    }

    /// `NotFound` unless `path` is a regular file. A symlink never counts.
    async fn require_note(&self, path: &Path) -> Result<()> {
        match fs::symlink_metadata(path).await {
            Ok(m) if m.is_file() => Ok(()),
            Ok(_) => Err(NoteError::NotFound(note_name(path))),
            Err(e) => Err(classify(e, path)),
        }
    }

    /// Write `text` to a uniquely named hidden file in the notes directory.
    /// The name carries only the uuid so it stays short for any legal note name.
    async fn write_staging(&self, text: &str) -> Result<PathBuf> {
        let staging = self
            .notes_dir
            .join(format!(".{}.tmp", uuid::Uuid::new_v4()));

        if let Err(e) = fs::write(&staging, text).await {
            remove_staging(&staging).await;
            return Err(e.into());
        }

        Ok(staging)
    }
}

async fn remove_staging(staging: &Path) {
    if let Err(e) = fs::remove_file(staging).await {
        if e.kind() != io::ErrorKind::NotFound {
            log::warn!(
                "[NOTES] Failed to remove staging file {}: {}",
                staging.display(),
                e
            );
        }
    }
}

/// Map an I/O error on a note path onto the note error taxonomy.
/// A directory in a note's place is treated as no note at all.
fn classify(err: io::Error, path: &Path) -> NoteError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::IsADirectory => {
            NoteError::NotFound(note_name(path))
        }
        _ => NoteError::Io(err),
    }
}

fn note_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
