use crate::error::{IngestError, Result};
use crate::handle::{DirEntry, DirectoryHandle, FileHandle};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Local-filesystem adapter for the directory-handle capability.
///
/// Canonical enumeration order is name-sorted, so repeated scans of the
/// same layout are reproducible regardless of OS readdir order. Symlinks
/// are not followed.
#[derive(Debug)]
pub struct FsDirectoryHandle {
    path: PathBuf,
}

impl FsDirectoryHandle {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(IngestError::InvalidPath(format!(
                "Not a directory: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl DirectoryHandle for FsDirectoryHandle {
    async fn entries(&self) -> Result<Vec<DirEntry>> {
        let mut dir = tokio::fs::read_dir(&self.path).await?;
        let mut out = Vec::new();

        while let Some(item) = dir.next_entry().await? {
            let Some(name) = item.file_name().to_str().map(str::to_string) else {
                log::warn!("Skipping non-UTF-8 name under {}", self.path.display());
                continue;
            };
            let file_type = match item.file_type().await {
                Ok(file_type) => file_type,
                Err(err) => {
                    log::warn!("Failed to stat {name}: {err}");
                    continue;
                }
            };

            if file_type.is_dir() {
                out.push(DirEntry::directory(
                    name,
                    Box::new(FsDirectoryHandle { path: item.path() }),
                ));
            } else if file_type.is_file() {
                out.push(DirEntry::file(
                    name,
                    Box::new(FsFileHandle { path: item.path() }),
                ));
            }
            // Symlinks and special files contribute nothing.
        }

        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}

pub struct FsFileHandle {
    path: PathBuf,
}

#[async_trait]
impl FileHandle for FsFileHandle {
    fn type_hint(&self) -> Option<String> {
        let ext = self.path.extension()?.to_str()?.to_ascii_lowercase();
        mime_for_extension(&ext).map(str::to_string)
    }

    async fn read_text(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    Some(match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        _ => return None,
    })
}
