//! File intake: inspect a dropped or picked path, validate it, read it.
//!
//! Validation runs on metadata only so a rejected file is never read and
//! never reaches the network.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Upload ceiling enforced by the prediction server (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
const FALLBACK_MIME: &str = "application/octet-stream";

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("unsupported file type {mime}; please select an image")]
    UnsupportedType { mime: String },
    #[error("file is too large ({size} bytes); maximum size is 16MB")]
    TooLarge { size: u64, limit: u64 },
    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },
    #[error("failed to read {path}")]
    Io { path: PathBuf, source: io::Error },
}

impl IntakeError {
    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::UnsupportedType { .. } => {
                "Please select an image file (PNG, JPG, JPEG, GIF, BMP, TIFF).".to_string()
            }
            IntakeError::TooLarge { .. } => "File is too large. Maximum size is 16MB.".to_string(),
            IntakeError::NotAFile { .. } => "Please select a single image file.".to_string(),
            IntakeError::Io { path, .. } => format!("Could not read {}.", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub filename: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// MIME type from the file extension, using the `image` crate's format table.
pub fn mime_type_for_path(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MIME.to_string())
}

pub fn inspect_path(path: &Path) -> IntakeResult<FileCandidate> {
    let metadata = fs::metadata(path).map_err(|source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(IntakeError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Ok(FileCandidate {
        path: path.to_path_buf(),
        filename,
        mime: mime_type_for_path(path),
        size: metadata.len(),
    })
}

pub fn validate_candidate(candidate: &FileCandidate) -> IntakeResult<()> {
    if !candidate.mime.starts_with("image/") {
        return Err(IntakeError::UnsupportedType {
            mime: candidate.mime.clone(),
        });
    }
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(IntakeError::TooLarge {
            size: candidate.size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Read a validated candidate. At most one byte past the limit is read, so a
/// file that grew since validation is rejected without loading all of it.
pub fn read_upload(candidate: &FileCandidate) -> IntakeResult<UploadedFile> {
    let io_error = |source: io::Error| IntakeError::Io {
        path: candidate.path.clone(),
        source,
    };
    let file = fs::File::open(&candidate.path).map_err(io_error)?;
    let mut bytes = Vec::with_capacity(usize::try_from(candidate.size).unwrap_or(0));
    file.take(MAX_UPLOAD_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(io_error)?;
    let size = bytes.len() as u64;
    if size > MAX_UPLOAD_BYTES {
        return Err(IntakeError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(UploadedFile {
        filename: candidate.filename.clone(),
        mime: candidate.mime.clone(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime: &str, size: u64) -> FileCandidate {
        FileCandidate {
            path: PathBuf::from("/tmp/scan"),
            filename: "scan".to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("mriscope-intake-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn mime_type_follows_image_extensions() {
        assert_eq!(mime_type_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("a.tiff")), "image/tiff");
        assert_eq!(mime_type_for_path(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(mime_type_for_path(Path::new("no_extension")), FALLBACK_MIME);
    }

    #[test]
    fn non_image_types_are_rejected() {
        for mime in ["application/pdf", "text/plain", FALLBACK_MIME, "video/mp4"] {
            let err = validate_candidate(&candidate(mime, 10)).unwrap_err();
            assert!(matches!(err, IntakeError::UnsupportedType { .. }), "{mime}");
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_candidate(&candidate("image/png", MAX_UPLOAD_BYTES)).is_ok());
        let err = validate_candidate(&candidate("image/png", MAX_UPLOAD_BYTES + 1)).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::TooLarge {
                size,
                limit: MAX_UPLOAD_BYTES
            } if size == MAX_UPLOAD_BYTES + 1
        ));
        assert_eq!(err.user_message(), "File is too large. Maximum size is 16MB.");
    }

    #[test]
    fn inspect_and_read_a_real_file() {
        let path = temp_file("brain.png", b"\x89PNG fake");
        let candidate = inspect_path(&path).unwrap();
        assert_eq!(candidate.filename, "brain.png");
        assert_eq!(candidate.mime, "image/png");
        assert_eq!(candidate.size, 9);

        validate_candidate(&candidate).unwrap();
        let upload = read_upload(&candidate).unwrap();
        assert_eq!(upload.bytes, b"\x89PNG fake");
        assert_eq!(upload.size(), 9);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn read_stops_one_byte_past_the_limit_when_the_file_grew() {
        let path = temp_file("grown.png", b"small");
        let mut candidate = inspect_path(&path).unwrap();
        validate_candidate(&candidate).unwrap();

        let grown = fs::OpenOptions::new().write(true).open(&path).unwrap();
        grown.set_len(MAX_UPLOAD_BYTES + 4096).unwrap();
        drop(grown);
        candidate.size = 5;

        let err = read_upload(&candidate).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::TooLarge { size, limit: MAX_UPLOAD_BYTES } if size == MAX_UPLOAD_BYTES + 1
        ));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn inspect_rejects_directories_and_missing_paths() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            inspect_path(&dir),
            Err(IntakeError::NotAFile { .. })
        ));
        assert!(matches!(
            inspect_path(Path::new("/definitely/not/here.png")),
            Err(IntakeError::Io { .. })
        ));
    }
}
