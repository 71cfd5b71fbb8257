//! CocoScan - Media Directory
//!
//! Owns the on-disk image files the capture and import flows produce.
//! Frames are sniffed by magic bytes before anything touches disk, and
//! writes go through a temp file + rename.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ScanError, ScanResult};

/// Media directory handler
pub struct MediaDir {
    /// Root directory
    root: PathBuf,
}

impl MediaDir {
    /// Create the handler, making the directory if needed
    pub fn new(root: &Path) -> ScanResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Full path for a file name
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if `path` points inside this directory
    pub fn owns(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
    }

    /// Decode a base64 frame and write it as `name`
    ///
    /// The payload must decode to a supported image; write failures
    /// surface as a save error.
    pub fn save_base64(&self, name: &str, payload: &str) -> ScanResult<PathBuf> {
        let bytes = STANDARD.decode(payload)?;
        if detect_image(&bytes).is_none() {
            return Err(ScanError::InvalidFrame(
                "payload is not a supported image".into(),
            ));
        }

        let path = self.path_of(name);
        self.write_atomic(&path, &bytes)
            .map_err(|e| ScanError::SaveImage(e.to_string()))?;

        Ok(path)
    }

    /// Copy a picked file into the directory under `name`
    pub fn import_file(&self, src: &Path, name: &str) -> ScanResult<PathBuf> {
        if !src.exists() {
            return Err(ScanError::ImportFailed(src.display().to_string()));
        }

        let dest = self.path_of(name);
        fs::copy(src, &dest).map_err(|e| ScanError::ImportFailed(e.to_string()))?;

        Ok(dest)
    }

    /// Remove a file if present
    pub fn delete(&self, name: &str) -> ScanResult<()> {
        let path = self.path_of(name);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Check if a file exists
    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).exists()
    }

    fn write_atomic(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        // Write to temp file first, rename into place
        let temp_path = path.with_extension("tmp");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// Sniff an image MIME type from magic bytes
pub fn detect_image(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    match &data[0..8] {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] => Some("image/png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [0x52, 0x49, 0x46, 0x46, ..] if data.len() > 12 && &data[8..12] == b"WEBP" => {
            Some("image/webp")
        }
        _ => None,
    }
}

/// Infer a destination name for an imported file
///
/// Keeps the source name when it ends in an alphanumeric extension,
/// otherwise falls back to `image_<millis>.jpg`.
pub fn infer_import_name(src: &Path, millis: i64) -> String {
    let inferred = src.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if has_alnum_extension(inferred) {
        inferred.to_string()
    } else {
        format!("image_{}.jpg", millis)
    }
}

fn has_alnum_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JPEG_HEADER: [u8; 12] = [
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
    ];

    #[test]
    fn test_save_base64_writes_frame() {
        let dir = tempdir().unwrap();
        let media = MediaDir::new(dir.path()).unwrap();

        let payload = STANDARD.encode(JPEG_HEADER);
        let path = media.save_base64("photo_1.jpg", &payload).unwrap();

        assert_eq!(media.root(), dir.path());
        assert!(media.exists("photo_1.jpg"));
        assert!(media.owns(&path));
        assert_eq!(fs::read(&path).unwrap(), JPEG_HEADER);

        // No temp file left behind
        assert!(!media.path_of("photo_1.tmp").exists());
    }

    #[test]
    fn test_save_base64_rejects_bad_payloads() {
        let dir = tempdir().unwrap();
        let media = MediaDir::new(dir.path()).unwrap();

        // Not base64 at all
        let err = media.save_base64("a.jpg", "not valid base64!!").unwrap_err();
        assert!(matches!(err, ScanError::InvalidFrame(_)));

        // Valid base64, not an image
        let payload = STANDARD.encode(b"plain text, definitely no pixels");
        let err = media.save_base64("a.jpg", &payload).unwrap_err();
        assert!(matches!(err, ScanError::InvalidFrame(_)));

        assert!(!media.exists("a.jpg"));
    }

    #[test]
    fn test_import_copies_file() {
        let dir = tempdir().unwrap();
        let media = MediaDir::new(dir.path().join("media").as_path()).unwrap();

        let src = dir.path().join("picked.png");
        fs::write(&src, b"\x89PNG\r\n\x1a\nrest").unwrap();

        let dest = media.import_file(&src, "picked.png").unwrap();
        assert!(media.exists("picked.png"));
        assert_eq!(fs::read(&dest).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_import_missing_source_fails() {
        let dir = tempdir().unwrap();
        let media = MediaDir::new(dir.path()).unwrap();

        let err = media
            .import_file(Path::new("/nonexistent/picked.png"), "picked.png")
            .unwrap_err();
        assert!(matches!(err, ScanError::ImportFailed(_)));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let media = MediaDir::new(dir.path()).unwrap();

        let payload = STANDARD.encode(JPEG_HEADER);
        media.save_base64("gone.jpg", &payload).unwrap();

        media.delete("gone.jpg").unwrap();
        assert!(!media.exists("gone.jpg"));

        // Second delete is a no-op
        media.delete("gone.jpg").unwrap();
    }

    #[test]
    fn test_detect_image_magic_bytes() {
        assert_eq!(detect_image(&JPEG_HEADER), Some("image/jpeg"));
        assert_eq!(
            detect_image(b"\x89PNG\r\n\x1a\nrest"),
            Some("image/png")
        );
        assert_eq!(detect_image(b"GIF89a...."), Some("image/gif"));
        assert_eq!(detect_image(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));

        assert_eq!(detect_image(b"RIFF\x00\x00\x00\x00WAVE"), None);
        assert_eq!(detect_image(b"plain text"), None);
        assert_eq!(detect_image(&[0xFF, 0xD8]), None);
    }

    #[test]
    fn test_infer_import_name() {
        assert_eq!(infer_import_name(Path::new("/cache/leaf.jpg"), 7), "leaf.jpg");
        assert_eq!(
            infer_import_name(Path::new("/cache/IMG 0042.PNG"), 7),
            "IMG 0042.PNG"
        );
        assert_eq!(
            infer_import_name(Path::new("/cache/archive.tar.gz"), 7),
            "archive.tar.gz"
        );

        // No usable extension falls back to a stable name
        assert_eq!(infer_import_name(Path::new("/cache/noext"), 7), "image_7.jpg");
        assert_eq!(
            infer_import_name(Path::new("/cache/trailingdot."), 7),
            "image_7.jpg"
        );
    }
}
