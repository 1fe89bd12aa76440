//! Upload policies and stored-file naming.
//!
//! Each resource that accepts a file has an [`UploadPolicy`]: the directory
//! it lands in (under the configured upload root), a filename prefix, a byte
//! cap, and a MIME allow-list. [`UploadPolicy::check`] runs entirely in
//! memory so callers can reject a file before anything touches disk or the
//! database.

use std::path::{Component, Path, PathBuf};

use image::ImageFormat;

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

const MIB: usize = 1024 * 1024;

const WEB_IMAGES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
const PROFILE_IMAGES: &[&str] = &["image/jpeg", "image/png", "image/gif"];
const DOCUMENTS: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Subdirectory of the upload root (also the URL segment).
    pub directory: &'static str,
    /// Prefix of generated filenames.
    pub prefix: &'static str,
    pub max_bytes: usize,
    pub allowed_mimes: &'static [&'static str],
    /// Verify the leading bytes agree with the declared image type.
    pub sniff_images: bool,
}

pub const STAFF_PHOTO: UploadPolicy = UploadPolicy {
    directory: "staff",
    prefix: "profile",
    max_bytes: 5 * MIB,
    allowed_mimes: PROFILE_IMAGES,
    sniff_images: true,
};

pub const NEWS_EVENT_IMAGE: UploadPolicy = UploadPolicy {
    directory: "news-events",
    prefix: "news",
    max_bytes: 10 * MIB,
    allowed_mimes: WEB_IMAGES,
    sniff_images: true,
};

pub const FACULTY_IMAGE: UploadPolicy = UploadPolicy {
    directory: "faculties",
    prefix: "faculty",
    ..NEWS_EVENT_IMAGE
};

pub const CAMPUS_IMAGE: UploadPolicy = UploadPolicy {
    directory: "campuses",
    prefix: "campus",
    ..NEWS_EVENT_IMAGE
};

pub const LEADERSHIP_IMAGE: UploadPolicy = UploadPolicy {
    directory: "leadership",
    prefix: "leader",
    ..NEWS_EVENT_IMAGE
};

pub const AFFILIATE_IMAGE: UploadPolicy = UploadPolicy {
    directory: "affiliates",
    prefix: "affiliate",
    ..NEWS_EVENT_IMAGE
};

pub const LIBRARY_DOCUMENT: UploadPolicy = UploadPolicy {
    directory: "library",
    prefix: "library",
    max_bytes: 25 * MIB,
    allowed_mimes: DOCUMENTS,
    sniff_images: false,
};

/// Every policy, used to size the request body limit.
pub const ALL_POLICIES: &[UploadPolicy] = &[
    STAFF_PHOTO,
    NEWS_EVENT_IMAGE,
    FACULTY_IMAGE,
    CAMPUS_IMAGE,
    LEADERSHIP_IMAGE,
    AFFILIATE_IMAGE,
    LIBRARY_DOCUMENT,
];

/// Largest per-file cap across [`ALL_POLICIES`].
pub fn largest_upload_bytes() -> usize {
    ALL_POLICIES.iter().map(|p| p.max_bytes).max().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("File exceeds the maximum size of {max_bytes} bytes")]
    TooLarge { max_bytes: usize },

    #[error("Unsupported file type '{mime}'. Allowed: {allowed}")]
    UnsupportedType { mime: String, allowed: String },

    #[error("File contents do not match the declared type '{0}'")]
    ContentMismatch(String),
}

impl UploadPolicy {
    /// Validate a file against this policy, returning the canonical MIME
    /// type it was accepted as.
    pub fn check(&self, content_type: &str, bytes: &[u8]) -> Result<&'static str, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        let declared = normalize_mime(content_type);
        let mime = self
            .allowed_mimes
            .iter()
            .copied()
            .find(|m| *m == declared)
            .ok_or_else(|| UploadError::UnsupportedType {
                mime: declared.clone(),
                allowed: self.allowed_mimes.join(", "),
            })?;

        if bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }

        if self.sniff_images && sniff_image_mime(bytes) != Some(mime) {
            return Err(UploadError::ContentMismatch(mime.to_string()));
        }

        Ok(mime)
    }

    /// Generate a collision-resistant filename: `{prefix}_{millis}_{token}.{ext}`.
    pub fn stored_filename(&self, mime: &str) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let token = uuid::Uuid::new_v4().simple().to_string();
        format!(
            "{}_{millis}_{}.{}",
            self.prefix,
            &token[..8],
            extension_for_mime(mime)
        )
    }

    /// Public URL path for a stored file, e.g. `/uploads/faculties/x.png`.
    pub fn public_path(&self, filename: &str) -> String {
        format!("{PUBLIC_PREFIX}/{}/{filename}", self.directory)
    }
}

/// Strip parameters and case from a `Content-Type` value; `image/jpg` is
/// treated as `image/jpeg`.
fn normalize_mime(content_type: &str) -> String {
    let base = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if base == "image/jpg" {
        "image/jpeg".to_string()
    } else {
        base
    }
}

pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "application/pdf" => "pdf",
        "application/msword" => "doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        _ => "bin",
    }
}

/// Identify an image from its magic bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

/// Map a stored public path back to a path relative to the upload root.
///
/// Returns `None` for paths outside [`PUBLIC_PREFIX`] or containing anything
/// other than normal components, so a tampered row can never point a delete
/// outside the upload directory.
pub fn relative_path_from_public(public_path: &str) -> Option<PathBuf> {
    let rest = public_path.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
    let rel = Path::new(rest);
    let safe = rel.components().all(|c| matches!(c, Component::Normal(_)));
    (safe && rel.components().next().is_some()).then(|| rel.to_path_buf())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn accepts_png_with_matching_bytes() {
        assert_eq!(FACULTY_IMAGE.check("image/png", PNG_HEADER), Ok("image/png"));
    }

    #[test]
    fn rejects_plain_text() {
        let err = NEWS_EVENT_IMAGE.check("text/plain", b"hello").unwrap_err();
        assert_matches!(err, UploadError::UnsupportedType { mime, .. } if mime == "text/plain");
    }

    #[test]
    fn rejects_text_disguised_as_png() {
        let err = NEWS_EVENT_IMAGE.check("image/png", b"not really a png").unwrap_err();
        assert_eq!(err, UploadError::ContentMismatch("image/png".into()));
    }

    #[test]
    fn staff_photo_rejects_webp() {
        assert!(STAFF_PHOTO.check("image/webp", b"RIFF....WEBP").is_err());
    }

    #[test]
    fn size_cap_is_enforced() {
        let mut big = PNG_HEADER.to_vec();
        big.resize(STAFF_PHOTO.max_bytes + 1, 0);
        assert_eq!(
            STAFF_PHOTO.check("image/png", &big),
            Err(UploadError::TooLarge {
                max_bytes: STAFF_PHOTO.max_bytes
            })
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        assert_eq!(FACULTY_IMAGE.check("image/png", &[]), Err(UploadError::Empty));
    }

    #[test]
    fn content_type_parameters_and_jpg_alias_are_normalised() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10];
        assert_eq!(
            CAMPUS_IMAGE.check("Image/JPG; charset=binary", &jpeg),
            Ok("image/jpeg")
        );
    }

    #[test]
    fn documents_skip_sniffing() {
        assert_eq!(
            LIBRARY_DOCUMENT.check("application/pdf", b"%PDF-1.7"),
            Ok("application/pdf")
        );
    }

    #[test]
    fn stored_filename_uses_prefix_and_mime_extension() {
        let name = FACULTY_IMAGE.stored_filename("image/webp");
        assert!(name.starts_with("faculty_"));
        assert!(name.ends_with(".webp"));
        assert_eq!(
            FACULTY_IMAGE.public_path(&name),
            format!("/uploads/faculties/{name}")
        );
    }

    #[test]
    fn public_path_round_trips_to_relative_path() {
        assert_eq!(
            relative_path_from_public("/uploads/news-events/news_1.png"),
            Some(PathBuf::from("news-events/news_1.png"))
        );
    }

    #[test]
    fn traversal_and_foreign_paths_are_refused() {
        assert_eq!(relative_path_from_public("/uploads/../etc/passwd"), None);
        assert_eq!(relative_path_from_public("/static/logo.png"), None);
        assert_eq!(relative_path_from_public("/uploads/"), None);
    }

    #[test]
    fn body_limit_covers_library_documents() {
        assert_eq!(largest_upload_bytes(), LIBRARY_DOCUMENT.max_bytes);
    }
}
