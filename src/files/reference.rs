use super::mime::resolve_mime;
use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the content of a [`FileReference`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOrigin {
    Memory,
    Path(PathBuf),
    Url(String),
}

/// A binary payload waiting to be uploaded.
///
/// Content is loaded when the reference is built, so the name, content and
/// MIME type are always present afterwards and serialization never does I/O.
#[derive(Clone, PartialEq)]
pub struct FileReference {
    content: Vec<u8>,
    name: String,
    mime: String,
    origin: FileOrigin,
}

/// One named file part of a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPart {
    /// Form field the part is attached under (the `attach://` target).
    pub field_name: String,
    pub file_name: String,
    pub content: Vec<u8>,
    pub mime: String,
}

impl FileReference {
    /// Wrap in-memory content.
    pub fn from_bytes(content: impl Into<Vec<u8>>, name: &str, mime: Option<&str>) -> Result<Self> {
        Self::build(content.into(), name, mime, FileOrigin::Memory)
    }

    /// Read a local file now. `name` defaults to the path's final segment.
    pub fn from_path(path: impl AsRef<Path>, name: Option<&str>, mime: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::validation("name", format!("{} has no file name", path.display()))
                })?,
        };

        tracing::debug!("Reading upload from {}", path.display());
        let content = std::fs::read(path)?;

        Self::build(content, &name, mime, FileOrigin::Path(path.to_path_buf()))
    }

    /// Download `url` now with a fresh HTTP client.
    pub async fn from_url(url: &str, name: Option<&str>, mime: Option<&str>) -> Result<Self> {
        Self::from_url_with_client(&Client::new(), url, name, mime).await
    }

    /// Download `url` now. `name` defaults to the URL's final path segment.
    ///
    /// Any transport failure or non-2xx status is a [`Error::Fetch`]; nothing
    /// is retried here.
    pub async fn from_url_with_client(
        client: &Client,
        url: &str,
        name: Option<&str>,
        mime: Option<&str>,
    ) -> Result<Self> {
        let fetch_error = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| fetch_error(format!("invalid URL: {}", e)))?;
        let name = match name {
            Some(name) => name.to_string(),
            None => last_path_segment(&parsed).ok_or_else(|| {
                Error::validation("name", format!("cannot derive a file name from {}", url))
            })?,
        };

        tracing::debug!("Fetching upload from {}", url);
        let response = client.get(parsed).send().await.map_err(|e| {
            tracing::error!("Failed to fetch {}: {}", url, e);
            fetch_error(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Fetching {} failed (status {})", url, status);
            return Err(fetch_error(format!("status {}", status)));
        }

        let served_mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .filter(|v| !v.is_empty() && v != "application/octet-stream");

        let content = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?
            .to_vec();

        // A served Content-Type only wins over the file name, never over the bytes.
        let mime = match mime {
            Some(mime) => Some(mime.to_string()),
            None if super::mime::sniff_mime(&content).is_none() => served_mime,
            None => None,
        };

        Self::build(content, &name, mime.as_deref(), FileOrigin::Url(url.to_string()))
    }

    fn build(content: Vec<u8>, name: &str, mime: Option<&str>, origin: FileOrigin) -> Result<Self> {
        if content.is_empty() {
            return Err(Error::validation("content", "file content is empty"));
        }
        if name.is_empty() {
            return Err(Error::validation("name", "file name is empty"));
        }

        let mime = resolve_mime(mime, &content, name).ok_or_else(|| {
            Error::validation(
                "mime",
                format!("cannot infer a MIME type for {}; pass one explicitly", name),
            )
        })?;
        if let Err(e) = mime.parse::<mime_guess::Mime>() {
            return Err(Error::validation(
                "mime",
                format!("'{}' is not a MIME type: {}", mime, e),
            ));
        }

        Ok(Self {
            content,
            name: name.to_string(),
            mime,
            origin,
        })
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn origin(&self) -> &FileOrigin {
        &self.origin
    }

    /// The part to attach under `field_name` in a multipart request.
    pub fn to_upload_part(&self, field_name: &str) -> UploadPart {
        UploadPart {
            field_name: field_name.to_string(),
            file_name: self.name.clone(),
            content: self.content.clone(),
            mime: self.mime.clone(),
        }
    }
}

impl fmt::Debug for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReference")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.content.len())
            .field("origin", &self.origin)
            .finish()
    }
}

impl UploadPart {
    pub fn into_multipart(self) -> Result<reqwest::multipart::Part> {
        Ok(reqwest::multipart::Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(&self.mime)?)
    }
}

/// Percent-decoded final path segment. A path ending in `/` names a
/// directory, not a file, so it yields nothing.
fn last_path_segment(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    if segment.is_empty() {
        return None;
    }
    urlencoding::decode(segment)
        .ok()
        .map(|name| name.into_owned())
        .filter(|name| !name.is_empty())
}
