use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

/// Failures of the export and download collaborators. The drawing core
/// itself never fails.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    #[error("Failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed: {0}")]
    Download(String),
}

/// Failures while reading a settings override file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
