//! Scannable-code image generation.
//!
//! The title block reserves its right-hand column for a QR code image
//! (see [`BARCODE_IMAGE`](crate::assemble::BARCODE_IMAGE)). This module
//! is the side-artifact generator for that image; it runs separately
//! from document assembly, usually via the `texsmith-barcode` binary.
//!
//! Only available with the `barcode` feature.

use std::fs;
use std::path::Path;

use qrcode::QrCode;

use crate::error::Error;

/// Encode `data` into a QR code and write it as a PNG at `path`.
///
/// The parent directory is created if needed.
///
/// # Example
///
/// ```ignore
/// use texsmith::barcode;
/// use std::path::Path;
///
/// barcode::write_png("https://example.com", Path::new("docs/images/barcode.png"))?;
/// ```
pub fn write_png(data: &str, path: &Path) -> Result<(), Error> {
    let code = QrCode::new(data.as_bytes()).map_err(|err| Error::Barcode {
        message: err.to_string(),
    })?;
    let image = code.render::<image::Luma<u8>>().build();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    image.save(path).map_err(|err| Error::Barcode {
        message: err.to_string(),
    })?;
    log::info!("wrote barcode image {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_writes_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("images/barcode.png");
        write_png("https://example.com", &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        // PNG signature.
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
