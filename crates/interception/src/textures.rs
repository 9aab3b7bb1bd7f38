use std::ffi::c_void;
use std::fs;
use std::path::PathBuf;
use std::slice;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::error::Result;
use crate::ffi::*;

/// Arguments of one `glTexImage2D` call, with the client-side payload when
/// the application passed one.
#[derive(Debug, Clone, Copy)]
pub struct TextureUpload<'a> {
    pub target: GLenum,
    pub level: GLint,
    pub internal_format: GLint,
    pub width: GLsizei,
    pub height: GLsizei,
    pub border: GLint,
    pub format: GLenum,
    pub type_: GLenum,
    pub pixels: Option<&'a [u8]>,
}

impl<'a> TextureUpload<'a> {
    /// Builds the view over the caller's arguments. The payload is left empty
    /// when `pixels` is null, the layout is unknown, or a border is present.
    ///
    /// # Safety
    /// A non-null `pixels` must point to at least the number of bytes GL
    /// would read for this upload with default unpack alignment.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn from_raw(
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) -> Self {
        let mut upload = Self {
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            type_,
            pixels: None,
        };

        if !pixels.is_null() && border == 0 {
            if let Some(size) = upload.payload_size() {
                upload.pixels = Some(slice::from_raw_parts(pixels as *const u8, size));
            }
        }

        upload
    }

    /// Payload size in bytes, `None` for unknown layouts or negative extents.
    pub fn payload_size(&self) -> Option<usize> {
        let width = usize::try_from(self.width).ok()?;
        let height = usize::try_from(self.height).ok()?;
        let bpp = bytes_per_pixel(self.format, self.type_)?;

        width.checked_mul(height)?.checked_mul(bpp)
    }
}

fn components(format: GLenum) -> Option<usize> {
    match format {
        COLOR_INDEX | gl::STENCIL_INDEX | gl::DEPTH_COMPONENT | gl::RED | gl::GREEN | gl::BLUE
        | gl::ALPHA | LUMINANCE => Some(1),
        LUMINANCE_ALPHA | gl::RG => Some(2),
        gl::RGB | gl::BGR => Some(3),
        gl::RGBA | gl::BGRA => Some(4),
        _ => None,
    }
}

/// Bytes one pixel of `format`/`type_` occupies in client memory.
pub fn bytes_per_pixel(format: GLenum, type_: GLenum) -> Option<usize> {
    match type_ {
        gl::UNSIGNED_BYTE_3_3_2 => Some(1),
        gl::UNSIGNED_SHORT_5_6_5
        | gl::UNSIGNED_SHORT_4_4_4_4
        | gl::UNSIGNED_SHORT_4_4_4_4_REV
        | gl::UNSIGNED_SHORT_5_5_5_1
        | gl::UNSIGNED_SHORT_1_5_5_5_REV => Some(2),
        gl::UNSIGNED_INT_8_8_8_8 | gl::UNSIGNED_INT_8_8_8_8_REV | gl::UNSIGNED_INT_10_10_10_2 => Some(4),
        gl::BYTE | gl::UNSIGNED_BYTE => components(format),
        gl::SHORT | gl::UNSIGNED_SHORT => components(format).map(|c| c * 2),
        gl::INT | gl::UNSIGNED_INT | gl::FLOAT => components(format).map(|c| c * 4),
        _ => None,
    }
}

/// Short file-name tag for a pixel layout.
pub fn layout_name(format: GLenum) -> &'static str {
    match format {
        COLOR_INDEX => "index",
        gl::STENCIL_INDEX => "stencil",
        gl::DEPTH_COMPONENT => "depth",
        gl::RED => "r",
        gl::GREEN => "g",
        gl::BLUE => "b",
        gl::ALPHA => "a",
        LUMINANCE => "lum",
        LUMINANCE_ALPHA => "lumalpha",
        gl::RG => "rg",
        gl::RGB => "rgb",
        gl::BGR => "bgr",
        gl::RGBA => "rgba",
        gl::BGRA => "bgra",
        _ => "raw",
    }
}

/// Receives the texture uploads the application issues.
pub trait TextureSink: Send {
    fn capture(&mut self, upload: &TextureUpload<'_>) -> Result<()>;
}

/// Writes every captured payload verbatim into a directory.
pub struct TextureDumper {
    directory: PathBuf,
    next_index: AtomicU64,
}

impl TextureDumper {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next_index: AtomicU64::new(0),
        }
    }

    fn file_name(index: u64, upload: &TextureUpload<'_>) -> String {
        format!(
            "tex_{:05}_{}x{}_l{}.{}",
            index,
            upload.width,
            upload.height,
            upload.level,
            layout_name(upload.format)
        )
    }
}

impl TextureSink for TextureDumper {
    fn capture(&mut self, upload: &TextureUpload<'_>) -> Result<()> {
        if upload.border != 0 {
            warn!("Skipping texture dump, border {} is not supported", upload.border);
            return Ok(());
        }

        let pixels = match upload.pixels {
            Some(pixels) => pixels,
            None if upload.payload_size().is_none() => {
                warn!(
                    "Skipping texture dump, unknown layout {:#06x}/{:#06x}",
                    upload.format, upload.type_
                );
                return Ok(());
            }
            None => return Ok(()),
        };

        fs::create_dir_all(&self.directory)?;

        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        let path = self.directory.join(Self::file_name(index, upload));
        fs::write(&path, pixels)?;

        debug!("Dumped {} bytes to {:?}", pixels.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;
    use std::fs;
    use std::ptr;

    use crate::ffi::*;
    use crate::textures::{bytes_per_pixel, TextureDumper, TextureSink, TextureUpload};

    fn upload(width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: &[u8]) -> TextureUpload<'_> {
        unsafe {
            TextureUpload::from_raw(
                gl::TEXTURE_2D,
                0,
                format as GLint,
                width,
                height,
                0,
                format,
                type_,
                pixels.as_ptr() as *const c_void,
            )
        }
    }

    #[test]
    fn computes_bytes_per_pixel() {
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::UNSIGNED_BYTE), Some(4));
        assert_eq!(bytes_per_pixel(gl::RGB, gl::UNSIGNED_BYTE), Some(3));
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::FLOAT), Some(16));
        assert_eq!(bytes_per_pixel(LUMINANCE_ALPHA, gl::UNSIGNED_SHORT), Some(4));
        assert_eq!(bytes_per_pixel(gl::RGB, gl::UNSIGNED_SHORT_5_6_5), Some(2));
        assert_eq!(bytes_per_pixel(gl::BGRA, gl::UNSIGNED_INT_8_8_8_8_REV), Some(4));
        assert_eq!(bytes_per_pixel(0x1234, gl::UNSIGNED_BYTE), None);
    }

    #[test]
    fn payload_covers_the_whole_image() {
        let pixels = vec![7u8; 2 * 3 * 4];

        let upload = upload(2, 3, gl::RGBA, gl::UNSIGNED_BYTE, &pixels);

        assert_eq!(upload.payload_size(), Some(24));
        assert_eq!(upload.pixels.map(<[u8]>::len), Some(24));
    }

    #[test]
    fn null_pixels_leave_the_payload_empty() {
        let upload = unsafe {
            TextureUpload::from_raw(gl::TEXTURE_2D, 0, 0, 4, 4, 0, gl::RGBA, gl::UNSIGNED_BYTE, ptr::null())
        };

        assert!(upload.pixels.is_none());
        assert_eq!(upload.payload_size(), Some(64));
    }

    #[test]
    fn dumper_writes_numbered_files() {
        let directory = std::env::temp_dir().join(format!("glproxy-dump-{}", std::process::id()));
        let _ = fs::remove_dir_all(&directory);
        let mut dumper = TextureDumper::new(&directory);
        let pixels = vec![0xABu8; 4 * 2 * 3];

        dumper.capture(&upload(4, 2, gl::RGB, gl::UNSIGNED_BYTE, &pixels)).unwrap();
        dumper.capture(&upload(4, 2, gl::RGB, gl::UNSIGNED_BYTE, &pixels)).unwrap();

        let first = fs::read(directory.join("tex_00000_4x2_l0.rgb")).unwrap();
        assert_eq!(first, pixels);
        assert!(directory.join("tex_00001_4x2_l0.rgb").exists());

        let _ = fs::remove_dir_all(&directory);
    }

    #[test]
    fn dumper_skips_unknown_layouts() {
        let directory = std::env::temp_dir().join(format!("glproxy-skip-{}", std::process::id()));
        let mut dumper = TextureDumper::new(&directory);
        let pixels = [0u8; 16];

        dumper.capture(&upload(2, 2, 0x1234, gl::UNSIGNED_BYTE, &pixels)).unwrap();

        assert!(!directory.exists());
    }
}
