use std::io::Cursor;
use std::path::Path;

use ::exif::{Context, Exif, Field, In, Reader, Value};

use super::registry::{group, type_code};
use crate::error::ReadError;

/// One tag as decoded by the metadata reader, before catalogue resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTagEntry {
    pub tag_id: u16,
    pub group_id: u16,
    pub type_code: u16,
    /// Number of components declared by the container.
    pub count: u32,
    /// Components joined by single spaces, rationals as `n/d`.
    pub value: String,
}

/// An opened image container.
pub trait ImageHandle {
    /// Decode the metadata block. Must be called before [`ImageHandle::entries`].
    fn read_metadata(&mut self);

    /// Pixel width from the container itself, 0 when unknown.
    fn pixel_width(&self) -> u32;

    /// Pixel height from the container itself, 0 when unknown.
    fn pixel_height(&self) -> u32;

    fn entries(&self) -> &[RawTagEntry];
}

/// Opens image containers. Implemented by [`ExifReader`]; tests swap in fakes.
pub trait MetadataReader {
    fn open(&self, path: &Path) -> Result<Box<dyn ImageHandle>, ReadError>;
}

/// Reader backed by `kamadak-exif` for tags and `image` for pixel dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifReader;

impl ExifReader {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for ExifReader {
    fn open(&self, path: &Path) -> Result<Box<dyn ImageHandle>, ReadError> {
        let bytes = std::fs::read(path)?;

        let dimensions = image::ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(ReadError::from)
            .and_then(|reader| reader.into_dimensions().map_err(ReadError::from));

        let exif = Reader::new().read_from_container(&mut Cursor::new(bytes.as_slice()));

        let (exif, (width, height)) = match (exif, dimensions) {
            (Ok(exif), dims) => {
                if let Err(e) = &dims {
                    log::debug!("No pixel dimensions for {}: {e}", path.display());
                }
                (Some(exif), dims.unwrap_or((0, 0)))
            }
            (Err(e), Ok(dims)) if is_exif_absent(&e) => {
                log::debug!("No EXIF data found in {}: {e}", path.display());
                (None, dims)
            }
            (Err(e), Ok(dims)) => {
                log::warn!("Ignoring damaged EXIF block in {}: {e}", path.display());
                (None, dims)
            }
            (Err(_), Err(e)) => return Err(e),
        };

        Ok(Box::new(ExifHandle {
            exif,
            width,
            height,
            entries: Vec::new(),
        }))
    }
}

/// Containers kamadak-exif has no EXIF locator for (BMP, GIF) report an
/// unknown format rather than `NotFound`.
fn is_exif_absent(error: &::exif::Error) -> bool {
    matches!(
        error,
        ::exif::Error::NotFound(_) | ::exif::Error::InvalidFormat("Unknown image format")
    )
}

struct ExifHandle {
    exif: Option<Exif>,
    width: u32,
    height: u32,
    entries: Vec<RawTagEntry>,
}

impl ImageHandle for ExifHandle {
    fn read_metadata(&mut self) {
        self.entries = self
            .exif
            .as_ref()
            .map(|exif| exif.fields().map(raw_entry).collect())
            .unwrap_or_default();
    }

    fn pixel_width(&self) -> u32 {
        self.width
    }

    fn pixel_height(&self) -> u32 {
        self.height
    }

    fn entries(&self) -> &[RawTagEntry] {
        &self.entries
    }
}

fn raw_entry(field: &Field) -> RawTagEntry {
    let (type_code, count, value) = render_value(&field.value);
    RawTagEntry {
        tag_id: field.tag.number(),
        group_id: group_of(field),
        type_code,
        count,
        value,
    }
}

fn group_of(field: &Field) -> u16 {
    match field.tag.context() {
        Context::Tiff if field.ifd_num == In::THUMBNAIL => group::THUMBNAIL,
        Context::Tiff => group::IMAGE,
        Context::Exif => group::EXIF,
        Context::Gps => group::GPS,
        Context::Interop => group::INTEROP,
        #[allow(unreachable_patterns)]
        _ => 0,
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Type code, component count and string form of a decoded value.
fn render_value(value: &Value) -> (u16, u32, String) {
    match value {
        Value::Byte(v) => (type_code::BYTE, v.len() as u32, join(v)),
        Value::Ascii(v) => {
            let text = v
                .iter()
                .map(|s| String::from_utf8_lossy(s).trim_end_matches('\0').to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let count = text.len() as u32 + 1;
            (type_code::ASCII, count, text)
        }
        Value::Short(v) => (type_code::SHORT, v.len() as u32, join(v)),
        Value::Long(v) => (type_code::LONG, v.len() as u32, join(v)),
        Value::Rational(v) => (
            type_code::RATIONAL,
            v.len() as u32,
            join(v.iter().map(|r| format!("{}/{}", r.num, r.denom))),
        ),
        Value::SByte(v) => (type_code::SBYTE, v.len() as u32, join(v)),
        Value::Undefined(v, _) => (type_code::UNDEFINED, v.len() as u32, join(v)),
        Value::SShort(v) => (type_code::SSHORT, v.len() as u32, join(v)),
        Value::SLong(v) => (type_code::SLONG, v.len() as u32, join(v)),
        Value::SRational(v) => (
            type_code::SRATIONAL,
            v.len() as u32,
            join(v.iter().map(|r| format!("{}/{}", r.num, r.denom))),
        ),
        Value::Float(v) => (type_code::FLOAT, v.len() as u32, join(v)),
        Value::Double(v) => (type_code::DOUBLE, v.len() as u32, join(v)),
        Value::Unknown(typ, count, _) => (*typ, *count, String::new()),
        #[allow(unreachable_patterns)]
        _ => (0, 0, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::fixtures;
    use ::exif::{Rational, SRational, Tag};
    use std::fs;
    use tempfile::TempDir;

    // ── render_value ─────────────────────────────────────────────────

    #[test]
    fn render_ascii() {
        let value = Value::Ascii(vec![b"Acme\0".to_vec()]);
        assert_eq!(render_value(&value), (type_code::ASCII, 5, "Acme".to_string()));
    }

    #[test]
    fn render_rationals() {
        let value = Value::Rational(vec![
            Rational { num: 51, denom: 1 },
            Rational { num: 2628, denom: 100 },
        ]);
        assert_eq!(render_value(&value), (type_code::RATIONAL, 2, "51/1 2628/100".to_string()));

        let value = Value::SRational(vec![SRational { num: -1, denom: 3 }]);
        assert_eq!(render_value(&value), (type_code::SRATIONAL, 1, "-1/3".to_string()));
    }

    #[test]
    fn render_integers_and_bytes() {
        assert_eq!(
            render_value(&Value::Short(vec![8, 8, 8])),
            (type_code::SHORT, 3, "8 8 8".to_string())
        );
        assert_eq!(
            render_value(&Value::Undefined(b"0230".to_vec(), 0)),
            (type_code::UNDEFINED, 4, "48 50 51 48".to_string())
        );
    }

    #[test]
    fn primary_tiff_tags_map_to_image_group() {
        let field = Field {
            tag: Tag::Make,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"Acme".to_vec()]),
        };
        assert_eq!(group_of(&field), group::IMAGE);

        let thumb = Field { ifd_num: In::THUMBNAIL, ..field };
        assert_eq!(group_of(&thumb), group::THUMBNAIL);
    }

    #[test]
    fn exif_and_gps_contexts() {
        let iso = Field {
            tag: Tag::PhotographicSensitivity,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![100]),
        };
        assert_eq!(group_of(&iso), group::EXIF);

        let lat = Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"N".to_vec()]),
        };
        assert_eq!(group_of(&lat), group::GPS);
    }

    // ── ExifReader ───────────────────────────────────────────────────

    #[test]
    fn open_missing_file_fails() {
        let result = ExifReader::new().open(Path::new("/nonexistent/file.jpg"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[test]
    fn open_non_image_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(ExifReader::new().open(&path).is_err());
    }

    #[test]
    fn missing_exif_is_not_damage() {
        assert!(is_exif_absent(&::exif::Error::NotFound("PNG")));
        assert!(is_exif_absent(&::exif::Error::InvalidFormat("Unknown image format")));
        assert!(!is_exif_absent(&::exif::Error::InvalidFormat("Truncated IFD")));
        assert!(!is_exif_absent(&::exif::Error::BlankValue("no value")));
    }

    #[test]
    fn open_bmp_and_gif_without_exif() {
        let dir = TempDir::new().unwrap();
        for (name, format) in [
            ("plain.bmp", image::ImageFormat::Bmp),
            ("plain.gif", image::ImageFormat::Gif),
        ] {
            let path = dir.path().join(name);
            let mut bytes = std::io::Cursor::new(Vec::new());
            image::DynamicImage::new_rgb8(12, 7)
                .write_to(&mut bytes, format)
                .unwrap();
            fs::write(&path, bytes.into_inner()).unwrap();

            let err = Reader::new()
                .read_from_container(&mut Cursor::new(fs::read(&path).unwrap()))
                .err().unwrap();
            assert!(is_exif_absent(&err), "{name}: {err}");

            let mut handle = ExifReader::new().open(&path).unwrap();
            handle.read_metadata();
            assert_eq!((handle.pixel_width(), handle.pixel_height()), (12, 7));
            assert!(handle.entries().is_empty());
        }
    }

    #[test]
    fn open_jpeg_without_exif() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.jpg");
        fs::write(&path, fixtures::jpeg(32, 16)).unwrap();

        let mut handle = ExifReader::new().open(&path).unwrap();
        handle.read_metadata();
        assert_eq!(handle.pixel_width(), 32);
        assert_eq!(handle.pixel_height(), 16);
        assert!(handle.entries().is_empty());
    }

    #[test]
    fn open_jpeg_with_exif() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tagged.jpg");
        let fields = vec![
            fixtures::ascii(Tag::Make, "Acme"),
            Field {
                tag: Tag::ExposureTime,
                ifd_num: In::PRIMARY,
                value: Value::Rational(vec![Rational { num: 1, denom: 200 }]),
            },
        ];
        fs::write(&path, fixtures::jpeg_with_exif(40, 30, &fields)).unwrap();

        let mut handle = ExifReader::new().open(&path).unwrap();
        assert!(handle.entries().is_empty());
        handle.read_metadata();

        assert_eq!(handle.pixel_width(), 40);
        let make = handle
            .entries()
            .iter()
            .find(|e| e.tag_id == 0x010f)
            .unwrap();
        assert_eq!(make.group_id, group::IMAGE);
        assert_eq!(make.value, "Acme");

        let exposure = handle
            .entries()
            .iter()
            .find(|e| e.tag_id == 0x829a)
            .unwrap();
        assert_eq!(exposure.group_id, group::EXIF);
        assert_eq!(exposure.type_code, type_code::RATIONAL);
        assert_eq!(exposure.value, "1/200");
    }
}
