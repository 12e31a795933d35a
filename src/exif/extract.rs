use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::lookup::CodeTables;
use super::reader::{ExifReader, MetadataReader};
use super::registry::{group, TagRegistry};
use super::value::{TypedValue, ValueEntry, ValueStore};
use crate::error::ExtractError;

/// Timestamp layout used by EXIF date tags.
const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

// Tags read by the named accessors.
const TAG_IMAGE_WIDTH: u16 = 0x0100;
const TAG_IMAGE_HEIGHT: u16 = 0x0101;
const TAG_COMPRESSION: u16 = 0x0103;
const TAG_MAKE: u16 = 0x010f;
const TAG_MODEL: u16 = 0x0110;
const TAG_ORIENTATION: u16 = 0x0112;
const TAG_SOFTWARE: u16 = 0x0131;
const TAG_DATE_TIME: u16 = 0x0132;
const TAG_EXPOSURE_TIME: u16 = 0x829a;
const TAG_F_NUMBER: u16 = 0x829d;
const TAG_ISO: u16 = 0x8827;
const TAG_EXIF_VERSION: u16 = 0x9000;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;
const TAG_EXPOSURE_BIAS: u16 = 0x9204;
const TAG_LIGHT_SOURCE: u16 = 0x9208;
const TAG_FLASH: u16 = 0x9209;
const TAG_FOCAL_LENGTH: u16 = 0x920a;
const TAG_PIXEL_X_DIMENSION: u16 = 0xa002;
const TAG_PIXEL_Y_DIMENSION: u16 = 0xa003;
const TAG_WHITE_BALANCE: u16 = 0xa403;
const TAG_FOCAL_LENGTH_35MM: u16 = 0xa405;
const TAG_LENS_MAKE: u16 = 0xa433;
const TAG_LENS_MODEL: u16 = 0xa434;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

/// Tag catalogue plus enumerated-value tables. Build once, share by reference.
#[derive(Debug)]
pub struct Catalog {
    pub tags: TagRegistry,
    pub codes: CodeTables,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            tags: TagRegistry::standard(),
            codes: CodeTables::default(),
        }
    }
}

/// Drives files through a [`MetadataReader`] into [`ExtractionResult`]s.
pub struct Extractor<'c> {
    catalog: &'c Catalog,
    reader: Box<dyn MetadataReader>,
}

impl<'c> Extractor<'c> {
    /// Extractor using the built-in [`ExifReader`].
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_reader(catalog, Box::new(ExifReader::new()))
    }

    pub fn with_reader(catalog: &'c Catalog, reader: Box<dyn MetadataReader>) -> Self {
        Self { catalog, reader }
    }

    /// Read every recognised tag of `path`.
    ///
    /// Fails only when the file is missing or the reader cannot open it; a
    /// file without any recognised tag yields an empty result.
    pub fn extract(&self, path: &Path) -> Result<ExtractionResult<'c>, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut handle = self.reader.open(path).map_err(|source| {
            log::debug!("Reader rejected {}: {source}", path.display());
            ExtractError::UnreadableImage {
                path: path.to_path_buf(),
                source,
            }
        })?;
        handle.read_metadata();

        let mut values = ValueStore::new(&self.catalog.tags);
        for entry in handle.entries() {
            values.record(
                entry.tag_id,
                entry.group_id,
                &entry.value,
                entry.type_code,
                entry.count,
            );
        }
        log::debug!(
            "{}: {} of {} tags recognised",
            path.display(),
            values.len(),
            handle.entries().len()
        );

        let mut result = ExtractionResult {
            catalog: self.catalog,
            values,
            image_width: handle.pixel_width(),
            image_height: handle.pixel_height(),
            file_name: path.to_path_buf(),
        };
        if result.image_width == 0 {
            result.image_width = result.dimension_tag(TAG_IMAGE_WIDTH, TAG_PIXEL_X_DIMENSION);
        }
        if result.image_height == 0 {
            result.image_height = result.dimension_tag(TAG_IMAGE_HEIGHT, TAG_PIXEL_Y_DIMENSION);
        }

        Ok(result)
    }
}

/// Tags recognised in one file plus its pixel dimensions.
///
/// All accessors are projections over the recorded values: absent numeric
/// tags read as 0, absent text as an empty string, absent timestamps as `None`.
#[derive(Debug)]
pub struct ExtractionResult<'c> {
    catalog: &'c Catalog,
    values: ValueStore<'c>,
    image_width: u32,
    image_height: u32,
    file_name: PathBuf,
}

impl<'c> ExtractionResult<'c> {
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn values(&self) -> &ValueStore<'c> {
        &self.values
    }

    /// Recorded entries in file order.
    pub fn tags(&self) -> impl Iterator<Item = &ValueEntry<'c>> {
        self.values.iter()
    }

    pub fn first_value(&self, tag_id: u16, group_id: u16) -> Option<&TypedValue> {
        self.values.first_value(tag_id, group_id)
    }

    pub fn all_values(&self, tag_id: u16, group_id: u16) -> &[TypedValue] {
        self.values.all_values(tag_id, group_id)
    }

    fn integer(&self, tag_id: u16, group_id: u16) -> i64 {
        self.first_value(tag_id, group_id)
            .map(TypedValue::as_i64)
            .unwrap_or(0)
    }

    fn float(&self, tag_id: u16, group_id: u16) -> f64 {
        self.first_value(tag_id, group_id)
            .map(TypedValue::as_f64)
            .unwrap_or(0.0)
    }

    fn text(&self, tag_id: u16, group_id: u16) -> String {
        self.first_value(tag_id, group_id)
            .map(|v| v.to_string().trim().to_string())
            .unwrap_or_default()
    }

    fn date_time_tag(&self, tag_id: u16, group_id: u16) -> Option<NaiveDateTime> {
        parse_exif_date_time(&self.text(tag_id, group_id))
    }

    fn dimension_tag(&self, primary_tag: u16, exif_tag: u16) -> u32 {
        let value = match self.integer(primary_tag, group::IMAGE) {
            0 => self.integer(exif_tag, group::EXIF),
            v => v,
        };
        u32::try_from(value).unwrap_or(0)
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn orientation(&self) -> i64 {
        self.integer(TAG_ORIENTATION, group::IMAGE)
    }

    pub fn camera_make(&self) -> String {
        self.text(TAG_MAKE, group::IMAGE)
    }

    pub fn camera_model(&self) -> String {
        self.text(TAG_MODEL, group::IMAGE)
    }

    pub fn software(&self) -> String {
        self.text(TAG_SOFTWARE, group::IMAGE)
    }

    /// Last modification time recorded by the camera or editor.
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        self.date_time_tag(TAG_DATE_TIME, group::IMAGE)
    }

    pub fn compression(&self) -> &'static str {
        self.catalog
            .codes
            .compression
            .label(self.integer(TAG_COMPRESSION, group::IMAGE))
    }

    pub fn f_number(&self) -> String {
        self.text(TAG_F_NUMBER, group::EXIF)
    }

    pub fn exposure_time(&self) -> String {
        format_exposure_time(self.float(TAG_EXPOSURE_TIME, group::EXIF))
    }

    pub fn iso(&self) -> i64 {
        self.integer(TAG_ISO, group::EXIF)
    }

    pub fn exif_version(&self) -> String {
        self.text(TAG_EXIF_VERSION, group::EXIF)
    }

    pub fn date_time_original(&self) -> Option<NaiveDateTime> {
        self.date_time_tag(TAG_DATE_TIME_ORIGINAL, group::EXIF)
    }

    pub fn date_time_digitized(&self) -> Option<NaiveDateTime> {
        self.date_time_tag(TAG_DATE_TIME_DIGITIZED, group::EXIF)
    }

    /// Exposure compensation in EV.
    pub fn exposure_bias(&self) -> f64 {
        self.float(TAG_EXPOSURE_BIAS, group::EXIF)
    }

    pub fn light_source(&self) -> &'static str {
        self.catalog
            .codes
            .light_source
            .label(self.integer(TAG_LIGHT_SOURCE, group::EXIF))
    }

    pub fn flash(&self) -> &'static str {
        self.catalog.codes.flash.label(self.flash_id())
    }

    pub fn flash_id(&self) -> i64 {
        self.integer(TAG_FLASH, group::EXIF)
    }

    /// Focal length in millimetres.
    pub fn focal_length(&self) -> f64 {
        self.float(TAG_FOCAL_LENGTH, group::EXIF)
    }

    pub fn white_balance(&self) -> i64 {
        self.integer(TAG_WHITE_BALANCE, group::EXIF)
    }

    pub fn focal_length_35mm(&self) -> f64 {
        self.float(TAG_FOCAL_LENGTH_35MM, group::EXIF)
    }

    pub fn lens_make(&self) -> String {
        self.text(TAG_LENS_MAKE, group::EXIF)
    }

    pub fn lens_model(&self) -> String {
        self.text(TAG_LENS_MODEL, group::EXIF)
    }

    /// Degrees/minutes/seconds form, e.g. `N 51° 30' 26.28" W 0° 7' 39.6"`.
    /// Empty unless both hemispheres and both full triples are present.
    pub fn gps(&self) -> String {
        format_gps(
            self.first_value(TAG_GPS_LATITUDE_REF, group::GPS),
            self.all_values(TAG_GPS_LATITUDE, group::GPS),
            self.first_value(TAG_GPS_LONGITUDE_REF, group::GPS),
            self.all_values(TAG_GPS_LONGITUDE, group::GPS),
        )
    }

    /// Signed decimal degrees `(latitude, longitude)`, south and west negative.
    pub fn gps_coordinates(&self) -> Option<(f64, f64)> {
        let lat_ref = self.first_value(TAG_GPS_LATITUDE_REF, group::GPS)?.to_string();
        let lon_ref = self.first_value(TAG_GPS_LONGITUDE_REF, group::GPS)?.to_string();
        let latitude = dms_to_decimal(self.all_values(TAG_GPS_LATITUDE, group::GPS), &lat_ref)?;
        let longitude = dms_to_decimal(self.all_values(TAG_GPS_LONGITUDE, group::GPS), &lon_ref)?;
        Some((latitude, longitude))
    }
}

/// Parse an EXIF `yyyy:MM:dd HH:mm:ss` timestamp. Anything else is `None`.
pub fn parse_exif_date_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATE_FORMAT).ok()
}

/// Render an exposure time in seconds the way cameras display it.
///
/// `0` renders `"error"`, one second or longer renders `"<value> sec"`,
/// shorter times render as a `"1/<n>"` fraction.
pub fn format_exposure_time(seconds: f64) -> String {
    if seconds == 0.0 {
        return "error".to_string();
    }
    if seconds >= 1.0 {
        return format!("{seconds} sec");
    }
    let reciprocal = (1.0 / seconds * 10_000.0).round() / 10_000.0;
    format!("1/{reciprocal}")
}

fn format_gps(
    lat_ref: Option<&TypedValue>,
    latitude: &[TypedValue],
    lon_ref: Option<&TypedValue>,
    longitude: &[TypedValue],
) -> String {
    let (Some(lat_ref), Some(lon_ref)) = (lat_ref, lon_ref) else {
        return String::new();
    };
    let ([lat_d, lat_m, lat_s], [lon_d, lon_m, lon_s]) = (latitude, longitude) else {
        return String::new();
    };
    format!(
        "{lat_ref} {lat_d}° {lat_m}' {lat_s}\" {lon_ref} {lon_d}° {lon_m}' {lon_s}\""
    )
}

/// Convert a degrees/minutes/seconds triple to signed decimal degrees.
fn dms_to_decimal(triple: &[TypedValue], reference: &str) -> Option<f64> {
    let [degrees, minutes, seconds] = triple else {
        return None;
    };
    let mut coord = degrees.as_f64() + minutes.as_f64() / 60.0 + seconds.as_f64() / 3600.0;

    if matches!(reference.trim(), "S" | "W") {
        coord = -coord;
    }

    Some(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use crate::exif::reader::{ImageHandle, RawTagEntry};
    use crate::exif::registry::type_code;
    use std::fs;
    use tempfile::TempDir;

    /// Reader returning canned entries for any path.
    struct FakeReader {
        width: u32,
        height: u32,
        entries: Vec<RawTagEntry>,
    }

    struct FakeHandle {
        width: u32,
        height: u32,
        pending: Vec<RawTagEntry>,
        entries: Vec<RawTagEntry>,
    }

    impl ImageHandle for FakeHandle {
        fn read_metadata(&mut self) {
            self.entries = std::mem::take(&mut self.pending);
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

    impl MetadataReader for FakeReader {
        fn open(&self, _path: &Path) -> Result<Box<dyn ImageHandle>, ReadError> {
            Ok(Box::new(FakeHandle {
                width: self.width,
                height: self.height,
                pending: self.entries.clone(),
                entries: Vec::new(),
            }))
        }
    }

    struct FailingReader;

    impl MetadataReader for FailingReader {
        fn open(&self, _path: &Path) -> Result<Box<dyn ImageHandle>, ReadError> {
            Err(ReadError::Io(std::io::Error::other("corrupt container")))
        }
    }

    fn raw(tag_id: u16, group_id: u16, type_code: u16, count: u32, value: &str) -> RawTagEntry {
        RawTagEntry {
            tag_id,
            group_id,
            type_code,
            count,
            value: value.to_string(),
        }
    }

    fn extract_with(catalog: &Catalog, reader: FakeReader) -> ExtractionResult<'_> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.jpg");
        fs::write(&path, b"placeholder").unwrap();
        Extractor::with_reader(catalog, Box::new(reader))
            .extract(&path)
            .unwrap()
    }

    fn sample_entries() -> Vec<RawTagEntry> {
        vec![
            raw(0x010f, group::IMAGE, type_code::ASCII, 5, "Acme"),
            raw(0x0110, group::IMAGE, type_code::ASCII, 8, "Model X"),
            raw(0x0112, group::IMAGE, type_code::SHORT, 1, "6"),
            raw(0x0103, group::IMAGE, type_code::SHORT, 1, "6"),
            raw(0x0132, group::IMAGE, type_code::ASCII, 20, "2021:07:04 12:30:45"),
            raw(0x829a, group::EXIF, type_code::RATIONAL, 1, "1/200"),
            raw(0x829d, group::EXIF, type_code::RATIONAL, 1, "28/10"),
            raw(0x8827, group::EXIF, type_code::SHORT, 1, "400"),
            raw(0x9000, group::EXIF, type_code::UNDEFINED, 4, "48 50 51 48"),
            raw(0x9003, group::EXIF, type_code::ASCII, 20, "2021:07:04 12:30:40"),
            raw(0x9004, group::EXIF, type_code::ASCII, 20, "not a date"),
            raw(0x9204, group::EXIF, type_code::SRATIONAL, 1, "-2/3"),
            raw(0x9208, group::EXIF, type_code::SHORT, 1, "21"),
            raw(0x9209, group::EXIF, type_code::SHORT, 1, "25"),
            raw(0x920a, group::EXIF, type_code::RATIONAL, 1, "50/1"),
            raw(0xa403, group::EXIF, type_code::SHORT, 1, "1"),
            raw(0xa405, group::EXIF, type_code::SHORT, 1, "75"),
            raw(0xa433, group::EXIF, type_code::ASCII, 5, "Lens"),
            raw(0xa434, group::EXIF, type_code::ASCII, 9, "50mm f/2"),
            raw(0x0001, group::GPS, type_code::ASCII, 2, "N"),
            raw(0x0002, group::GPS, type_code::RATIONAL, 3, "51/1 30/1 2628/100"),
            raw(0x0003, group::GPS, type_code::ASCII, 2, "W"),
            raw(0x0004, group::GPS, type_code::RATIONAL, 3, "0/1 7/1 396/10"),
            raw(0xbeef, group::IMAGE, type_code::SHORT, 1, "3"),
        ]
    }

    // ── extract ──────────────────────────────────────────────────────

    #[test]
    fn extract_missing_file() {
        let catalog = Catalog::standard();
        let result = Extractor::new(&catalog).extract(Path::new("/nonexistent/file.jpg"));
        assert!(matches!(result, Err(ExtractError::FileNotFound { .. })));
    }

    #[test]
    fn extract_unreadable_image() {
        let catalog = Catalog::standard();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"xx").unwrap();

        let result = Extractor::with_reader(&catalog, Box::new(FailingReader)).extract(&path);
        assert!(matches!(result, Err(ExtractError::UnreadableImage { .. })));
    }

    #[test]
    fn extract_with_no_tags_is_valid() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader { width: 10, height: 20, entries: Vec::new() },
        );
        assert_eq!(result.tags().count(), 0);
        assert_eq!(result.image_width(), 10);
        assert_eq!(result.image_height(), 20);
        assert_eq!(result.camera_make(), "");
        assert_eq!(result.iso(), 0);
        assert!(result.date_time().is_none());
        assert_eq!(result.gps(), "");
        assert!(result.file_name().ends_with("photo.jpg"));
    }

    #[test]
    fn library_dimensions_win_over_tags() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader {
                width: 800,
                height: 600,
                entries: vec![
                    raw(0x0100, group::IMAGE, type_code::LONG, 1, "4000"),
                    raw(0x0101, group::IMAGE, type_code::LONG, 1, "3000"),
                ],
            },
        );
        assert_eq!((result.image_width(), result.image_height()), (800, 600));
    }

    #[test]
    fn zero_dimensions_fall_back_to_tags() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader {
                width: 0,
                height: 0,
                entries: vec![
                    raw(0x0100, group::IMAGE, type_code::LONG, 1, "4000"),
                    raw(0xa003, group::EXIF, type_code::LONG, 1, "3000"),
                ],
            },
        );
        assert_eq!((result.image_width(), result.image_height()), (4000, 3000));
    }

    // ── named accessors ──────────────────────────────────────────────

    #[test]
    fn named_accessors() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader { width: 800, height: 600, entries: sample_entries() },
        );

        assert_eq!(result.camera_make(), "Acme");
        assert_eq!(result.camera_model(), "Model X");
        assert_eq!(result.orientation(), 6);
        assert_eq!(result.compression(), "JPEG (old-style)");
        assert_eq!(result.exposure_time(), "1/200");
        assert_eq!(result.f_number(), "2.8");
        assert_eq!(result.iso(), 400);
        assert_eq!(result.exif_version(), "48 50 51 48");
        assert!((result.exposure_bias() + 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.light_source(), "D65");
        assert_eq!(result.flash_id(), 25);
        assert_eq!(result.flash(), "Auto, Fired");
        assert_eq!(result.focal_length(), 50.0);
        assert_eq!(result.white_balance(), 1);
        assert_eq!(result.focal_length_35mm(), 75.0);
        assert_eq!(result.lens_make(), "Lens");
        assert_eq!(result.lens_model(), "50mm f/2");
        assert_eq!(result.software(), "");
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader { width: 1, height: 1, entries: sample_entries() },
        );
        assert_eq!(result.tags().count(), sample_entries().len() - 1);
        assert!(result.first_value(0xbeef, group::IMAGE).is_none());
    }

    #[test]
    fn date_accessors() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader { width: 1, height: 1, entries: sample_entries() },
        );

        let taken = result.date_time().unwrap();
        assert_eq!(taken.format("%Y-%m-%d %H:%M:%S").to_string(), "2021-07-04 12:30:45");
        assert!(result.date_time_original().is_some());
        assert!(result.date_time_digitized().is_none());
    }

    #[test]
    fn unknown_flash_code() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader {
                width: 1,
                height: 1,
                entries: vec![raw(0x9209, group::EXIF, type_code::SHORT, 1, "2")],
            },
        );
        assert_eq!(result.flash(), "unknown");
    }

    // ── GPS ──────────────────────────────────────────────────────────

    #[test]
    fn gps_full_coordinates() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader { width: 1, height: 1, entries: sample_entries() },
        );

        let gps = result.gps();
        assert_eq!(gps, "N 51° 30' 26.28\" W 0° 7' 39.6\"");
        assert!(gps.contains('N') && gps.contains('W'));

        let (lat, lon) = result.gps_coordinates().unwrap();
        assert!((lat - 51.507_3).abs() < 1e-4);
        assert!((lon + 0.127_666).abs() < 1e-4);
    }

    #[test]
    fn gps_incomplete_triple_is_empty() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader {
                width: 1,
                height: 1,
                entries: vec![
                    raw(0x0001, group::GPS, type_code::ASCII, 2, "N"),
                    raw(0x0002, group::GPS, type_code::RATIONAL, 2, "51/1 30/1"),
                    raw(0x0003, group::GPS, type_code::ASCII, 2, "E"),
                    raw(0x0004, group::GPS, type_code::RATIONAL, 3, "1/1 2/1 3/1"),
                ],
            },
        );
        assert_eq!(result.gps(), "");
        assert!(result.gps_coordinates().is_none());
    }

    #[test]
    fn gps_mismatched_count_is_empty() {
        let catalog = Catalog::standard();
        let result = extract_with(
            &catalog,
            FakeReader {
                width: 1,
                height: 1,
                entries: vec![
                    raw(0x0001, group::GPS, type_code::ASCII, 2, "N"),
                    raw(0x0002, group::GPS, type_code::RATIONAL, 3, "51/1 30/1"),
                    raw(0x0003, group::GPS, type_code::ASCII, 2, "E"),
                    raw(0x0004, group::GPS, type_code::RATIONAL, 3, "1/1 2/1 3/1"),
                ],
            },
        );
        assert_eq!(result.gps(), "");
    }

    // ── formatting helpers ───────────────────────────────────────────

    #[test]
    fn exposure_time_formats() {
        assert_eq!(format_exposure_time(0.01), "1/100");
        assert_eq!(format_exposure_time(0.005), "1/200");
        assert_eq!(format_exposure_time(1.0 / 3.0), "1/3");
        assert_eq!(format_exposure_time(2.0), "2 sec");
        assert_eq!(format_exposure_time(2.5), "2.5 sec");
        assert_eq!(format_exposure_time(0.0), "error");
    }

    #[test]
    fn exposure_time_zero_denominator_propagates() {
        assert_eq!(format_exposure_time(f64::INFINITY), "inf sec");
    }

    #[test]
    fn date_time_parsing() {
        let parsed = parse_exif_date_time("2020:01:31 23:59:58").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2020-01-31 23:59:58");
        assert!(parse_exif_date_time("").is_none());
        assert!(parse_exif_date_time("0000:00:00 00:00:00").is_none());
        assert!(parse_exif_date_time("2020-01-31 23:59:58").is_none());
    }
}
