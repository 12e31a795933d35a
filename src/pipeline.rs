use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{ExtractError, ScanError};
use crate::exif::{ExtractionResult, Extractor};

/// Column names of the delimited output, in order.
pub const HEADER_FIELDS: [&str; 7] = [
    "directory",
    "name",
    "size",
    "date",
    "width",
    "height",
    "camera",
];

/// Layout of the `date` column.
const ROW_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bytes read from a file head when the extension gives no MIME type.
const SNIFF_LEN: usize = 64;

/// How scan results are written to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Header line plus one delimited row per image.
    #[default]
    Delimited,
    /// Pretty-printed JSON array of [`PictureRecord`]s.
    Json,
}

/// Guess a MIME type from the file extension.
///
/// ```rust
/// use exif_table::pipeline::mime_from_extension;
/// use std::path::Path;
///
/// assert_eq!(mime_from_extension(Path::new("photo.JPG")), Some("image/jpeg"));
/// assert_eq!(mime_from_extension(Path::new("notes.txt")), Some("text/plain"));
/// assert_eq!(mime_from_extension(Path::new("noext")), None);
/// ```
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "avif" => "image/avif",
        "cr2" => "image/x-canon-cr2",
        "cr3" => "image/x-canon-cr3",
        "dng" => "image/x-adobe-dng",
        "nef" => "image/x-nikon-nef",
        "arw" => "image/x-sony-arw",
        "raf" => "image/x-fuji-raf",
        "orf" => "image/x-olympus-orf",
        "rw2" => "image/x-panasonic-rw2",
        "pef" => "image/x-pentax-pef",
        "srw" => "image/x-samsung-srw",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

/// Guess a MIME type from the first bytes of the file.
fn mime_from_content(path: &Path) -> Option<&'static str> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)
        .ok()?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .ok()?;
    image::guess_format(&head)
        .ok()
        .map(|format| format.to_mime_type())
}

/// MIME type by extension, falling back to content sniffing.
pub fn detect_mime(path: &Path) -> Option<&'static str> {
    mime_from_extension(path).or_else(|| mime_from_content(path))
}

/// Whether the file's MIME type is `image/*`.
pub fn is_image(path: &Path) -> bool {
    detect_mime(path).is_some_and(|mime| mime.starts_with("image"))
}

/// Subdirectories before files, then by name.
fn directories_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Collect image files under `source`, depth-first.
///
/// Within each directory the subdirectories are fully visited before the
/// directory's own files. Unreadable entries are logged and skipped.
pub fn collect_images(source: &Path, follow_links: bool) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for entry in WalkDir::new(source)
        .follow_links(follow_links)
        .sort_by(directories_first)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            log::info!("Directory: {}", entry.path().display());
        } else if entry.file_type().is_file() && is_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    images
}

/// Flattened per-image view: filesystem attributes plus every named tag.
///
/// Owns copies of its values; it outlives the extraction that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureRecord {
    pub file_name: String,
    /// Absolute directory containing the file.
    pub directory: PathBuf,
    pub file_size: u64,
    pub image_width: u32,
    pub image_height: u32,
    pub orientation: i64,
    pub camera_make: String,
    pub camera_model: String,
    pub software: String,
    pub date_time: Option<NaiveDateTime>,
    pub compression: String,
    pub f_number: String,
    pub iso: i64,
    pub flash: String,
    pub flash_id: i64,
    pub focal_length: f64,
    pub lens_make: String,
    pub lens_model: String,
    pub exposure_time: String,
    pub exposure_bias: f64,
    pub exif_version: String,
    pub date_time_original: Option<NaiveDateTime>,
    pub date_time_digitized: Option<NaiveDateTime>,
    pub light_source: String,
    pub white_balance: i64,
    pub focal_length_35mm: f64,
    pub gps: String,
    /// Signed decimal `(latitude, longitude)`.
    pub gps_coordinates: Option<(f64, f64)>,
}

impl PictureRecord {
    /// Copy the named tags out of `result` and add the file's attributes.
    pub fn new(path: &Path, result: &ExtractionResult<'_>) -> Self {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let directory = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Self {
            file_name,
            directory,
            file_size,
            image_width: result.image_width(),
            image_height: result.image_height(),
            orientation: result.orientation(),
            camera_make: result.camera_make(),
            camera_model: result.camera_model(),
            software: result.software(),
            date_time: result.date_time(),
            compression: result.compression().to_string(),
            f_number: result.f_number(),
            iso: result.iso(),
            flash: result.flash().to_string(),
            flash_id: result.flash_id(),
            focal_length: result.focal_length(),
            lens_make: result.lens_make(),
            lens_model: result.lens_model(),
            exposure_time: result.exposure_time(),
            exposure_bias: result.exposure_bias(),
            exif_version: result.exif_version(),
            date_time_original: result.date_time_original(),
            date_time_digitized: result.date_time_digitized(),
            light_source: result.light_source().to_string(),
            white_balance: result.white_balance(),
            focal_length_35mm: result.focal_length_35mm(),
            gps: result.gps(),
            gps_coordinates: result.gps_coordinates(),
        }
    }

    /// Camera model, or the make when no model was recorded.
    pub fn camera(&self) -> &str {
        if self.camera_model.is_empty() {
            &self.camera_make
        } else {
            &self.camera_model
        }
    }

    /// One output row, without the trailing newline.
    pub fn row(&self, delimiter: char) -> String {
        let date = self
            .date_time
            .map(|d| d.format(ROW_DATE_FORMAT).to_string())
            .unwrap_or_default();
        let fields = [
            self.directory.display().to_string(),
            self.file_name.clone(),
            self.file_size.to_string(),
            date,
            self.image_width.to_string(),
            self.image_height.to_string(),
            self.camera().to_string(),
        ];
        fields.join(&delimiter.to_string())
    }
}

/// Header line for the given delimiter, without the trailing newline.
pub fn header(delimiter: char) -> String {
    HEADER_FIELDS.join(&delimiter.to_string())
}

/// Extract one file into a [`PictureRecord`].
pub fn read_picture(extractor: &Extractor<'_>, path: &Path) -> Result<PictureRecord, ExtractError> {
    let result = extractor.extract(path)?;
    Ok(PictureRecord::new(path, &result))
}

/// Counts reported at the end of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Images written to the destination.
    pub written: usize,
    /// Images skipped because extraction failed.
    pub skipped: usize,
}

/// Walk `source`, extract every image and write the results to `destination`.
///
/// Per-file failures are logged and skipped. Only a missing source directory
/// or a failure writing the destination aborts the scan.
pub fn scan(
    source: &Path,
    destination: &Path,
    extractor: &Extractor<'_>,
    config: &Config,
    format: OutputFormat,
) -> Result<ScanSummary, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let output_error = |source: std::io::Error| ScanError::Output {
        path: destination.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(destination).map_err(output_error)?);
    let delimiter = config.output.delimiter;

    if format == OutputFormat::Delimited && config.output.write_header {
        writeln!(out, "{}", header(delimiter)).map_err(output_error)?;
    }

    let images = collect_images(source, config.scan.follow_links);
    log::info!("Found {} image(s) under {}", images.len(), source.display());

    let mut summary = ScanSummary::default();
    let mut records = Vec::new();

    for path in &images {
        log::info!("File: {}", path.display());

        let record = match read_picture(extractor, path) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("  Skipped: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        match format {
            OutputFormat::Delimited => {
                writeln!(out, "{}", record.row(delimiter)).map_err(output_error)?;
            }
            OutputFormat::Json => records.push(record),
        }
        summary.written += 1;
    }

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out).map_err(output_error)?;
    }
    out.flush().map_err(output_error)?;

    log::info!(
        "Done: {} written, {} skipped out of {} images",
        summary.written,
        summary.skipped,
        images.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::{fixtures, Catalog};
    use ::exif::Tag;
    use std::fs;
    use tempfile::TempDir;

    // ── MIME detection ───────────────────────────────────────────────

    #[test]
    fn mime_by_extension() {
        assert_eq!(mime_from_extension(Path::new("a.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_from_extension(Path::new("a.NEF")), Some("image/x-nikon-nef"));
        assert_eq!(mime_from_extension(Path::new("a.heic")), Some("image/heic"));
        assert_eq!(mime_from_extension(Path::new("a.pdf")), Some("application/pdf"));
        assert_eq!(mime_from_extension(Path::new("a.unknownext")), None);
    }

    #[test]
    fn mime_by_content_when_extension_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("IMG0001");
        fs::write(&path, fixtures::jpeg(8, 8)).unwrap();

        assert_eq!(detect_mime(&path), Some("image/jpeg"));
        assert!(is_image(&path));
    }

    #[test]
    fn non_images_are_rejected() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("readme.txt");
        let blob = dir.path().join("blob");
        fs::write(&txt, b"hello").unwrap();
        fs::write(&blob, b"hello").unwrap();

        assert!(!is_image(&txt));
        assert!(!is_image(&blob));
    }

    // ── collect_images ───────────────────────────────────────────────

    #[test]
    fn collect_images_subdirectories_first() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("zz_sub");
        fs::create_dir(&sub).unwrap();

        fs::write(dir.path().join("a.jpg"), b"fake").unwrap();
        fs::write(sub.join("b.png"), b"fake").unwrap();
        fs::write(sub.join("c.txt"), b"fake").unwrap();

        let images = collect_images(dir.path(), false);
        assert_eq!(images, vec![sub.join("b.png"), dir.path().join("a.jpg")]);
    }

    #[test]
    fn collect_images_nested_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let a_inner = a.join("inner");
        fs::create_dir_all(&a_inner).unwrap();
        fs::create_dir(&b).unwrap();

        fs::write(dir.path().join("0.jpg"), b"fake").unwrap();
        fs::write(a.join("1.jpg"), b"fake").unwrap();
        fs::write(a_inner.join("2.jpg"), b"fake").unwrap();
        fs::write(b.join("3.jpg"), b"fake").unwrap();

        let images = collect_images(dir.path(), false);
        assert_eq!(
            images,
            vec![
                a_inner.join("2.jpg"),
                a.join("1.jpg"),
                b.join("3.jpg"),
                dir.path().join("0.jpg"),
            ]
        );
    }

    #[test]
    fn collect_images_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(collect_images(dir.path(), false).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn collect_images_follows_links_only_when_asked() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("x.jpg"), b"fake").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();

        assert!(collect_images(dir.path(), false).is_empty());
        assert_eq!(
            collect_images(dir.path(), true),
            vec![dir.path().join("linked").join("x.jpg")]
        );
    }

    // ── PictureRecord ────────────────────────────────────────────────

    fn tagged_picture(dir: &Path) -> PathBuf {
        let path = dir.join("tagged.jpg");
        let fields = vec![
            fixtures::ascii(Tag::Make, "Acme"),
            fixtures::ascii(Tag::DateTime, "2022:03:04 05:06:07"),
        ];
        fs::write(&path, fixtures::jpeg_with_exif(64, 48, &fields)).unwrap();
        path
    }

    #[test]
    fn record_from_file() {
        let dir = TempDir::new().unwrap();
        let path = tagged_picture(dir.path());
        let catalog = Catalog::standard();

        let record = read_picture(&Extractor::new(&catalog), &path).unwrap();
        assert_eq!(record.file_name, "tagged.jpg");
        assert!(record.directory.is_absolute());
        assert_eq!(record.file_size, fs::metadata(&path).unwrap().len());
        assert_eq!((record.image_width, record.image_height), (64, 48));
        assert_eq!(record.camera_make, "Acme");
        assert_eq!(record.camera(), "Acme");
        assert_eq!(record.flash, "No Flash");
        assert_eq!(record.exposure_time, "error");
    }

    #[test]
    fn record_row_layout() {
        let dir = TempDir::new().unwrap();
        let path = tagged_picture(dir.path());
        let catalog = Catalog::standard();
        let record = read_picture(&Extractor::new(&catalog), &path).unwrap();

        let row = record.row(';');
        let fields: Vec<&str> = row.split(';').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[1], "tagged.jpg");
        assert_eq!(fields[3], "2022-03-04 05:06:07");
        assert_eq!(&fields[4..], ["64", "48", "Acme"]);

        assert_eq!(record.row('\t').split('\t').count(), 7);
    }

    #[test]
    fn camera_prefers_model() {
        let dir = TempDir::new().unwrap();
        let path = tagged_picture(dir.path());
        let catalog = Catalog::standard();
        let mut record = read_picture(&Extractor::new(&catalog), &path).unwrap();

        record.camera_model = "X100".into();
        assert_eq!(record.camera(), "X100");
    }

    #[test]
    fn header_line() {
        assert_eq!(header(';'), "directory;name;size;date;width;height;camera");
        assert_eq!(header(','), "directory,name,size,date,width,height,camera");
    }

    // ── scan ─────────────────────────────────────────────────────────

    #[test]
    fn scan_missing_source() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::standard();
        let result = scan(
            &dir.path().join("missing"),
            &dir.path().join("out.csv"),
            &Extractor::new(&catalog),
            &Config::default(),
            OutputFormat::Delimited,
        );
        assert!(matches!(result, Err(ScanError::SourceNotFound { .. })));
    }

    #[test]
    fn scan_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::standard();
        let result = scan(
            dir.path(),
            &dir.path().join("no/such/dir/out.csv"),
            &Extractor::new(&catalog),
            &Config::default(),
            OutputFormat::Delimited,
        );
        assert!(matches!(result, Err(ScanError::Output { .. })));
    }

    #[test]
    fn scan_skips_broken_images() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        tagged_picture(src.path());
        fs::write(src.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let catalog = Catalog::standard();
        let destination = out.path().join("out.csv");
        let summary = scan(
            src.path(),
            &destination,
            &Extractor::new(&catalog),
            &Config::default(),
            OutputFormat::Delimited,
        )
        .unwrap();

        assert_eq!(summary, ScanSummary { written: 1, skipped: 1 });
        let contents = fs::read_to_string(&destination).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().nth(1).unwrap().ends_with(";64;48;Acme"));
    }

    #[test]
    fn scan_without_header() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        tagged_picture(src.path());

        let mut config = Config::default();
        config.output.write_header = false;
        config.output.delimiter = ',';

        let catalog = Catalog::standard();
        let destination = out.path().join("out.csv");
        scan(
            src.path(),
            &destination,
            &Extractor::new(&catalog),
            &config,
            OutputFormat::Delimited,
        )
        .unwrap();

        let contents = fs::read_to_string(&destination).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.trim_end().ends_with(",64,48,Acme"));
    }

    #[test]
    fn scan_json_output() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        tagged_picture(src.path());

        let catalog = Catalog::standard();
        let destination = out.path().join("out.json");
        scan(
            src.path(),
            &destination,
            &Extractor::new(&catalog),
            &Config::default(),
            OutputFormat::Json,
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["camera_make"], "Acme");
        assert_eq!(records[0]["image_width"], 64);
    }
}
