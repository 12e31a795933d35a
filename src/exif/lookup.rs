use std::collections::BTreeMap;

/// Label returned for codes missing from a table.
pub const UNKNOWN_LABEL: &str = "unknown";

/// A small `code -> label` table for enumerated tag values.
///
/// Same shape and rules as the tag registry: append-only, first entry for a
/// code wins, lookups of uncatalogued codes fall back to [`UNKNOWN_LABEL`].
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    labels: BTreeMap<i64, &'static str>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_entries(entries: &[(i64, &'static str)]) -> Self {
        let mut table = Self::new();
        for &(code, label) in entries {
            table.add(code, label);
        }
        table
    }

    /// Add a label. Returns `false` when the code is already present.
    pub fn add(&mut self, code: i64, label: &'static str) -> bool {
        if self.labels.contains_key(&code) {
            return false;
        }
        self.labels.insert(code, label);
        true
    }

    pub fn find(&self, code: i64) -> Option<&'static str> {
        self.labels.get(&code).copied()
    }

    /// Label for `code`, or `"unknown"`.
    pub fn label(&self, code: i64) -> &'static str {
        self.find(code).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Compression scheme codes (tag 0x0103).
    pub fn compression() -> Self {
        Self::from_entries(&[
            (0x0001, "Uncompressed"),
            (0x0002, "CCITT 1D"),
            (0x0003, "T4/Group 3 Fax"),
            (0x0004, "T6/Group 4 Fax"),
            (0x0005, "LZW"),
            (0x0006, "JPEG (old-style)"),
            (0x0007, "JPEG"),
            (0x0008, "Adobe Deflate"),
            (0x0009, "JBIG B&W"),
            (0x000A, "JBIG Color"),
            (0x0063, "JPEG"),
            (0x0106, "Kodak 262"),
            (0x7FFE, "Next"),
            (0x7FFF, "Sony ARW Compressed"),
            (0x8001, "Packed RAW"),
            (0x8002, "Samsung SRW Compressed"),
            (0x8003, "CCIRLEW"),
            (0x8004, "Samsung SRW Compressed 2"),
            (0x8005, "PackBits"),
            (0x8029, "Thunderscan"),
            (0x8063, "Kodak KDC Compressed"),
            (0x807F, "IT8CTPAD"),
            (0x8080, "IT8LW"),
            (0x8081, "IT8MP"),
            (0x8082, "IT8BL"),
            (0x808C, "PixarFilm"),
            (0x808D, "PixarLog"),
            (0x80B2, "Deflate"),
            (0x80B3, "DCS"),
            (0x80EB, "Aperio JPEG 2000 YCbCr"),
            (0x80ED, "Aperio JPEG 2000 RGB"),
            (0x8765, "JBIG"),
            (0x8774, "SGILog"),
            (0x8775, "SGILog24"),
            (0x8798, "JPEG 2000"),
            (0x8799, "Nikon NEF Compressed"),
            (0x879B, "JBIG2 TIFF FX"),
            (0x879E, "Microsoft Document Imaging (MDI) Binary Level Codec"),
            (0x879F, "Microsoft Document Imaging (MDI) Progressive Transform Codec"),
            (0x87A0, "Microsoft Document Imaging (MDI) Vector"),
            (0x8847, "ESRI Lerc"),
            (0x884C, "Lossy JPEG"),
            (0x886D, "LZMA2"),
            (0x886E, "Zstd"),
            (0x886F, "WebP"),
            (0x8875, "PNG"),
            (0x8876, "JPEG XR"),
            (0xFDE8, "Kodak DCR Compressed"),
            (0xFFFF, "Pentax PEF Compressed"),
        ])
    }

    /// Light source codes (tag 0x9208).
    pub fn light_source() -> Self {
        Self::from_entries(&[
            (0x0001, "Daylight"),
            (0x0002, "Fluorescent"),
            (0x0003, "Tungsten (Incandescent)"),
            (0x0004, "Flash"),
            (0x0009, "Fine Weather"),
            (0x000A, "Cloudy"),
            (0x000B, "Shade"),
            (0x000C, "Daylight Fluorescent"),
            (0x000D, "Day White Fluorescent"),
            (0x000E, "Cool White Fluorescent"),
            (0x000F, "White Fluorescent"),
            (0x0010, "Warm White Fluorescent"),
            (0x0011, "Standard Light A"),
            (0x0012, "Standard Light B"),
            (0x0013, "Standard Light C"),
            (0x0014, "D55"),
            (0x0015, "D65"),
            (0x0016, "D75"),
            (0x0017, "D50"),
            (0x0018, "ISO Studio Tungsten"),
            (0x00FF, "Other"),
        ])
    }

    /// Flash status codes (tag 0x9209).
    pub fn flash() -> Self {
        Self::from_entries(&[
            (0x00, "No Flash"),
            (0x01, "Fired"),
            (0x05, "Fired, Return not detected"),
            (0x07, "Fired, Return detected"),
            (0x08, "On, Did not fire"),
            (0x09, "On, Fired"),
            (0x0d, "On, Return not detected"),
            (0x0f, "On, Return detected"),
            (0x10, "Off, Did not fire"),
            (0x14, "Off, Did not fire, Return not detected"),
            (0x18, "Auto, Did not fire"),
            (0x19, "Auto, Fired"),
            (0x1d, "Auto, Fired, Return not detected"),
            (0x1f, "Auto, Fired, Return detected"),
            (0x20, "No Flash function"),
            (0x30, "Off, No flash function"),
            (0x41, "Fired, Red-eye reduction"),
            (0x45, "Fired, Red-eye reduction, Return not detected"),
            (0x47, "Fired, Red-eye reduction, Return detected"),
            (0x49, "On, Red-eye reduction"),
            (0x4d, "On, Red-eye reduction, Return not detected"),
            (0x4f, "On, Red-eye reduction, Return detected"),
            (0x50, "Off, Red-eye reduction"),
            (0x58, "Auto, Did not fire, Red-eye reduction"),
            (0x59, "Auto, Fired, Red-eye reduction"),
            (0x5d, "Auto, Fired, Red-eye reduction, Return not detected"),
            (0x5f, "Auto, Fired, Red-eye reduction, Return detected"),
        ])
    }
}

/// The three enumerated-value tables, built together.
#[derive(Debug, Clone)]
pub struct CodeTables {
    pub compression: CodeTable,
    pub light_source: CodeTable,
    pub flash: CodeTable,
}

impl Default for CodeTables {
    fn default() -> Self {
        Self {
            compression: CodeTable::compression(),
            light_source: CodeTable::light_source(),
            flash: CodeTable::flash(),
        }
    }
}
