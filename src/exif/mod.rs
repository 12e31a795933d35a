//! EXIF tag catalogue, value conversion and per-file extraction.
//!
//! The layers, leaf first:
//!
//! - [`TagRegistry`]: static `(tag id, group id)` catalogue with names and field types
//! - [`ValueStore`]: converts raw reader output into [`TypedValue`]s per catalogue entry
//! - [`Extractor`] / [`ExtractionResult`]: runs a file through a [`MetadataReader`] and
//!   exposes named accessors (camera, exposure, GPS, ...)
//!
//! Decoding the container itself is delegated to [`ExifReader`], which wraps
//! `kamadak-exif` and `image` behind the [`MetadataReader`] trait.

mod extract;
mod lookup;
mod reader;
mod registry;
mod tags;
mod value;

#[cfg(test)]
pub(crate) mod fixtures;

pub use extract::{
    format_exposure_time, parse_exif_date_time, Catalog, ExtractionResult, Extractor,
};
pub use lookup::{CodeTable, CodeTables, UNKNOWN_LABEL};
pub use reader::{ExifReader, ImageHandle, MetadataReader, RawTagEntry};
pub use registry::{group, type_code, TagDefinition, TagKey, TagRegistry};
pub use value::{RecordOutcome, TypedValue, ValueEntry, ValueStore};
