//! # exif-table
//!
//! Walk a directory tree, read the EXIF metadata of every image and write one
//! delimited row (or one JSON record) per picture.
//!
//! ## Quick Start
//!
//! The pipeline module runs the whole walk → extract → write flow:
//!
//! ```rust,no_run
//! use exif_table::config::Config;
//! use exif_table::exif::{Catalog, Extractor};
//! use exif_table::pipeline::{scan, OutputFormat};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(Some("exif-table.json".as_ref()))?;
//!     let catalog = Catalog::standard();
//!     let extractor = Extractor::new(&catalog);
//!
//!     let summary = scan(
//!         Path::new("./photos"),
//!         Path::new("photos.csv"),
//!         &extractor,
//!         &config,
//!         OutputFormat::Delimited,
//!     )?;
//!     println!("{} written, {} skipped", summary.written, summary.skipped);
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! A single file can be extracted directly and queried by tag or by name:
//!
//! ```rust,no_run
//! use exif_table::exif::{group, Catalog, Extractor};
//! use std::path::Path;
//!
//! let catalog = Catalog::standard();
//! let result = Extractor::new(&catalog).extract(Path::new("photo.jpg")).unwrap();
//!
//! println!("{} x {}", result.image_width(), result.image_height());
//! println!("camera: {} {}", result.camera_make(), result.camera_model());
//! println!("exposure: {}", result.exposure_time());
//!
//! // Raw access by (tag id, group id)
//! if let Some(iso) = result.first_value(0x8827, group::EXIF) {
//!     println!("ISO {iso}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: JSON configuration with defaults
//! - [`error`]: error types for extraction and scanning
//! - [`exif`]: tag catalogue, value conversion and extraction
//! - [`pipeline`]: directory walk, per-image records and table output

pub mod config;
pub mod error;
pub mod exif;
pub mod pipeline;
