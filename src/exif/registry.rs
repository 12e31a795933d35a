use std::collections::HashMap;

use super::tags::STANDARD_TAGS;

/// Metadata sub-block identifiers, as reported by the metadata reader.
///
/// The same tag number means different things in different groups
/// (0x0001 is `InteroperabilityIndex` in group 7 but `GPSLatitudeRef` in group 6).
pub mod group {
    /// Primary image IFD (IFD0).
    pub const IMAGE: u16 = 1;
    /// Thumbnail IFD (IFD1).
    pub const THUMBNAIL: u16 = 2;
    /// Exif sub-IFD.
    pub const EXIF: u16 = 5;
    /// GPS IFD.
    pub const GPS: u16 = 6;
    /// Interoperability IFD.
    pub const INTEROP: u16 = 7;

    /// Human-readable group name for diagnostics.
    pub fn name(group_id: u16) -> &'static str {
        match group_id {
            IMAGE => "Image",
            THUMBNAIL => "Thumbnail",
            EXIF => "Exif",
            GPS => "GPS",
            INTEROP => "Interop",
            _ => "Unknown",
        }
    }
}

/// TIFF field type codes.
pub mod type_code {
    pub const BYTE: u16 = 1;
    pub const ASCII: u16 = 2;
    pub const SHORT: u16 = 3;
    pub const LONG: u16 = 4;
    pub const RATIONAL: u16 = 5;
    pub const SBYTE: u16 = 6;
    pub const UNDEFINED: u16 = 7;
    pub const SSHORT: u16 = 8;
    pub const SLONG: u16 = 9;
    pub const SRATIONAL: u16 = 10;
    pub const FLOAT: u16 = 11;
    pub const DOUBLE: u16 = 12;

    /// Types whose raw value is kept as one string regardless of count.
    pub fn is_textual(code: u16) -> bool {
        matches!(code, ASCII | UNDEFINED)
    }
}

/// Composite key of a tag: `(tag id, group id)`.
pub type TagKey = (u16, u16);

/// One catalogue entry. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    pub tag_id: u16,
    pub group_id: u16,
    pub name: String,
    pub type_code: u16,
    pub description: String,
}

impl TagDefinition {
    pub fn key(&self) -> TagKey {
        (self.tag_id, self.group_id)
    }
}

/// Catalogue of known tags keyed by `(tag id, group id)`.
///
/// Append-only: a second registration of the same key is rejected and the
/// first definition is kept. Build it once with [`TagRegistry::standard`] and
/// hand it to whoever needs lookups.
///
/// ```rust
/// use exif_table::exif::{group, TagRegistry};
///
/// let registry = TagRegistry::standard();
/// let make = registry.lookup(0x010f, group::IMAGE).unwrap();
/// assert_eq!(make.name, "Make");
/// ```
#[derive(Debug, Default)]
pub struct TagRegistry {
    definitions: Vec<TagDefinition>,
    index: HashMap<TagKey, usize>,
}

impl TagRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalogue covering the image, thumbnail, Exif, GPS and
    /// interoperability groups.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for &(tag_id, group_id, type_code, name, description) in STANDARD_TAGS {
            if registry
                .register(tag_id, group_id, name, type_code, description)
                .is_none()
            {
                log::warn!(
                    "Duplicate catalogue entry 0x{tag_id:04x} in group {}",
                    group::name(group_id)
                );
            }
        }
        registry
    }

    /// Add a definition. Returns `None` when the key is already taken.
    pub fn register(
        &mut self,
        tag_id: u16,
        group_id: u16,
        name: &str,
        type_code: u16,
        description: &str,
    ) -> Option<&TagDefinition> {
        let key = (tag_id, group_id);
        if self.index.contains_key(&key) {
            return None;
        }

        let position = self.definitions.len();
        self.definitions.push(TagDefinition {
            tag_id,
            group_id,
            name: name.to_string(),
            type_code,
            description: description.to_string(),
        });
        self.index.insert(key, position);
        self.definitions.last()
    }

    pub fn lookup(&self, tag_id: u16, group_id: u16) -> Option<&TagDefinition> {
        self.index
            .get(&(tag_id, group_id))
            .map(|&position| &self.definitions[position])
    }

    /// First definition with the given name, in registration order.
    pub fn find_by_name(&self, name: &str) -> Option<&TagDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TagDefinition> {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = TagRegistry::new();
        let def = registry
            .register(0x010f, group::IMAGE, "Make", type_code::ASCII, "Manufacturer")
            .cloned()
            .unwrap();
        assert_eq!(def.key(), (0x010f, group::IMAGE));

        assert_eq!(registry.lookup(0x010f, group::IMAGE), Some(&def));
        assert!(registry.lookup(0x010f, group::EXIF).is_none());
        assert!(registry.lookup(0x0110, group::IMAGE).is_none());
    }

    #[test]
    fn duplicate_registration_keeps_original() {
        let mut registry = TagRegistry::new();
        registry.register(0x0001, group::GPS, "GPSLatitudeRef", type_code::ASCII, "first");

        let second = registry.register(0x0001, group::GPS, "Other", type_code::SHORT, "second");
        assert!(second.is_none());
        assert_eq!(registry.len(), 1);

        let kept = registry.lookup(0x0001, group::GPS).unwrap();
        assert_eq!(kept.name, "GPSLatitudeRef");
        assert_eq!(kept.type_code, type_code::ASCII);
        assert_eq!(kept.description, "first");
    }

    #[test]
    fn same_tag_id_in_different_groups() {
        let mut registry = TagRegistry::new();
        assert!(registry.register(0x0001, group::GPS, "GPSLatitudeRef", 2, "").is_some());
        assert!(registry.register(0x0001, group::INTEROP, "InteroperabilityIndex", 2, "").is_some());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(0x0001, group::INTEROP).unwrap().name, "InteroperabilityIndex");
    }

    #[test]
    fn standard_catalogue_has_no_duplicates() {
        let registry = TagRegistry::standard();
        assert_eq!(registry.len(), STANDARD_TAGS.len());
    }

    #[test]
    fn standard_catalogue_rejects_reregistration() {
        let mut registry = TagRegistry::standard();
        let before = registry.len();
        for &(tag_id, group_id, type_code, _, _) in STANDARD_TAGS {
            assert!(registry.register(tag_id, group_id, "Replacement", type_code, "").is_none());
        }
        assert_eq!(registry.len(), before);
        assert_eq!(registry.lookup(0x010f, group::IMAGE).unwrap().name, "Make");
    }

    #[test]
    fn standard_catalogue_covers_all_groups() {
        let registry = TagRegistry::standard();
        for group_id in [group::IMAGE, group::THUMBNAIL, group::EXIF, group::GPS, group::INTEROP] {
            assert!(
                registry.iter().any(|d| d.group_id == group_id),
                "no tags for group {}",
                group::name(group_id)
            );
        }
    }

    #[test]
    fn standard_catalogue_well_known_entries() {
        let registry = TagRegistry::standard();
        let exposure = registry.lookup(0x829a, group::EXIF).unwrap();
        assert_eq!(exposure.name, "ExposureTime");
        assert_eq!(exposure.type_code, type_code::RATIONAL);

        let latitude = registry.lookup(0x0002, group::GPS).unwrap();
        assert_eq!(latitude.name, "GPSLatitude");

        let thumb_offset = registry.lookup(0x0201, group::THUMBNAIL).unwrap();
        assert_eq!(thumb_offset.name, "JPEGInterchangeFormat");
    }

    #[test]
    fn find_by_name_returns_first_registered() {
        let registry = TagRegistry::standard();
        let width = registry.find_by_name("ImageWidth").unwrap();
        assert_eq!(width.group_id, group::IMAGE);
        assert!(registry.find_by_name("NoSuchTag").is_none());
    }

    #[test]
    fn group_names() {
        assert_eq!(group::name(group::GPS), "GPS");
        assert_eq!(group::name(42), "Unknown");
    }
}
