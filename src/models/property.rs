use std::collections::BTreeSet;
use std::str::FromStr;

/// A toggleable field of a metadata record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Path,
    Filesize,
    LastModified,
    Filename,
    Extension,
    Checksum,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Path,
        Property::Filesize,
        Property::LastModified,
        Property::Filename,
        Property::Extension,
        Property::Checksum,
    ];

    /// Name used in the config file
    pub fn name(&self) -> &'static str {
        match self {
            Property::Path => "path",
            Property::Filesize => "filesize",
            Property::LastModified => "lastmodified",
            Property::Filename => "filename",
            Property::Extension => "extension",
            Property::Checksum => "checksum",
        }
    }

    /// Returns true if the property only applies to non-directory entries
    pub fn skips_directories(&self) -> bool {
        matches!(
            self,
            Property::Filename | Property::Extension | Property::Checksum
        )
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| format!("Unrecognized property '{}'", s))
    }
}

/// The set of properties the active configuration requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: BTreeSet<Property>,
}

impl PropertySet {
    /// Build a set from config names, dropping any name that is not a known property
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let properties = names
            .iter()
            .filter_map(|name| name.as_ref().parse::<Property>().ok())
            .collect();
        Self { properties }
    }

    pub fn contains(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Property> + '_ {
        self.properties.iter().copied()
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
