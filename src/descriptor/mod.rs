//! Media descriptor types
//!
//! A `MediaDescriptor` is the in-memory description of a media asset handed
//! to the engine by the hosting application: the optional virtual trim
//! (`cut`) and the three point-of-interest collections. Every point of
//! interest carries a real-domain marker in milliseconds plus payload data
//! the engine never inspects; unknown JSON fields are kept verbatim in
//! `extra` so a round trip through the engine loses nothing.

mod error;

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use error::DescriptorError;

/// Which edge of the virtual trim a `CutEdge` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Begin,
    End,
}

/// One edge of the virtual trim, in real-domain milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutEdge {
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    pub value: f64,
}

impl CutEdge {
    pub fn begin(value: f64) -> Self {
        Self {
            edge_type: EdgeType::Begin,
            value,
        }
    }

    pub fn end(value: f64) -> Self {
        Self {
            edge_type: EdgeType::End,
            value,
        }
    }
}

/// Slide image variants attached to a timecode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimecodeImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// A slide marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timecode {
    /// Real-domain time in milliseconds
    pub timecode: f64,
    #[serde(default)]
    pub image: TimecodeImage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Timecode {
    pub fn new(timecode: f64) -> Self {
        Self {
            timecode,
            image: TimecodeImage::default(),
            extra: Map::new(),
        }
    }

    pub fn with_image(mut self, small: impl Into<String>, large: impl Into<String>) -> Self {
        self.image = TimecodeImage {
            small: Some(small.into()),
            large: Some(large.into()),
        };
        self
    }
}

/// A chapter marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Real-domain time in milliseconds
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Chapter {
    pub fn new(value: f64, title: impl Into<String>) -> Self {
        Self {
            value,
            title: Some(title.into()),
            extra: Map::new(),
        }
    }
}

/// A tag marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Real-domain time in milliseconds
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
            extra: Map::new(),
        }
    }
}

/// Anything carrying a time marker the engine can filter and re-anchor.
pub trait PointOfInterest: Clone {
    /// Time marker in milliseconds.
    fn marker(&self) -> f64;

    /// Overwrite the time marker, leaving the payload untouched.
    fn set_marker(&mut self, marker: f64);

    /// Short human-readable label, if the payload has one.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl PointOfInterest for Timecode {
    fn marker(&self) -> f64 {
        self.timecode
    }

    fn set_marker(&mut self, marker: f64) {
        self.timecode = marker;
    }

    fn label(&self) -> Option<&str> {
        self.image.small.as_deref()
    }
}

impl PointOfInterest for Chapter {
    fn marker(&self) -> f64 {
        self.value
    }

    fn set_marker(&mut self, marker: f64) {
        self.value = marker;
    }

    fn label(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl PointOfInterest for Tag {
    fn marker(&self) -> f64 {
        self.value
    }

    fn set_marker(&mut self, marker: f64) {
        self.value = marker;
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Name of a point-of-interest collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PoiKind {
    Timecodes,
    Chapters,
    Tags,
}

impl PoiKind {
    /// All collections, in display order.
    pub const ALL: [PoiKind; 3] = [PoiKind::Timecodes, PoiKind::Chapters, PoiKind::Tags];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Timecodes => "timecodes",
            Self::Chapters => "chapters",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for PoiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point of interest from any collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Poi {
    Timecode(Timecode),
    Chapter(Chapter),
    Tag(Tag),
}

impl Poi {
    pub fn kind(&self) -> PoiKind {
        match self {
            Self::Timecode(_) => PoiKind::Timecodes,
            Self::Chapter(_) => PoiKind::Chapters,
            Self::Tag(_) => PoiKind::Tags,
        }
    }
}

impl PointOfInterest for Poi {
    fn marker(&self) -> f64 {
        match self {
            Self::Timecode(t) => t.marker(),
            Self::Chapter(c) => c.marker(),
            Self::Tag(t) => t.marker(),
        }
    }

    fn set_marker(&mut self, marker: f64) {
        match self {
            Self::Timecode(t) => t.set_marker(marker),
            Self::Chapter(c) => c.set_marker(marker),
            Self::Tag(t) => t.set_marker(marker),
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            Self::Timecode(t) => t.label(),
            Self::Chapter(c) => c.label(),
            Self::Tag(t) => t.label(),
        }
    }
}

/// Description of a media asset: optional trim plus points of interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    #[serde(default)]
    pub cut: Vec<CutEdge>,
    #[serde(default)]
    pub timecodes: Vec<Timecode>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl MediaDescriptor {
    /// Parse a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a descriptor from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DescriptorError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of entries in the named collection.
    pub fn count(&self, kind: PoiKind) -> usize {
        match kind {
            PoiKind::Timecodes => self.timecodes.len(),
            PoiKind::Chapters => self.chapters.len(),
            PoiKind::Tags => self.tags.len(),
        }
    }

    /// Entries of the named collection, wrapped as `Poi`.
    pub fn points(&self, kind: PoiKind) -> Vec<Poi> {
        match kind {
            PoiKind::Timecodes => self.timecodes.iter().cloned().map(Poi::Timecode).collect(),
            PoiKind::Chapters => self.chapters.iter().cloned().map(Poi::Chapter).collect(),
            PoiKind::Tags => self.tags.iter().cloned().map(Poi::Tag).collect(),
        }
    }
}
