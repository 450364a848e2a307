use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub link: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl Asset {
    /// Case-insensitive substring match against the name or any tag.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

// Records written by older builds may carry `tags: null` or a bare string.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Design,
    Video,
    Audio,
    Document,
    Model,
    Code,
    Dataset,
}

impl AssetKind {
    pub const ALL: [AssetKind; 7] = [
        AssetKind::Design,
        AssetKind::Video,
        AssetKind::Audio,
        AssetKind::Document,
        AssetKind::Model,
        AssetKind::Code,
        AssetKind::Dataset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Design => "design",
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
            AssetKind::Document => "document",
            AssetKind::Model => "model",
            AssetKind::Code => "code",
            AssetKind::Dataset => "dataset",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Design => "Design File",
            AssetKind::Video => "Video",
            AssetKind::Audio => "Audio",
            AssetKind::Document => "Document",
            AssetKind::Model => "3D Model",
            AssetKind::Code => "Code Snippet",
            AssetKind::Dataset => "Dataset",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AssetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("Unknown asset type: {}", s.trim()))
    }
}

/// Raw asset form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub kind: String,
    pub link: String,
    pub tags: String,
}

impl AssetDraft {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        link: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        AssetDraft {
            name: name.into(),
            kind: kind.into(),
            link: link.into(),
            tags: tags.into(),
        }
    }
}

/// Splits comma-separated tag input, trimming each piece and dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub reading_time: &'static str,
    pub published: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackCategory {
    Design,
    Development,
    Strategy,
}

impl TrackCategory {
    pub const ALL: [TrackCategory; 3] = [
        TrackCategory::Design,
        TrackCategory::Development,
        TrackCategory::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackCategory::Design => "design",
            TrackCategory::Development => "development",
            TrackCategory::Strategy => "strategy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackCategory::Design => "Design",
            TrackCategory::Development => "Development",
            TrackCategory::Strategy => "Strategy",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningTrack {
    pub title: &'static str,
    pub description: &'static str,
    pub category: TrackCategory,
    pub duration: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LearningFilter {
    #[default]
    All,
    Only(TrackCategory),
}

impl LearningFilter {
    pub fn admits(&self, track: &LearningTrack) -> bool {
        match self {
            LearningFilter::All => true,
            LearningFilter::Only(category) => track.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningFilter::All => "all",
            LearningFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for LearningFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(LearningFilter::All);
        }
        TrackCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .map(LearningFilter::Only)
            .ok_or_else(|| format!("Unknown learning filter: {}", s.trim()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub result: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub id: &'static str,
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}
