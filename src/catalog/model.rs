use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A named group of prompt variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
    pub fork_count: u32,
    pub star_count: u32,
    pub author: Author,
    #[serde(default)]
    pub variations: Vec<Variation>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named branch of versions within a collection, e.g. "Production" or "Testing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub versions: Vec<Version>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Text,
    Image,
    Code,
    Json,
    Video,
    Audio,
    Markdown,
}

/// The recorded output of a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionOutput {
    #[serde(rename = "type")]
    pub kind: OutputType,
    pub content: String,
}

/// One snapshot of a prompt and the output it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    pub note: String,
    pub prompt: String,
    pub output: VersionOutput,
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for creating a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollection {
    pub name: String,
    pub icon: String,
    pub model: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub fork_count: u32,
    #[serde(default)]
    pub star_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for creating a version in a variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVersion {
    pub variation_id: String,
    pub note: String,
    pub prompt: String,
    pub output: VersionOutput,
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentMetrics {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
}

/// Tracking record created alongside every version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub name: String,
    pub metrics: ExperimentMetrics,
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub artifacts: Vec<String>,
    pub version_id: String,
}

impl Experiment {
    /// Derives the experiment for a freshly created version: token counts become metrics,
    /// metadata plus the prompt become parameters.
    pub fn for_version(version: &Version) -> Self {
        let mut parameters = version.metadata.clone().unwrap_or_default();
        parameters.insert("prompt".to_string(), Value::String(version.prompt.clone()));
        Self {
            name: format!("Version {}", version.id),
            metrics: ExperimentMetrics {
                prompt_tokens: version.prompt_tokens,
                output_tokens: version.output_tokens,
            },
            parameters,
            artifacts: Vec::new(),
            version_id: version.id.clone(),
        }
    }
}

/// Response of a successful version creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedVersion {
    pub version: Version,
    pub experiment: Experiment,
}
