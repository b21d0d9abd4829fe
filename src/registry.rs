//! Static configuration for the six pipeline node kinds.
//!
//! Every kind maps to a display title, a colour theme, an icon name and a closed list of
//! selectable models. The lookup is an exhaustive `match`, so adding a kind without
//! configuring it is a compile error.

use crate::error::NodeKindParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The operation a pipeline node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    TextGeneration,
    ImageGeneration,
    VideoGeneration,
    LlmCall,
    FunctionCall,
    ApiCall,
}

/// Display and field configuration for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeKindConfig {
    pub title: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub icon: &'static str,
    pub models: &'static [&'static str],
}

impl NodeKind {
    /// All kinds, in toolbar order.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::TextGeneration,
        NodeKind::ImageGeneration,
        NodeKind::VideoGeneration,
        NodeKind::LlmCall,
        NodeKind::FunctionCall,
        NodeKind::ApiCall,
    ];

    /// The name used on the wire and in exported snapshots.
    pub fn wire_name(self) -> &'static str {
        match self {
            NodeKind::TextGeneration => "textGeneration",
            NodeKind::ImageGeneration => "imageGeneration",
            NodeKind::VideoGeneration => "videoGeneration",
            NodeKind::LlmCall => "llmCall",
            NodeKind::FunctionCall => "functionCall",
            NodeKind::ApiCall => "apiCall",
        }
    }

    pub fn config(self) -> &'static NodeKindConfig {
        match self {
            NodeKind::TextGeneration => &TEXT_GENERATION,
            NodeKind::ImageGeneration => &IMAGE_GENERATION,
            NodeKind::VideoGeneration => &VIDEO_GENERATION,
            NodeKind::LlmCall => &LLM_CALL,
            NodeKind::FunctionCall => &FUNCTION_CALL,
            NodeKind::ApiCall => &API_CALL,
        }
    }

    pub fn models(self) -> &'static [&'static str] {
        self.config().models
    }

    /// The model a node of this kind uses until one is picked explicitly.
    pub fn default_model(self) -> &'static str {
        self.models()[0]
    }

    pub fn supports_model(self, model: &str) -> bool {
        self.models().contains(&model)
    }

    /// Placeholder shown in the prompt input of a fresh node.
    pub fn input_placeholder(self) -> String {
        format!("Enter {} input...", self.config().title.to_lowercase())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for NodeKind {
    type Err = NodeKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NodeKindParseError(s.to_string()))
    }
}

const TEXT_GENERATION: NodeKindConfig = NodeKindConfig {
    title: "Text Generation",
    background: "bg-orange-50",
    text_color: "text-orange-600",
    icon: "Type",
    models: &["GPT-4o", "Claude Sonnet 3.5", "Gemma 2.0", "Llama 3.1"],
};

const IMAGE_GENERATION: NodeKindConfig = NodeKindConfig {
    title: "Image Generation",
    background: "bg-green-50",
    text_color: "text-green-600",
    icon: "Image",
    models: &["DALL-E", "Stable Diffusion", "Flux"],
};

const VIDEO_GENERATION: NodeKindConfig = NodeKindConfig {
    title: "Video Generation",
    background: "bg-blue-50",
    text_color: "text-blue-600",
    icon: "Video",
    models: &["Gen-1", "Gen-2", "Phenaki"],
};

const LLM_CALL: NodeKindConfig = NodeKindConfig {
    title: "LLM Call",
    background: "bg-purple-50",
    text_color: "text-purple-600",
    icon: "Brain",
    models: &["GPT-3", "GPT-4", "BERT", "T5"],
};

const FUNCTION_CALL: NodeKindConfig = NodeKindConfig {
    title: "Function Call",
    background: "bg-amber-50",
    text_color: "text-amber-600",
    icon: "Code",
    models: &["Custom Function 1", "Custom Function 2", "Custom Function 3"],
};

const API_CALL: NodeKindConfig = NodeKindConfig {
    title: "API Call",
    background: "bg-gray-50",
    text_color: "text-gray-600",
    icon: "Globe",
    models: &["REST API", "GraphQL", "gRPC"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for kind in NodeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.wire_name()));
            assert_eq!(kind.wire_name().parse::<NodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn every_kind_has_models() {
        for kind in NodeKind::ALL {
            assert!(!kind.models().is_empty(), "{kind} has no models");
            assert!(kind.supports_model(kind.default_model()));
        }
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = "webhook".parse::<NodeKind>().unwrap_err();
        assert_eq!(err, NodeKindParseError("webhook".to_string()));
    }

    #[test]
    fn placeholder_uses_lowercase_title() {
        assert_eq!(
            NodeKind::LlmCall.input_placeholder(),
            "Enter llm call input..."
        );
    }
}
