use super::{CodeExporter, ExportTarget, UNSUPPORTED_TARGET};
use crate::error::ExportError;
use crate::graph::GraphSnapshot;
use ahash::AHashMap;
use tracing::{debug, warn};

/// A registry of exporters keyed by target name.
///
/// Starts with the built-in targets; custom exporters and aliases are added through
/// [`ExporterBuilder`].
pub struct Exporter {
    registry: AHashMap<String, Box<dyn CodeExporter>>,
}

pub struct ExporterBuilder {
    registry: AHashMap<String, Box<dyn CodeExporter>>,
}

impl ExporterBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn CodeExporter>> = AHashMap::new();
        for target in ExportTarget::ALL {
            registry.insert(target.name().to_string(), target.exporter());
        }
        Self { registry }
    }
    /// Makes `alias` resolve to a built-in target, e.g. `"js"` to `"javascript"`.
    pub fn with_alias(mut self, alias: &str, target_name: &str) -> Self {
        match target_name.parse::<ExportTarget>() {
            Ok(target) => {
                self.registry.insert(alias.to_string(), target.exporter());
            }
            Err(_) => warn!(alias, target_name, "Ignored alias for unknown target"),
        }
        self
    }
    pub fn with_custom_exporter(mut self, exporter: Box<dyn CodeExporter>) -> Self {
        self.registry
            .insert(exporter.target_name().to_string(), exporter);
        self
    }
    pub fn build(self) -> Exporter {
        Exporter {
            registry: self.registry,
        }
    }
}

impl Default for ExporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Exporter {
    fn default() -> Self {
        ExporterBuilder::new().build()
    }
}

impl Exporter {
    pub fn builder() -> ExporterBuilder {
        ExporterBuilder::new()
    }

    /// Registered target names, sorted.
    pub fn targets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn supports(&self, target: &str) -> bool {
        self.registry.contains_key(target)
    }

    pub fn render(&self, target: &str, snapshot: &GraphSnapshot) -> Result<String, ExportError> {
        let exporter = self
            .registry
            .get(target)
            .ok_or_else(|| ExportError::UnknownTarget(target.to_string()))?;
        debug!(
            export_target = target,
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "Exporting pipeline"
        );
        exporter.render(&snapshot.nodes, &snapshot.edges)
    }

    /// Renders for `target`, falling back to the fixed placeholder for unknown targets.
    pub fn render_or_placeholder(&self, target: &str, snapshot: &GraphSnapshot) -> String {
        match self.render(target, snapshot) {
            Ok(code) => code,
            Err(ExportError::UnknownTarget(_)) => UNSUPPORTED_TARGET.to_string(),
            Err(e) => e.to_string(),
        }
    }
}
