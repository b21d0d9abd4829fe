//! Tests for rendering pipeline snapshots as code.
mod common;
use common::*;
use promptflow::export::{JavaScriptExporter, PythonExporter};
use promptflow::graph::{Edge, Node};
use promptflow::prelude::*;
use serde_json::{Value, json};

/// Pulls the JSON literal that follows `marker` up to `terminator`.
fn embedded_json(code: &str, marker: &str, terminator: &str) -> Value {
    let start = code.find(marker).expect("marker present") + marker.len();
    let end = start + code[start..].find(terminator).expect("terminator present");
    serde_json::from_str(&code[start..end]).expect("embedded literal is valid JSON")
}

#[test]
fn test_empty_pipeline_javascript() {
    let code = generate(&[], &[], ExportTarget::JavaScript);
    assert!(code.contains("const nodes = []"));
    assert!(code.contains("const edges = []"));
    assert!(code.contains("// Use these nodes and edges"));
}

#[test]
fn test_empty_pipeline_python() {
    let code = generate(&[], &[], ExportTarget::Python);
    assert_eq!(
        code,
        "\nimport json\n\nnodes = json.loads(r'''[]''')\nedges = json.loads(r'''[]''')\n\n# Use these nodes and edges with your ReactFlow component\n"
    );
}

#[test]
fn test_unsupported_target_returns_placeholder() {
    let graph = create_media_pipeline();
    let code = generate_for(graph.nodes(), graph.edges(), "unsupported-target");
    assert_eq!(code, UNSUPPORTED_TARGET);
    assert_eq!(code, "Unsupported language");
}

#[test]
fn test_target_names_are_case_insensitive() {
    let graph = create_media_pipeline();
    assert_eq!(
        generate_for(graph.nodes(), graph.edges(), "Python"),
        generate(graph.nodes(), graph.edges(), ExportTarget::Python)
    );
    assert!(matches!(
        "cobol".parse::<ExportTarget>(),
        Err(ExportError::UnknownTarget(name)) if name == "cobol"
    ));
}

#[test]
fn test_export_is_deterministic() {
    let graph = create_media_pipeline();
    for target in ExportTarget::ALL {
        let first = generate(graph.nodes(), graph.edges(), target);
        let second = generate(graph.nodes(), graph.edges(), target);
        assert_eq!(first, second, "{target} export changed between calls");
    }
}

#[test]
fn test_javascript_embeds_full_snapshot() {
    let graph = create_media_pipeline();
    let code = generate(graph.nodes(), graph.edges(), ExportTarget::JavaScript);

    let nodes = embedded_json(&code, "const nodes = ", ";\nconst edges");
    let edges = embedded_json(&code, "const edges = ", ";\n");

    assert_eq!(nodes.as_array().map(Vec::len), Some(3));
    assert_eq!(
        nodes[0],
        json!({
            "id": "1",
            "type": "textGeneration",
            "position": { "x": 0.0, "y": 0.0 },
            "data": { "input": "Describe a lighthouse at dusk", "model": "GPT-4o" },
            "style": { "width": 300.0, "height": 300.0 }
        })
    );
    assert_eq!(nodes[1]["data"]["negativePrompt"], "blurry");

    assert_eq!(edges[0]["id"], "e1-2");
    assert_eq!(edges[1]["source"], "2");
    assert_eq!(edges[1]["target"], "3");
    assert_eq!(edges[1]["animated"], true);
    assert_eq!(edges[1]["style"]["strokeDasharray"], "5, 5");
}

#[test]
fn test_python_escapes_single_quotes() {
    let mut graph = graph_with(&[NodeKind::TextGeneration]);
    graph
        .update_node_field("1", NodeField::Input, "Say '''hi''' in O'Brien's voice")
        .expect("node exists");

    let code = generate(graph.nodes(), graph.edges(), ExportTarget::Python);
    let nodes_literal_start = code.find("nodes = json.loads(r'''").unwrap();
    let body = &code[nodes_literal_start + "nodes = json.loads(r'''".len()..];
    let body = &body[..body.find("''')").unwrap()];

    assert!(!body.contains('\''));
    let nodes: Value = serde_json::from_str(body).expect("valid JSON");
    assert_eq!(nodes[0]["data"]["input"], "Say '''hi''' in O'Brien's voice");
}

#[test]
fn test_export_ignores_kind_semantics() {
    // A cycle and a self-loop are re-encoded as-is.
    let mut graph = graph_with(&[NodeKind::LlmCall, NodeKind::FunctionCall]);
    graph.connect("2", "1").expect("nodes exist");
    graph.connect("1", "1").expect("node exists");

    let code = generate(graph.nodes(), graph.edges(), ExportTarget::JavaScript);
    let edges = embedded_json(&code, "const edges = ", ";\n");
    let ids: Vec<&str> = edges
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["e1-2", "e2-1", "e1-1"]);
}

struct YamlExporter;

impl CodeExporter for YamlExporter {
    fn target_name(&self) -> &str {
        "yaml"
    }

    fn render(&self, nodes: &[Node], edges: &[Edge]) -> std::result::Result<String, ExportError> {
        let ids = nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        Ok(format!("nodes: {:?}\nedges: {}\n", ids, edges.len()))
    }
}

#[test]
fn test_exporter_registry_with_custom_target_and_alias() {
    let exporter = Exporter::builder()
        .with_custom_exporter(Box::new(YamlExporter))
        .with_alias("js", "javascript")
        .with_alias("ignored", "cobol")
        .build();

    assert_eq!(exporter.targets(), vec!["javascript", "js", "python", "yaml"]);
    assert!(!exporter.supports("ignored"));

    let snapshot = create_media_pipeline().snapshot();
    let yaml = exporter.render("yaml", &snapshot).expect("yaml registered");
    assert_eq!(yaml, "nodes: [\"1\", \"2\", \"3\"]\nedges: 2\n");

    let js = exporter.render("js", &snapshot).expect("alias registered");
    assert_eq!(
        js,
        JavaScriptExporter
            .render(&snapshot.nodes, &snapshot.edges)
            .unwrap()
    );

    assert_eq!(
        exporter.render("rust", &snapshot),
        Err(ExportError::UnknownTarget("rust".to_string()))
    );
    assert_eq!(
        exporter.render_or_placeholder("rust", &snapshot),
        UNSUPPORTED_TARGET
    );
}

#[test]
fn test_builtin_exporters_report_their_names() {
    assert_eq!(JavaScriptExporter.target_name(), ExportTarget::JavaScript.name());
    assert_eq!(PythonExporter.target_name(), ExportTarget::Python.name());
}
