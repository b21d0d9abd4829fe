use clap::{Args, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use promptflow::prelude::*;
use tracing_subscriber::EnvFilter;

/// Build prompt pipelines from the command line and export them as code
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available node kinds and their models
    Kinds,
    /// Build a pipeline from node and edge actions and print the export
    Build(BuildArgs),
    /// Export a previously saved pipeline snapshot
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Node kinds to add, in order (e.g. llmCall, apiCall)
    #[arg(short, long = "node", value_parser = parse_kind, required = true)]
    nodes: Vec<NodeKind>,

    /// Extra connections as SOURCE:TARGET node ids
    #[arg(short, long = "connect", value_parser = parse_connection)]
    connections: Vec<Connection>,

    /// Field edits as ID.FIELD=VALUE (fields: model, input, negativePrompt)
    #[arg(short, long = "set", value_parser = parse_field_edit)]
    edits: Vec<FieldEdit>,

    /// Viewport width in pixels used for grid placement
    #[arg(short, long)]
    width: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,

    /// Write the resulting snapshot JSON to this path
    #[arg(long)]
    save: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Path to a snapshot JSON file
    snapshot_path: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Target language (defaults to the configured target)
    #[arg(short, long, value_enum)]
    target: Option<TargetCli>,

    /// Path to an editor config JSON file
    #[arg(long)]
    config: Option<String>,
}

/// Export targets as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetCli {
    #[value(alias = "js")]
    Javascript,
    #[value(alias = "py")]
    Python,
}

#[derive(Debug, Clone)]
struct Connection {
    source: String,
    target: String,
}

#[derive(Debug, Clone)]
struct FieldEdit {
    node_id: String,
    field: NodeField,
    value: String,
}

fn parse_kind(s: &str) -> std::result::Result<NodeKind, String> {
    s.parse::<NodeKind>().map_err(|e| {
        let known = NodeKind::ALL.iter().map(|k| k.wire_name()).join(", ");
        format!("{} (expected one of: {})", e, known)
    })
}

fn parse_connection(s: &str) -> std::result::Result<Connection, String> {
    let (source, target) = s
        .split_once(':')
        .ok_or_else(|| format!("'{}' is not in SOURCE:TARGET form", s))?;
    Ok(Connection {
        source: source.trim().to_string(),
        target: target.trim().to_string(),
    })
}

fn parse_field_edit(s: &str) -> std::result::Result<FieldEdit, String> {
    let (path, value) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not in ID.FIELD=VALUE form", s))?;
    let (node_id, field_name) = path
        .split_once('.')
        .ok_or_else(|| format!("'{}' is missing the .FIELD part", path))?;
    let field = NodeField::from_name(field_name)
        .ok_or_else(|| format!("Unknown field '{}'", field_name))?;
    Ok(FieldEdit {
        node_id: node_id.to_string(),
        field,
        value: value.to_string(),
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,promptflow=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Kinds => list_kinds(),
        Command::Build(args) => run_build(args),
        Command::Export(args) => run_export(args),
    }
}

fn list_kinds() {
    for kind in NodeKind::ALL {
        let config = kind.config();
        println!("{:<16} {:<18} {}", kind.wire_name(), config.title, config.models.join(", "));
    }
}

fn load_config(path: Option<&str>) -> EditorConfig {
    match path {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    }
}

fn resolve_target(cli_target: Option<TargetCli>, config: &EditorConfig) -> ExportTarget {
    match cli_target {
        Some(TargetCli::Javascript) => ExportTarget::JavaScript,
        Some(TargetCli::Python) => ExportTarget::Python,
        None => config.default_target,
    }
}

fn run_build(args: BuildArgs) {
    let config = load_config(args.output.config.as_deref());
    let mut graph = config.new_graph();
    if let Some(width) = args.width {
        graph.set_viewport_width(width);
    }

    for kind in &args.nodes {
        graph.add_node(*kind);
    }
    for connection in &args.connections {
        graph
            .connect(&connection.source, &connection.target)
            .unwrap_or_else(|e| exit_with_error(&format!("Cannot connect: {}", e)));
    }
    for edit in args.edits {
        graph
            .update_node_field(&edit.node_id, edit.field, edit.value)
            .unwrap_or_else(|e| exit_with_error(&format!("Cannot edit node: {}", e)));
    }

    tracing::info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        columns = graph.layout().columns(),
        "Pipeline built"
    );

    if let Some(path) = &args.save {
        graph
            .snapshot()
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save '{}': {}", path, e)));
        tracing::info!(path = %path, "Snapshot saved");
    }

    let target = resolve_target(args.output.target, &config);
    print!("{}", generate(graph.nodes(), graph.edges(), target));
}

fn run_export(args: ExportArgs) {
    let config = load_config(args.output.config.as_deref());
    let snapshot = GraphSnapshot::from_file(&args.snapshot_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load snapshot '{}': {}",
            &args.snapshot_path, e
        ))
    });

    let graph = PipelineGraph::from_snapshot(snapshot, *config.new_graph().layout())
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let dangling = graph.dangling_edges();
    if !dangling.is_empty() {
        let ids = dangling.iter().map(|e| e.id.as_str()).join(", ");
        tracing::warn!("Snapshot has edges to missing nodes: {}", ids);
    }

    let target = resolve_target(args.output.target, &config);
    print!("{}", generate(graph.nodes(), graph.edges(), target));
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
