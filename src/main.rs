use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use depscope::builder::GraphBuilder;
use depscope::export::{export_to_string, ExportFormat};
use depscope::parser::{
    parse_components_file, parse_resolution_file, parse_used_classes_file, ComponentIndex,
};

const DEFAULT_JSON_OUTPUT: &str = "reports/dependency-analysis/graph/graph.json";
const DEFAULT_DOT_OUTPUT: &str = "reports/dependency-analysis/graph/graph.gv";

#[derive(Parser)]
#[command(name = "depscope")]
#[command(version = "0.1.0")]
#[command(about = "Dependency graph analyzer for resolved build classpaths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the dependency graph for a resolved classpath
    Graph {
        /// Path to the resolution result JSON (the resolved dependency tree)
        #[arg(long)]
        resolution: PathBuf,

        /// Path to the component-description index JSON
        #[arg(long)]
        components: PathBuf,

        /// Path to the used-classes report JSON
        #[arg(long)]
        used_classes: Option<PathBuf>,

        /// Where to write the graph JSON
        #[arg(long, default_value = DEFAULT_JSON_OUTPUT)]
        output_json: PathBuf,

        /// Where to write the graph DOT file
        #[arg(long, default_value = DEFAULT_DOT_OUTPUT)]
        output_dot: PathBuf,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Graph {
            resolution,
            components,
            used_classes,
            output_json,
            output_dot,
        }) => {
            let root = parse_resolution_file(resolution)
                .with_context(|| format!("reading resolution result {}", resolution.display()))?;
            let index = ComponentIndex::new(
                parse_components_file(components)
                    .with_context(|| format!("reading components {}", components.display()))?,
            );
            let used = match used_classes {
                Some(path) => parse_used_classes_file(path)
                    .with_context(|| format!("reading used classes {}", path.display()))?,
                None => BTreeSet::new(),
            };

            let graph = GraphBuilder::new(&root, &index, used).build()?;

            if let Some(dir) = output_json.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(output_json, export_to_string(ExportFormat::Json, &graph)?)?;
            println!("Graph JSON at {}", output_json.display());

            if let Some(dir) = output_dot.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(output_dot, export_to_string(ExportFormat::Dot, &graph)?)?;
            println!("Graph DOT at {}", output_dot.display());
        }
        Some(Commands::Version) => {
            println!("depscope v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("DepScope - Dependency Graph Analyzer");
            println!("Run 'depscope graph --help' to see the required inputs");
        }
    }

    Ok(())
}
