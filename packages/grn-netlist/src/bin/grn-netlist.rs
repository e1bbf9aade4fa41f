//! GRN Netlist CLI
//!
//! Converts a parsed regulatory network document (JSON) into a logic netlist.
//!
//! # Usage
//!
//! ```bash
//! # Convert with the default two-pass classifier
//! grn-netlist convert --input toggle.json --output-dir out
//!
//! # Single-pass classifier, also write the Graphviz rendering
//! grn-netlist convert --input toggle.json --classifier single-pass --dot -v
//! ```

use clap::{Parser, Subcommand};
use grn_netlist::config::{ClassifierKind, ConverterConfig};
use grn_netlist::export::{write_dot, write_json};
use grn_netlist::{Document, NetlistConverter};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "grn-netlist")]
#[command(about = "Convert regulatory network documents into logic netlists", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one document
    Convert {
        /// Input document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output netlist file (default: <output-dir>/<input stem>_outputNetlist.json)
        #[arg(long)]
        output_netlist: Option<PathBuf>,

        /// Converter configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Gate classifier (overrides the configuration file)
        #[arg(long)]
        classifier: Option<ClassifierKind>,

        /// Also write <output-dir>/<netlist name>_dsgrn_import.dot
        #[arg(long)]
        dot: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Convert {
            input,
            output_dir,
            output_netlist,
            config,
            classifier,
            dot,
        } => {
            convert(&input, &output_dir, output_netlist, config, classifier, dot)?;
        }
    }

    Ok(())
}

fn convert(
    input: &Path,
    output_dir: &Path,
    output_netlist: Option<PathBuf>,
    config_path: Option<PathBuf>,
    classifier: Option<ClassifierKind>,
    dot: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_file() {
        return Err(format!("Input file does not exist: {}", input.display()).into());
    }

    let mut config = match config_path {
        Some(path) => ConverterConfig::from_yaml(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(classifier) = classifier {
        config.classifier = classifier;
    }

    let document: Document = serde_json::from_str(&std::fs::read_to_string(input)?)?;
    let converter = NetlistConverter::new(config);
    let mut netlist = converter.convert(&document)?;
    netlist.set_input_filename(input.display().to_string());

    std::fs::create_dir_all(output_dir)?;

    let netlist_path = output_netlist.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "netlist".to_string());
        output_dir.join(format!("{}_outputNetlist.json", stem))
    });
    write_json(&netlist, &netlist_path)?;
    info!("Wrote netlist to {}", netlist_path.display());

    if dot {
        let name = netlist.name().unwrap_or("netlist");
        let dot_path = output_dir.join(format!("{}_dsgrn_import.dot", name));
        write_dot(&netlist, &dot_path)?;
        info!("Wrote DOT rendering to {}", dot_path.display());
    }

    let stats = netlist.stats();
    println!(
        "{}: {} nodes, {} edges ({} unset)",
        netlist.name().unwrap_or("<empty>"),
        stats.nodes,
        stats.edges,
        stats.unset
    );
    Ok(())
}
