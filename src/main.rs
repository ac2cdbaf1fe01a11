//! flowlayout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowlayout::syntax::Direction;
use flowlayout::{Format, LayoutConfig, render_dsl};

/// Lay out a flowchart edge list and print node positions.
#[derive(Parser, Debug)]
#[command(
    name = "flowlayout",
    version = env!("FLOWLAYOUT_VERSION"),
    about = "Layered layout for flowchart edge lists"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Override direction (LR, RL, TD, BT)
    #[arg(short = 'd', long = "direction")]
    direction: Option<Direction>,

    /// Output format (text, json)
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: Format,

    /// Distance between layers
    #[arg(long = "layer-spacing", default_value_t = 80.0)]
    layer_spacing: f64,

    /// Distance between columns within a layer
    #[arg(long = "column-spacing", default_value_t = 60.0)]
    column_spacing: f64,

    /// Print the convex hull of these comma-separated nodes (all if no list)
    #[arg(long = "hull", num_args = 0..=1, default_missing_value = "")]
    hull: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log pipeline stages to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flowlayout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_hull(arg: Option<&str>) -> Option<Vec<String>> {
    arg.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = LayoutConfig {
        direction: cli.direction,
        layer_spacing: cli.layer_spacing,
        column_spacing: cli.column_spacing,
    };
    let hull = parse_hull(cli.hull.as_deref());

    let rendered = match render_dsl(&text, cli.format, &config, hull) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
