//! lisp-syntax-view CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use log::{debug, info};

use lisp_syntax_view::{OutputFormat, RenderConfig, render_source};

/// S-expression program to tidy tree layout (JSON, SVG or text).
#[derive(Parser, Debug)]
#[command(
    name = "lisp-syntax-view",
    version = env!("LISP_SYNTAX_VIEW_VERSION"),
    about = "S-expression program to tidy tree layout (JSON, SVG or text)"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Output format: json, svg or ascii
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Use plain ASCII instead of Unicode line characters (text output)
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log pipeline stages to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

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
    debug!("read {} bytes of input", text.len());

    let config = RenderConfig {
        format: cli.format,
        unicode: !cli.use_ascii,
        ..RenderConfig::default()
    };
    let rendered = match render_source(&text, &config) {
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
        info!("wrote {} output to '{}'", config.format, path);
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
