use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use product_markup::{Config, authoring_guide};

#[derive(Parser)]
#[command(name = "product-markup")]
#[command(about = "Render product descriptions written in the storefront markup")]
struct Cli {
    /// Input description file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (stdout when omitted; PDF defaults to input name with .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// TOML config file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the formatting help shown to editors and exit
    #[arg(long)]
    guide: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Typst,
    Json,
    Text,
    Pdf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.guide {
        for entry in authoring_guide() {
            println!("{:<12} {}", entry.marker, entry.effect);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::compiled_default(),
    };

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Error reading stdin")?;
            text
        }
    };

    let bytes = match cli.format {
        Format::Html => product_markup::description_to_html_with_config(&text, &config).into_bytes(),
        Format::Typst => product_markup::description_to_typst_with_config(&text, &config).into_bytes(),
        Format::Json => serde_json::to_vec_pretty(&product_markup::render(&text))?,
        Format::Text => product_markup::render(&text).to_plain_text().into_bytes(),
        Format::Pdf => product_markup::description_to_pdf_with_config(&text, &config)?,
    };

    // Determine output path
    let output = cli.output.or_else(|| match cli.format {
        Format::Pdf => Some(
            cli.input
                .as_ref()
                .map(|input| input.with_extension("pdf"))
                .unwrap_or_else(|| PathBuf::from("description.pdf")),
        ),
        _ => None,
    });

    match output {
        Some(path) => {
            fs::write(&path, &bytes).with_context(|| format!("Error writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
            eprintln!("Created {}", path.display());
        }
        None => io::stdout().write_all(&bytes).context("Error writing stdout")?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
