//! CLI for hal-interp - HAL+JSON document interpreter

use clap::{Parser, ValueEnum};
use hal_interp::render::{HalRenderer, MarkdownRenderer, Renderer};
use hal_interp::{ClientOptions, EmbeddedContext, HalClient, InterpretOptions, Representation};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable summary
    Markdown,
    /// HAL+JSON with absolute links
    Hal,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input HAL+JSON file path (reads stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Base URL for documents without an absolute self link
    #[arg(long)]
    context_url: Option<Url>,

    /// Fallback base URL, as from a Content-Location header
    #[arg(long)]
    content_location: Option<Url>,

    /// Resolve embedded documents against their parent's URL
    #[arg(long)]
    inherit_embedded_context: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Only print links matching this relation (literal or expanded)
    #[arg(long)]
    rel: Option<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let client = HalClient::new(ClientOptions {
        embedded_context: if args.inherit_embedded_context {
            EmbeddedContext::Inherit
        } else {
            EmbeddedContext::Isolated
        },
    });
    let options = InterpretOptions {
        context_url: args.context_url.clone(),
        content_location: args.content_location.clone(),
    };

    let repr = match read_input(&client, args.input.as_ref(), options) {
        Ok(repr) => repr,
        Err(e) => {
            eprintln!("Error interpreting document: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = match &args.rel {
        Some(rel) => Ok(render_links(&repr, rel)),
        None => match args.format {
            Format::Markdown => MarkdownRenderer.render(&repr),
            Format::Hal => HalRenderer { pretty: true }.render(&repr),
        },
    };
    let rendered = match rendered {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error rendering document: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(output) = args.output {
        if let Err(e) = std::fs::write(&output, &rendered) {
            eprintln!("Error writing output: {}", e);
            std::process::exit(1);
        }
        println!("Successfully wrote {:?}", output);
    } else {
        println!("{}", rendered);
    }
}

fn read_input(
    client: &HalClient,
    input: Option<&PathBuf>,
    options: InterpretOptions,
) -> hal_interp::Result<Representation> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)?;
            client.interpret_reader(BufReader::new(file), options)
        }
        _ => client.interpret_reader(std::io::stdin().lock(), options),
    }
}

fn render_links(repr: &Representation, rel: &str) -> String {
    repr.links_for(rel)
        .map(|link| {
            let target = link.target_url().unwrap_or("-");
            if link.is_embedded() {
                format!("{}\t{}\t(embedded)", link.literal_rel(), target)
            } else {
                format!("{}\t{}", link.literal_rel(), target)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
