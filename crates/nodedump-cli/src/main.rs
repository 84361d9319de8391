use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use nodedump_core::{Degree, NodeKind, NodeLayout, NodeRequest, render_text};

mod prompt;

use prompt::Prompt;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("NODEDUMP_BUILD_COMMIT"),
    ", built ",
    env!("NODEDUMP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "nodedump")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Print the field layout of a raw B+tree node descriptor.",
    long_about = "Print the field layout of a raw B+tree node descriptor.\n\n\
        Without arguments the node kind, degree and data are asked for \
        interactively. With DEGREE and DATA the node is decoded as a leaf \
        unless --kind says otherwise.",
    after_help = "Examples:\n  nodedump\n  nodedump 3 0600000000000000010200...\n  nodedump --kind internal 3 0501...\n  nodedump --json --pretty 2 0200..."
)]
struct Cli {
    /// Tree degree (argument mode)
    #[arg(requires = "data", allow_negative_numbers = true)]
    degree: Option<Degree>,

    /// Raw node descriptor as a hex string (argument mode)
    data: Option<String>,

    /// Node kind to decode in argument mode
    #[arg(long, value_name = "KIND", default_value = "leaf", requires = "degree")]
    kind: NodeKind,

    /// Print the decoded layout as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let request = match (cli.degree, cli.data) {
        (Some(degree), Some(data)) => NodeRequest {
            kind: cli.kind,
            degree,
            data,
        },
        _ => read_interactive()?,
    };
    debug!(
        "decoding {} descriptor of {} characters with degree {}",
        request.kind,
        request.data.chars().count(),
        request.degree
    );

    let layout = request.decode();
    let rendered = if cli.json {
        serialize_layout(&layout, cli.pretty)?
    } else {
        render_text(&layout)
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to standard output")?;
    Ok(())
}

fn read_interactive() -> Result<NodeRequest, CliError> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    prompt.read_request().map_err(|err| {
        let hint = if err.downcast_ref::<nodedump_core::DegreeError>().is_some() {
            "enter the degree as a whole number, e.g. 4"
        } else {
            "answer the three prompts, or pass DEGREE and DATA as arguments"
        };
        CliError::new(format!("{:#}", err), Some(hint.to_string()))
    })
}

fn serialize_layout(layout: &NodeLayout, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(layout)
    } else {
        serde_json::to_string(layout)
    };
    json.map(|mut json| {
        json.push('\n');
        json
    })
    .context("JSON serialization failed")
    .map_err(Into::into)
}
