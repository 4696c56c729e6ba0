use tracing::error;

use crate::config::Config;
use crate::error::Result;
use crate::export::{progression_tsv, table_tsv, write_progression_csv};
use crate::logging::init_logger;
use crate::server;
use crate::theory::resolve;

const USAGE: &str = "usage: triadic <serve|resolve|keys>";
const RESOLVE_USAGE: &str = "usage: triadic resolve <progression> [--table|--csv]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Resolve,
    Keys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Table,
    Csv,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("resolve") => Some(Command::Resolve),
        Some("keys") => Some(Command::Keys),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Resolve) => handle_resolve(args),
        Some(Command::Keys) => handle_keys(),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve() -> i32 {
    init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to start tokio runtime: {err}");
            return 1;
        }
    };

    match runtime.block_on(server::run_server(config)) {
        Ok(()) => 0,
        Err(err) => {
            error!("server error: {err}");
            1
        }
    }
}

/// Everything after `resolve` that is not a flag is joined with spaces, so
/// both `resolve "I V vi IV"` and `resolve I V vi IV` work.
fn handle_resolve(args: &[String]) -> i32 {
    let rest = args.get(2..).unwrap_or_default();
    let format = if rest.iter().any(|arg| arg == "--csv") {
        OutputFormat::Csv
    } else if rest.iter().any(|arg| arg == "--table") {
        OutputFormat::Table
    } else {
        OutputFormat::Json
    };
    let input = rest
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if input.trim().is_empty() {
        eprintln!("{RESOLVE_USAGE}");
        return 2;
    }

    match render_progression(&input, format) {
        Ok(rendered) => {
            print!("{rendered}");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn render_progression(input: &str, format: OutputFormat) -> Result<String> {
    let progression = resolve(input)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&progression)? + "\n"),
        OutputFormat::Table => Ok(progression_tsv(&progression)),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_progression_csv(&progression, &mut buffer)?;
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        }
    }
}

fn handle_keys() -> i32 {
    print!("{}", table_tsv());
    0
}
