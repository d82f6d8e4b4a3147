use clap::Parser;
use matrix_grader::{MatrixComparator, Params};
use serde_json::Value;
use tracing::Level;

/// Grade a matrix response against a reference answer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Student response as JSON, e.g. '[[1,0],[0,1]]'
    response: String,
    /// Reference answer as JSON
    answer: String,
    /// Grading params as a JSON object (optional)
    #[arg(long)]
    params: Option<String>,
    /// Log grading diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_json(what: &str, s: &str) -> Result<Value, (i32, String)> {
    serde_json::from_str(s).map_err(|e| (1, format!("Invalid {what} JSON: {e}")))
}

/// Grade once and return the pretty JSON result, or the exit code and message.
/// Exit 1 covers unreadable input, exit 2 a fatal grading error.
fn run(args: Args) -> Result<String, (i32, String)> {
    let response = parse_json("response", &args.response)?;
    let answer = parse_json("answer", &args.answer)?;
    let params = match args.params.as_deref() {
        None => Params::default(),
        Some(s) => Params::from_json_str(s).map_err(|e| (1, format!("Invalid params JSON: {e}")))?,
    };

    let result = MatrixComparator::new(params)
        .compare(&response, &answer)
        .map_err(|e| (2, e.to_string()))?;

    serde_json::to_string_pretty(&result).map_err(|e| (1, format!("Failed to encode result: {e}")))
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(args) {
        Ok(out) => println!("{out}"),
        Err((code, msg)) => {
            eprintln!("{msg}");
            std::process::exit(code);
        }
    }
}
