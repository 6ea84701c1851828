use std::path::PathBuf;
use clap::Parser;
use keyword_dispatch::config::DispatchOptions;
use keyword_dispatch::driver;

#[derive(Parser)]
#[command(name = "keyword-dispatch")]
#[command(about = "Dispatch a keyword and its arguments to a registered command")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML config file selecting the command units to load
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Keyword followed by the command's own arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut options = match &cli.config {
        Some(path) => match DispatchOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(driver::EXIT_USAGE);
            }
        },
        None => DispatchOptions::default(),
    };
    if cli.json {
        options.json = true;
    }

    log::debug!("loading units: {}", options.units.join(", "));
    let result = driver::run(&options, cli.tokens).await;

    if options.json {
        println!("{}", serde_json::json!(result));
    } else {
        if !result.stdout.is_empty() {
            print!("{}", result.stdout);
        }
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
    }

    std::process::exit(result.exit_code);
}
