//! Addition CGI program.
//!
//! Invoked once per request by a CGI-capable web server. Request data arrives
//! through environment variables (and stdin for POST), the HTML response
//! leaves on stdout, and the exit status tells the host whether the inputs
//! parsed: 0 on success, 1 on failure.
//!
//! Logs go to stderr, which CGI servers collect into their error log; stdout
//! is reserved for the response.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use addition_cgi::cgi::{CgiRequest, CgiResponse};
use addition_cgi::config::{load_config, Config};
use addition_cgi::handler::AdditionHandler;
use addition_cgi::params::FormParams;

#[derive(Parser)]
#[command(name = "addition-cgi")]
#[command(about = "CGI program that adds two form fields and reports the sum", long_about = None)]
struct Cli {
    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show parse-failure detail in the error page.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stderr only; stdout carries the CGI response.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "addition_cgi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match cli.config {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(error) => {
                tracing::error!(path = %path.display(), error = %error, "Failed to load config");
                Config::default()
            }
        },
        None => Config::default(),
    };
    config = config.with_env_override(std::env::vars());
    if cli.debug {
        config.debug = true;
    }

    let handler = AdditionHandler::new(config.debug);

    let params = match CgiRequest::from_env(std::env::vars(), std::io::stdin().lock()) {
        Ok(request) => request.params,
        Err(error) => {
            // A malformed CGI environment still gets the apology page rather
            // than a blank response; the cause goes to the error log.
            tracing::error!(error = %error, "Failed to decode CGI request");
            FormParams::new()
        }
    };

    let response = handler.handle(&params);

    if let Err(error) = CgiResponse::html(&response.body).write_to(std::io::stdout().lock()) {
        tracing::error!(error = %error, "Failed to write response");
        return ExitCode::FAILURE;
    }

    if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
