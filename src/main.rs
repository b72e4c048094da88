use std::env;
use std::process::ExitCode;

use dotenv::dotenv;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use esdnevnik::utils::flow;
use esdnevnik::utils::prompt::TermPrompt;
use esdnevnik::utils::session::Session;

// Entry point for the async main function, powered by tokio runtime.
// Exit status is 2 only for setup failures before any network activity;
// runtime errors are reported on stderr and still exit 0.
#[tokio::main]
async fn main() -> ExitCode {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    // Initializes logging with simplelog to the terminal with mixed output (both stdout and stderr) and automatic color support.
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let Some(username) = username_from(env::args().skip(1)) else {
        println!("User is required");
        return ExitCode::from(2);
    };

    let session = match Session::new() {
        Ok(session) => session,
        Err(e) => {
            error!("Setup error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut prompt = TermPrompt;
    if let Err(e) = flow::run(&session, &username, &mut prompt).await {
        error!("Runtime error: {}", e);
    }
    ExitCode::SUCCESS
}

// Username comes from `-u <name>`, with an environment fallback so the
// account can live in `.env` alongside other local settings.
fn username_from<I: Iterator<Item = String>>(mut args: I) -> Option<String> {
    let mut username = None;
    while let Some(arg) = args.next() {
        if arg == "-u" {
            username = args.next();
        }
    }
    username
        .filter(|name| !name.is_empty())
        .or_else(|| env::var("ESDNEVNIK_USERNAME").ok().filter(|name| !name.is_empty()))
}
