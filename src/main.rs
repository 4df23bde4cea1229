use snooze::adapters::{FileCredentialsProvider, ReqwestHttpClient};
use snooze::api::ApiClient;
use snooze::app::App;
use snooze::cli::{self, Cli};
use snooze::config::Config;
use snooze::error::SnoozeError;
use snooze::logging::init_logging;

use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = Cli::parse().into_command();

    let config = Config::from_env();
    init_logging(&config.log_filter);
    tracing::debug!("Using API at {}", config.api_url);

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let store = match &config.credentials_path {
        Some(path) => FileCredentialsProvider::with_path(path),
        None => FileCredentialsProvider::new()?,
    };
    let api = ApiClient::new(&config.api_url, http)?;
    let mut app = App::new(api, store);

    let mut stdout = std::io::stdout();
    let result = cli::run(command, &mut app, &mut stdout, |prompt| {
        rpassword::prompt_password(prompt)
    })
    .await;

    if let Err(report) = result {
        // Domain errors get the short user-facing message, everything else the full report
        match report.downcast_ref::<SnoozeError>() {
            Some(err) => {
                tracing::debug!("{} error: {}", err.category(), err);
                eprintln!("{}", cli::error_report(err));
                std::process::exit(1);
            }
            None => return Err(report),
        }
    }

    Ok(())
}
