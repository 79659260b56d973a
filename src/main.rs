use medverify::cli::{self, Command};
use medverify::config::AppConfig;
use medverify::errors::CoreError;
use medverify::logging::init_logging;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match run(&args).await {
        Ok(code) => code,
        Err(CoreError::Usage(msg)) => {
            eprintln!("[medverify] {msg}\n{}", cli::USAGE);
            cli::EXIT_USAGE
        }
        Err(e) => {
            eprintln!("[medverify] {e}");
            cli::error_exit_code(&e)
        }
    };
    std::process::exit(code);
}

async fn run(args: &[String]) -> Result<i32, CoreError> {
    let command = cli::parse_args(args)?;
    match command {
        Command::Fingerprint { file, timestamp, policy } => {
            // No necesita store ni ledger: sólo calcula lo que habría que anclar.
            init_logging(&std::env::var("RUST_LOG").unwrap_or_else(|_| medverify::config::DEFAULT_LOG_FILTER.to_string()));
            log::debug!("fingerprinting {} at timestamp {timestamp}", file.display());
            let raw = tokio::fs::read_to_string(&file).await?;
            let out = cli::fingerprint_document(&raw, timestamp, policy)?;
            println!("{}", to_json(&out)?);
            Ok(cli::EXIT_VERIFIED)
        }
        Command::Verify(query) => {
            let config = AppConfig::load()?;
            init_logging(&config.log_filter);
            log::debug!("verifying {query} against {}", config.store.ledger_path.display());
            let service = config.integrity_service();
            let report = service.report(&query).await;
            println!("{}", to_json(&report)?);
            Ok(cli::exit_code(report.status))
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string_pretty(value).map_err(|e| CoreError::Internal(e.to_string()))
}
