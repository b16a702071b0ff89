//! Order Engine Binary
//!
//! Validates one strategy, compiles it into an execution plan and submits
//! the plan to Binance USDT-M Futures.
//!
//! # Usage
//!
//! ```bash
//! order-engine market BTCUSDT BUY 0.01
//! order-engine limit BTCUSDT SELL 0.01 70000
//! order-engine stop-limit BTCUSDT BUY 0.01 65000 65100
//! order-engine oco BTCUSDT BUY 0.01 70000 60000
//! order-engine twap BTCUSDT BUY 1 300 5
//! order-engine grid BTCUSDT BUY 0.01 60000 70000 5
//! order-engine --dry-run grid BTCUSDT BUY 0.01 60000 70000 5
//! ```
//!
//! # Environment Variables
//!
//! A `.env` file in the working directory is loaded first.
//!
//! ## Required (except with `--dry-run`)
//! - `BINANCE_API_KEY`: API key
//! - `BINANCE_API_SECRET`: API secret
//!
//! ## Optional
//! - `BINANCE_ENV`: TESTNET | MAINNET (default: TESTNET)
//! - `BINANCE_RECV_WINDOW_MS`: Signed request validity window (default: 5000)
//! - `BINANCE_TIMEOUT_SECS`: HTTP timeout (default: 10)
//! - `ORDER_ENGINE_LOG_FILE`: Log file path (default: bot.log)
//! - `RUST_LOG`: Log filter (default: order_engine=info)
//!
//! # Exit Codes
//!
//! 0 all orders placed, 1 some order failed, 2 configuration error,
//! 3 invalid strategy input.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn};

use order_engine::error::{EXIT_ORDER_FAILED, EngineError};
use order_engine::infrastructure::config::{DotenvStatus, load_dotenv, log_file_from_env};
use order_engine::telemetry::init_telemetry;
use order_engine::{
    BinanceConfig, BinanceFuturesAdapter, ConsoleObserver, EngineConfig, ExecuteStrategyUseCase,
    ObserverSet, StrategyEngine, StrategyRequest, TokioPacer, TracingObserver,
};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    let _telemetry = init_telemetry(&log_file_from_env());
    report_dotenv(&dotenv);

    let dry_run = cli.dry_run;
    let request = cli.into_request();

    let outcome = if dry_run {
        print_plan(&request)
    } else {
        execute(&request).await
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            let code = e
                .downcast_ref::<EngineError>()
                .map_or(EXIT_ORDER_FAILED, EngineError::exit_code);
            error!(error = %e, exit_code = code, "Run aborted");
            eprintln!("Error: {e:#}");
            ExitCode::from(code)
        }
    }
}

fn report_dotenv(status: &DotenvStatus) {
    match status {
        DotenvStatus::Loaded(path) => info!(path = %path.display(), "Loaded .env file"),
        DotenvStatus::NotFound => debug!("No .env file found, using process environment"),
        DotenvStatus::Invalid(e) => warn!(error = %e, "Ignoring unreadable .env file"),
    }
}

/// Compile the request and print the plan as JSON without touching the network.
fn print_plan(request: &StrategyRequest) -> anyhow::Result<ExitCode> {
    let plan = StrategyEngine::new()
        .compile(request)
        .map_err(EngineError::from)?;
    let json = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
    println!("{json}");
    info!(strategy = %plan.kind(), steps = plan.len(), "Dry run complete");
    Ok(ExitCode::SUCCESS)
}

async fn execute(request: &StrategyRequest) -> anyhow::Result<ExitCode> {
    // Credentials are checked before the strategy is compiled.
    let config = EngineConfig::from_env().map_err(EngineError::from)?;
    info!(environment = %config.environment, "Configuration loaded");

    let adapter = BinanceFuturesAdapter::new(&BinanceConfig::from_engine_config(&config))
        .map_err(EngineError::from)?;
    let observers = ObserverSet::new()
        .with(Arc::new(TracingObserver))
        .with(Arc::new(ConsoleObserver::stdio()));

    let use_case = ExecuteStrategyUseCase::new(
        Arc::new(adapter),
        Arc::new(TokioPacer),
        Arc::new(observers),
    );
    let result = use_case.execute(request).await.map_err(EngineError::from)?;

    if result.is_complete_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_ORDER_FAILED))
    }
}
