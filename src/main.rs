use std::process::ExitCode;

use clap::Parser;
use process_units::cli::Cli;
use process_units::config::{self, Config};
use process_units::app;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "명령 실행 실패");
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => config::load_or_default()?,
    };
    app::run(cli, &cfg)
}

/// `RUST_LOG` 가 있으면 그 값을, 없으면 `-v` 횟수에 맞는 수준을 쓴다.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
