use std::process::ExitCode;

use tracing::{error, info};
use cash_wallet::wallet::{Currency, Wallet};

/// Separates the deposited denominations from the ones to withdraw.
const TAKE_FLAG: &str = "--take";

fn parse_money<'a>(names: impl Iterator<Item = &'a String>) -> Result<Vec<Currency>, String> {
    names
        .map(|name| name.parse::<Currency>().map_err(|e| e.to_string()))
        .collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <owner> <denomination>... [{TAKE_FLAG} <denomination>...]",
            args[0]
        );
        return ExitCode::FAILURE;
    }
    let owner = &args[1];
    let rest = &args[2..];
    let (put, take) = match rest.iter().position(|arg| arg == TAKE_FLAG) {
        Some(index) => (&rest[..index], Some(&rest[index + 1..])),
        None => (rest, None),
    };

    let put = match parse_money(put.iter()) {
        Ok(money) => money,
        Err(err) => {
            error!("Invalid denomination: {err}");
            return ExitCode::FAILURE;
        }
    };
    let take = match take.map(|names| parse_money(names.iter())).transpose() {
        Ok(money) => money,
        Err(err) => {
            error!("Invalid denomination: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut wallet = Wallet::new(owner.as_str());
    wallet.put_money(&put);
    info!(owner = %owner, units = put.len(), "wallet filled");

    let mut status = ExitCode::SUCCESS;
    if let Some(take) = take {
        if let Err(err) = wallet.take_money(&take) {
            error!("Error taking money: {err}");
            status = ExitCode::FAILURE;
        }
    }

    println!("{}", wallet.get_full_report());
    status
}
