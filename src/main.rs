//! Reads a `{accounts, instruction}` JSON request from a file or stdin and
//! prints the `{httpStatus, data}` response as JSON.
//!
//! Usage: instruction-transfer [--config <path>] [request.json]

use anyhow::Context;
use instruction_transfer::{AppConfig, TransferRequest, TransferService, logging};
use std::io::Read;

const CONFIG_ENV: &str = "TRANSFER_CONFIG";

fn get_config_path() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    std::env::var(CONFIG_ENV).ok()
}

fn get_input_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            args.next();
            continue;
        }
        return Some(arg);
    }
    None
}

fn read_request() -> anyhow::Result<String> {
    match get_input_path() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {}", path)),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request from stdin")?;
            Ok(body)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = match get_config_path() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    logging::init_logging(&config.logging);

    let body = read_request()?;
    let mut request: TransferRequest =
        serde_json::from_str(&body).context("Request is not a valid {accounts, instruction} object")?;

    let service = TransferService::new(config);
    let response = service.process(&mut request);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
