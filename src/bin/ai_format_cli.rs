//! ai-format-cli — inspect provider formats offline
//!
//! Usage:
//!   ai-format-cli list                          List known providers
//!   ai-format-cli format <provider> <file>      Format a JSON array of messages
//!   ai-format-cli parse <provider> <file>       Parse a saved provider response
//!   ai-format-cli usage <provider> <file>       Extract token usage from a response
//!   ai-format-cli check-config [file]           Validate a model bindings file ($AI_FORMAT_CONFIG if omitted)

use std::path::Path;

use ai_format_rust::config::CONFIG_ENV;
use ai_format_rust::{get_formatter, FormatConfig, Message, ProviderKind};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "list" => {
            cmd_list();
            Ok(())
        }
        "format" => with_provider_file(&args[2..], cmd_format),
        "parse" => with_provider_file(&args[2..], cmd_parse),
        "usage" => with_provider_file(&args[2..], cmd_usage),
        "check-config" => cmd_check_config(args.get(2).map(String::as_str)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("Unknown command: {other}")),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"ai-format-cli — provider message format tool

USAGE:
    ai-format-cli <COMMAND> [ARGS]

COMMANDS:
    list                        List known providers
    format <provider> <file>    Format a JSON array of messages for a provider
    parse <provider> <file>     Parse a saved provider response
    usage <provider> <file>     Extract token usage from a saved response
    check-config [file]         Validate a model bindings YAML file
                                (defaults to $AI_FORMAT_CONFIG)

Unknown providers use the openai format. Set RUST_LOG=debug for details."#
    );
}

fn with_provider_file(
    args: &[String],
    cmd: fn(&str, Value) -> Result<(), String>,
) -> Result<(), String> {
    match args {
        [provider, file, ..] => cmd(provider, read_json(Path::new(file))?),
        _ => Err("expected <provider> <file>".to_string()),
    }
}

fn read_json(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn cmd_list() {
    for kind in ProviderKind::ALL {
        let marker = if kind == ProviderKind::default() { " (default)" } else { "" };
        println!("{:<10} {}{}", kind.key(), kind.display_name(), marker);
    }
}

fn cmd_format(provider: &str, input: Value) -> Result<(), String> {
    let messages: Vec<Message> =
        serde_json::from_value(input).map_err(|e| format!("invalid messages: {e}"))?;
    print_json(&get_formatter(provider).format_messages(&messages))
}

fn cmd_parse(provider: &str, response: Value) -> Result<(), String> {
    let messages = get_formatter(provider)
        .parse_response(&response)
        .map_err(|e| e.to_string())?;
    print_json(&messages)
}

fn cmd_usage(provider: &str, response: Value) -> Result<(), String> {
    let usage = get_formatter(provider)
        .parse_usage(&response)
        .map_err(|e| e.to_string())?;
    print_json(&usage)
}

fn cmd_check_config(path: Option<&str>) -> Result<(), String> {
    let config = match path {
        Some(path) => FormatConfig::from_file(path).map_err(|e| e.to_string())?,
        None => FormatConfig::from_env()
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("check-config requires <file> or {}", CONFIG_ENV))?,
    };
    if let Err(e) = config.validate() {
        tracing::warn!(path = path.unwrap_or(CONFIG_ENV), "model bindings failed validation");
        return Err(e.to_string());
    }
    for binding in &config.models {
        println!("{:<24} {}", binding.model_name, binding.provider());
    }
    println!("{} binding(s) OK", config.models.len());
    Ok(())
}
