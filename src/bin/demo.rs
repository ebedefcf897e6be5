//! Demo binary for foundation-io E2E testing.
//!
//! This binary exercises foundation-io's public API for PTY-based integration
//! tests. Each subcommand demonstrates a specific feature.

use foundation_io::paths::DEFAULT_SHORTEN_MAX;
use foundation_io::{
    Arg, FileSystem, IoConfig, Logger, Report, StdoutSink, args, by_line, normalize, shorten,
};
use serde_json::json;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Force color output even in non-TTY (for test capture)
    colored::control::set_override(true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: foundation-demo <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  log|warn|dev|err|debug <message...>");
        eprintln!("  report [title] [description]");
        eprintln!("  inspect <json>");
        eprintln!("  ls <dir> [extension]");
        eprintln!("  cat <path> [filename]");
        eprintln!("  lines <path>");
        eprintln!("  shorten <path> [max]");
        eprintln!("  normalize <path>");
        std::process::exit(1);
    }

    let config = IoConfig::from_env();
    let logger = Logger::new(Arc::new(StdoutSink), &config);
    let rest = &args[2..];

    match args[1].as_str() {
        "log" => logger.log(rest),
        "warn" => logger.warn(rest),
        "dev" => logger.dev(rest),
        "err" => logger.err(rest),
        "debug" => logger.debug(rest),

        "report" => {
            let report = Report::new()
                .title(rest.first().cloned().unwrap_or_default())
                .description(rest.get(1).cloned().unwrap_or_default())
                .entry("pid", std::process::id())
                .entry("cwd", env::current_dir().ok().map(|p| p.display().to_string()))
                .entry("debugging", config.debugging)
                .entry("unset", None::<&str>);
            logger.report(&report);
        }

        "inspect" => {
            let raw = rest.first().map(|s| s.as_str()).unwrap_or("{}");
            let value = serde_json::from_str::<serde_json::Value>(raw)
                .map(Arg::from)
                .unwrap_or_else(|e| Arg::display(&e));
            logger.log(args!["inspected", value, json!({"source": "argv"})]);
        }

        "ls" => {
            let fs = FileSystem::new(logger.clone(), &config);
            let dir = rest.first().map(|s| s.as_str()).unwrap_or(".");
            let files = fs.list_files(dir, rest.get(1).map(|s| s.as_str())).await;
            for file in files {
                println!("{}", file);
            }
        }

        "cat" => {
            let fs = FileSystem::new(logger.clone(), &config);
            let path = rest.first().map(|s| s.as_str()).unwrap_or(".");
            let text = fs.read_file(path, rest.get(1).map(|s| s.as_str())).await;
            print!("{}", text);
        }

        "lines" => {
            let fs = FileSystem::new(logger.clone(), &config);
            let path = rest.first().map(|s| s.as_str()).unwrap_or(".");
            let text = fs.read_file(path, None).await;
            for (i, line) in by_line(Some(text.as_str())).iter().enumerate() {
                println!("{:>4} {}", i + 1, line);
            }
        }

        "shorten" => {
            let path = rest.first().map(|s| s.as_str()).unwrap_or("");
            let max = rest
                .get(1)
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SHORTEN_MAX);
            println!("{}", shorten(path, max));
        }

        "normalize" => {
            let path = rest.first().map(|s| s.as_str()).unwrap_or("");
            println!("{}", normalize(path));
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}
