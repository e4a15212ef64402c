//! Task Assistant MCP Server - Main Entry Point
//!
//! This is the main entry point for the task assistant MCP server application.
//! The actual implementation is in the `task_assist_mcp` library.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use task_assist_mcp::{AssistantConfig, AssistantHandler};
use tracing_subscriber::EnvFilter;

/// Task Assistant MCP Server - turn chat messages into structured tasks via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Date (YYYY-MM-DD) to treat as today instead of the local clock
    #[arg(long, value_parser = parse_date)]
    reference_date: Option<NaiveDate>,

    /// Log filter, e.g. "info" or "task_assist_mcp=debug" (logs go to stderr)
    #[arg(long, env = "TASK_ASSIST_LOG", default_value = "warn")]
    log_level: String,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs must go to stderr
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("Invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AssistantConfig {
        reference_date: args.reference_date,
    };
    tracing::info!(reference_date = ?config.reference_date, "starting task assistant MCP server");

    let handler = AssistantHandler::new(config);
    serve_stdio(handler).await?;
    Ok(())
}
