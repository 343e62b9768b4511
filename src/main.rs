#[macro_use]
extern crate tracing;

mod config;
mod error;
mod event;
mod handler;
mod processor;
mod records;
mod storage;
mod utils;


use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use lambda_runtime::{service_fn, LambdaEvent};
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;
use crate::event::ImageEvent;
use crate::handler::ImageHandler;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[clap(author, version, about = "Decodes, grayscales and stores uploaded images.")]
struct Args {
    /// The path to a YAML config file.
    ///
    /// Without one, images go to the `serverless-image-s3-storage` bucket and
    /// records to the `Images` table.
    #[clap(long, env = "MONOCHROME_CONFIG")]
    config: Option<PathBuf>,

    /// Override the destination S3 bucket.
    #[clap(long, env = "MONOCHROME_BUCKET")]
    bucket: Option<String>,

    /// Override the destination DynamoDB table.
    #[clap(long, env = "MONOCHROME_TABLE")]
    table: Option<String>,

    /// Emit logs as JSON lines.
    #[clap(
        long,
        env = "MONOCHROME_JSON_LOGS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    json_logs: bool,

    // The Lambda runtime starts the binary without arguments, which means `run`.
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Serve invocations from the Lambda runtime API.
    Run,

    /// Process a single payload read from a file and print the response.
    Invoke {
        /// A file containing the base64 encoded image.
        #[clap(long)]
        body_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let cfg = match args.config.as_ref() {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };
    let cfg = cfg.with_overrides(args.bucket.clone(), args.table.clone());
    debug!("Running with config {:?}", &cfg);

    let handler = Arc::new(build_handler(&cfg)?);

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run_lambda(handler).await,
        Command::Invoke { body_file } => run_once(&handler, body_file).await,
    }
}

fn build_handler(cfg: &RuntimeConfig) -> Result<ImageHandler> {
    let blobs = cfg.storage.connect()?;
    let records = cfg.records.connect()?;

    Ok(ImageHandler::new(blobs, records).with_orphan_cleanup(cfg.cleanup_orphans))
}

async fn run_lambda(handler: Arc<ImageHandler>) -> Result<()> {
    info!("Waiting for invocations");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ImageEvent>| {
        let handler = handler.clone();
        async move {
            Ok::<_, lambda_runtime::Error>(handler.handle(event.payload).await)
        }
    }))
    .await
    .map_err(|e| anyhow!("lambda runtime exited: {}", e))
}

async fn run_once(handler: &ImageHandler, body_file: PathBuf) -> Result<()> {
    let body = tokio::fs::read_to_string(&body_file).await?;
    let response = handler.handle(ImageEvent::new(body)).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
