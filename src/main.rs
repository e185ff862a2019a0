use anyhow::{Context, Result};
use base64::Engine as _;
use clap::Parser;
use ootd_judge::OutfitJudge;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ootd-judge")]
#[command(about = "Judge the outfit in a photo")]
struct CliArgs {
    /// Path to the photo to critique.
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ootd_judge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let image_bytes = match std::fs::read(&args.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Could not read {}: {}", args.image_path.display(), e);
            std::process::exit(1);
        }
    };
    info!(
        "Judging {} ({} bytes)",
        args.image_path.display(),
        image_bytes.len()
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode(&image_bytes);
    let data_url = format!("data:image/jpeg;base64,{}", encoded);

    let judge = OutfitJudge::from_env();
    let judgment = judge.get_judgment(&data_url).await;

    let json = serde_json::to_string_pretty(&judgment).context("serialize judgment")?;
    println!("{}", json);
    Ok(())
}
