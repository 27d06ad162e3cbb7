//! Pixtral CLI binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixtral_bridge::cli::{Cli, Commands, DescribeArgs};
use pixtral_bridge::config::BridgeConfig;
use pixtral_bridge::error::{PixtralError, Result};
use pixtral_bridge::image::{load_image, RawImage};
use pixtral_bridge::node::{combine_images, preview_text, PixtralInputs, PixtralNode, TextInput};
use pixtral_bridge::types::GenerationSettings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pixtral_bridge={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Describe(args) => match handle_describe(args).await {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Commands::Preview(args) => {
            for text in preview_text(TextInput::from(args.text)).text {
                println!("{text}");
            }
        }
    }

    ExitCode::SUCCESS
}

/// Load inputs and run the node. Only setup failures are errors; anything
/// after that comes back as the node's display string.
async fn handle_describe(args: DescribeArgs) -> Result<String> {
    let config = BridgeConfig::from_env()?;

    let api_key = args
        .api_key
        .or_else(|| config.api_key().map(str::to_string))
        .ok_or_else(|| PixtralError::Configuration("Missing MISTRAL_API_KEY".into()))?;

    let mut images = args
        .images
        .iter()
        .map(load_image)
        .collect::<Result<Vec<RawImage>>>()?;

    if args.batch {
        let slots: Vec<Option<RawImage>> = images.into_iter().map(Some).collect();
        images = combine_images(slots.len(), &slots)?.images();
    }

    let inputs = PixtralInputs::builder()
        .model_name(args.model)
        .prompt(args.prompt)
        .images(images)
        .api_key(api_key)
        .settings(GenerationSettings {
            temperature: args.temperature,
            max_tokens: args.max_tokens,
            top_p: args.top_p,
        })
        .build();

    Ok(PixtralNode::new(config).process(&inputs).await)
}
