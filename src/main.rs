//! Wallgen - client for a local AI wallpaper service.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod logging;
mod output;
mod ports;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::WallError;
use crate::output::{decode_image_content, resolve_save_path, save_image};
use crate::ports::{GenImgRequest, SetWallpaperRequest};

/// A validated unit of work, ready to send.
#[derive(Debug)]
enum Action {
    Generate { request: GenImgRequest, save: Option<String>, apply: bool },
    SetWallpaper(SetWallpaperRequest),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), WallError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(WallError::Config)?;

    // Validate before any context exists.
    let service_url =
        config.service_url(cli.service_url.as_deref()).map_err(WallError::InvalidArgument)?;
    let action = plan(&cli.command, &config)?;
    tracing::debug!(%service_url, ?action, "planned");

    let replay_path = std::env::var("WALLGEN_REPLAY").ok();
    let is_recording = std::env::var("WALLGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        tracing::info!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        tracing::info!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording(service_url);
        (ctx, Some(session))
    } else {
        (ServiceContext::live(service_url), None)
    };

    let result = execute(&ctx, action).await;
    drop(ctx);

    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    result
}

/// Turn parsed arguments into a request, applying config defaults.
fn plan(command: &Command, config: &Config) -> Result<Action, WallError> {
    match command {
        Command::Generate(args) => {
            let prompt = args.resolve_prompt().map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidInput => WallError::InvalidArgument(e.to_string()),
                _ => WallError::Io(e),
            })?;
            let request = GenImgRequest {
                server: args.server.clone().unwrap_or_else(|| config.backend.server.clone()),
                port: args.port.unwrap_or(config.backend.port),
                prompt,
                output_dir: args
                    .output_dir
                    .clone()
                    .unwrap_or_else(|| config.backend.output_dir.clone()),
            };
            Ok(Action::Generate { request, save: args.save.clone(), apply: args.apply })
        }
        Command::Set(args) => {
            let image_path = args.image_path.trim();
            if image_path.is_empty() {
                return Err(WallError::InvalidArgument("Image path must not be empty".into()));
            }
            Ok(Action::SetWallpaper(SetWallpaperRequest { image_path: image_path.to_string() }))
        }
    }
}

async fn execute(ctx: &ServiceContext, action: Action) -> Result<(), WallError> {
    match action {
        Action::Generate { request, save, apply } => {
            let response = ctx.service.generate_image(&request).await?;
            let image_path = response.image_path.trim();
            if image_path.is_empty() {
                tracing::warn!("service returned no image path");
            } else {
                println!("{image_path}");
            }

            if let Some(save) = save {
                let data = decode_image_content(&response.image_content)?;
                let path = resolve_save_path(&save, &response.image_path, &request.prompt);
                save_image(&data, &path)?;
                eprintln!("Saved: {}", path.display());
            }

            if apply {
                if image_path.is_empty() {
                    return Err(WallError::EmptyImagePath);
                }
                let set = SetWallpaperRequest { image_path: image_path.to_string() };
                ctx.service.set_wallpaper(&set).await?;
                eprintln!("Wallpaper set: {}", set.image_path);
            }
        }
        Action::SetWallpaper(request) => {
            let response = ctx.service.set_wallpaper(&request).await?;
            if !response.body.trim().is_empty() {
                println!("{}", response.body.trim());
            }
            eprintln!("Wallpaper set: {}", request.image_path);
        }
    }
    Ok(())
}
