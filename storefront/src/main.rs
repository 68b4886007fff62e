//! `storefront` entry-point: wires settings, the marketplace adapter, and the
//! command-line front end.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use storefront::StorefrontSettings;
use storefront::domain::{BlogViewService, CommentService, Notification};
use storefront::inbound::cli::{Cli, CliServices, execute};
use storefront::outbound::storefront_api::{StorefrontHttpApi, StorefrontHttpIdentity};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Logs go to stderr; stdout carries command output only.
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = StorefrontSettings::load_from_iter([OsString::from("storefront")])
        .map_err(|error| eyre!("failed to load storefront settings: {error}"))?;
    let base_url = settings
        .api_base_url()
        .wrap_err("STOREFRONT_API_BASE_URL is not a valid URL")?;

    let api = Arc::new(
        StorefrontHttpApi::with_identity(
            base_url,
            settings.request_timeout(),
            StorefrontHttpIdentity {
                user_agent: settings.user_agent().to_owned(),
            },
        )
        .wrap_err("failed to build marketplace client")?,
    );
    let blogs = BlogViewService::new(Arc::clone(&api));
    let comments = CommentService::new(api);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build storefront runtime")?;
    let outcome = runtime.block_on(execute(
        cli.command,
        CliServices {
            blogs: &blogs,
            comments: &comments,
        },
    ));

    match outcome {
        Ok(output) => {
            let json =
                serde_json::to_string_pretty(&output).wrap_err("failed to render output")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", Notification::from(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}
