//! Ledge shelf widget client
//!
//! Connects to the native host process over its Unix socket, wires up the
//! shelf controllers, and dispatches host UI events on a single
//! cooperative event loop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledge_core::config::{Directories, Settings};
use ledge_core::{
    AutostartGuard, CommitOutcome, ContextMenuAdapter, FileShelfModel, TitleEditor,
    WindowStateController,
};
use ledge_rpc::{RpcClient, ShelfBridge, notification_to_host_event, socket_path};
use ledge_types::HostEvent;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Ledge shelf widget
#[derive(Parser)]
#[command(name = "ledge")]
#[command(about = "Ledge - auto-hiding desktop shelf widget")]
#[command(version)]
#[command(after_help = "\
Examples:
  ledge run               Connect to the host and run the widget loop
  ledge run --socket /run/user/1000/ledge.sock
  ledge status            Check whether the host is reachable

Environment:
  LEDGE_SOCKET            Host socket path override
  LEDGE_LOG               Log filter (default: info)
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the widget event loop in the foreground
    Run {
        /// Host socket path (overrides settings and LEDGE_SOCKET)
        #[arg(long)]
        socket: Option<PathBuf>,
    },

    /// Check host connectivity and print window state
    Status {
        /// Host socket path (overrides settings and LEDGE_SOCKET)
        #[arg(long)]
        socket: Option<PathBuf>,
    },
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env("LEDGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn resolve_socket(cli_socket: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_socket
        .or_else(|| settings.socket_path.clone())
        .unwrap_or_else(socket_path)
}

async fn connect(socket: PathBuf, settings: &Settings) -> Result<RpcClient> {
    let client = RpcClient::connect_to(socket.clone())
        .await
        .with_context(|| format!("failed to connect to host at {}", socket.display()))?;
    Ok(client.with_timeout(Duration::from_millis(settings.request_timeout_ms)))
}

async fn run(socket: Option<PathBuf>, settings: Settings) -> Result<()> {
    let socket = resolve_socket(socket, &settings);
    info!("connecting to host at {}", socket.display());

    let mut client = connect(socket, &settings).await?;
    let mut notifications = client
        .take_notifications()
        .context("notification stream unavailable")?;
    let bridge = Arc::new(ShelfBridge::new(client));

    // Independent of the rest: one-shot autostart refresh at launch.
    AutostartGuard::new(bridge.clone()).ensure().await;

    let shelf = Arc::new(FileShelfModel::new(bridge.clone()));
    let controller = WindowStateController::new(bridge.clone(), bridge.clone(), shelf.clone());
    let mut title = TitleEditor::mount(bridge.clone(), bridge.clone()).await;
    let menu = ContextMenuAdapter::new(bridge.clone(), settings.menu_theme.clone());

    let mut shelf_rx = shelf.subscribe();
    tokio::spawn(async move {
        while shelf_rx.changed().await.is_ok() {
            let count = shelf_rx.borrow_and_update().len();
            debug!("shelf rendered with {count} entries");
        }
    });

    info!("widget loop started");
    while let Some(notification) = notifications.recv().await {
        let Some(event) = notification_to_host_event(&notification) else {
            continue;
        };
        match event {
            HostEvent::PointerEntered => controller.on_hover_enter().await,
            HostEvent::PointerLeft => controller.on_hover_leave().await,
            HostEvent::TitleDoubleClicked => title.begin_edit(),
            HostEvent::TitleInput { text } => title.input(&text),
            HostEvent::KeyPressed { key } if key == "Enter" => {
                if title.commit().await == CommitOutcome::Failed {
                    warn!("title commit failed; the rename may not be persisted");
                }
            }
            HostEvent::KeyPressed { .. } => {}
            HostEvent::ContextMenuRequested => {
                if let Err(e) = bridge.send_menu_reply(&menu.descriptor()).await {
                    warn!("context menu reply failed: {e}");
                }
            }
            HostEvent::MenuItemActivated { action } => menu.activate(action).await,
            HostEvent::IconActivated { path_handle } => controller.open_entry(&path_handle).await,
        }
    }

    info!("host connection closed, exiting");
    Ok(())
}

async fn status(socket: Option<PathBuf>, settings: Settings) -> Result<()> {
    use ledge_core::WindowSurface;

    let socket = resolve_socket(socket, &settings);
    let client = connect(socket.clone(), &settings).await?;
    let bridge = ShelfBridge::new(client);

    let decorated = bridge
        .is_decorated()
        .await
        .context("host reachable but window query failed")?;
    println!(
        "host reachable at {} (window: {})",
        socket.display(),
        if decorated { "decorated" } else { "undecorated" }
    );
    Ok(())
}


#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let dirs = Directories::new();
    let settings = Settings::load_or_default(&dirs.settings_file);

    match cli.command {
        Commands::Run { socket } => run(socket, settings).await,
        Commands::Status { socket } => status(socket, settings).await,
    }
}
