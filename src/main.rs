#![forbid(unsafe_code)]

//! `restart-herald` — countdown-driven scheduled restart daemon.
//!
//! Bootstraps configuration and logging, starts the periodic tick
//! driver for the countdown scheduler, and serves an administrative
//! console on stdin (`schedule <time>`, `cancel`, `status`, `reload`,
//! `quit`).

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tokio::io::AsyncBufReadExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use restart_herald::config::RestartConfig;
use restart_herald::host::{HostProcessControl, LogNotifier, LogRoster, ShellCommandSink};
use restart_herald::scheduler::countdown::CountdownScheduler;
use restart_herald::scheduler::executor::RestartExecutor;
use restart_herald::sinks::{ClientRoster, CommandSink, NotificationSink, ProcessControl};
use restart_herald::{timefmt, AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "restart-herald", about = "Scheduled restart daemon", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Arm a countdown at startup (time expression, e.g. "5m").
    #[arg(long)]
    schedule: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("restart-herald bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let config = Arc::new(RestartConfig::load_from_path(&args.config)?);
    info!("configuration loaded");

    let shutdown = CancellationToken::new();

    // ── Build collaborator sinks and the scheduler ──────
    let notifications: Arc<dyn NotificationSink> = Arc::new(LogNotifier);
    let commands: Arc<dyn CommandSink> = Arc::new(ShellCommandSink);
    let roster: Arc<dyn ClientRoster> = Arc::new(LogRoster);
    let process: Arc<dyn ProcessControl> = Arc::new(HostProcessControl::new(shutdown.clone()));
    let executor = Arc::new(RestartExecutor::new(
        Arc::clone(&notifications),
        commands,
        roster,
        process,
    ));
    let scheduler = Arc::new(Mutex::new(CountdownScheduler::new(
        Arc::clone(&config),
        notifications,
        executor,
    )));

    if let Some(expr) = &args.schedule {
        let seconds = timefmt::parse_duration(expr)?;
        scheduler.lock().await.schedule(seconds)?;
    }

    // ── Start the tick driver and the admin console ─────
    let tick_handle = spawn_tick_task(
        Arc::clone(&scheduler),
        config.tick_interval(),
        shutdown.clone(),
    );
    let console_handle = tokio::spawn(console_loop(
        Arc::clone(&scheduler),
        args.config.clone(),
        shutdown.clone(),
    ));
    info!("restart-herald ready");

    // ── Wait for shutdown ───────────────────────────────
    tokio::select! {
        () = shutdown.cancelled() => {}
        () = shutdown_signal() => {
            info!("shutdown signal received");
            shutdown.cancel();
        }
    }

    // Teardown counts as an implicit cancellation; no broadcast is sent
    // while the delivery layer is going away.
    scheduler.lock().await.abort();
    console_handle.abort();
    let _ = tick_handle.await;
    info!("restart-herald shut down");

    Ok(())
}

/// Spawn the periodic tick driver.
///
/// A single task drives all ticks through the scheduler mutex, so no
/// two ticks are ever processed concurrently. The first tick fires
/// immediately, matching the countdown cadence of a schedule request
/// arming at a whole second.
fn spawn_tick_task(
    scheduler: Arc<Mutex<CountdownScheduler>>,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    info!("tick driver shutting down");
                    break;
                }
                _ = interval.tick() => {
                    scheduler.lock().await.tick();
                }
            }
        }
    })
}

/// Serve administrative commands from stdin until shutdown or EOF.
async fn console_loop(
    scheduler: Arc<Mutex<CountdownScheduler>>,
    config_path: PathBuf,
    shutdown: CancellationToken,
) {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    handle_console_line(line.trim(), &scheduler, &config_path, &shutdown).await;
                }
                Ok(None) => break,
                Err(err) => {
                    error!(%err, "console read failed");
                    break;
                }
            }
        }
    }
}

async fn handle_console_line(
    line: &str,
    scheduler: &Mutex<CountdownScheduler>,
    config_path: &Path,
    shutdown: &CancellationToken,
) {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return;
    };

    match verb {
        "cancel" => {
            if !scheduler.lock().await.cancel() {
                info!("no restart scheduled");
            }
        }
        "status" => {
            let scheduler = scheduler.lock().await;
            if scheduler.is_scheduled() {
                let remaining = timefmt::format_duration(scheduler.remaining());
                info!(remaining, "restart scheduled");
            } else {
                info!("no restart scheduled");
            }
        }
        "reload" => match RestartConfig::load_from_path(config_path) {
            Ok(config) => {
                scheduler.lock().await.reconfigure(Arc::new(config));
                info!("configuration reloaded");
            }
            Err(err) => error!(%err, "configuration reload failed"),
        },
        "quit" | "stop" => shutdown.cancel(),
        "schedule" => {
            if let Some(expr) = parts.next() {
                schedule_from_expr(expr, scheduler).await;
            } else {
                warn!("usage: schedule <time>");
            }
        }
        // A bare time expression schedules directly.
        expr => schedule_from_expr(expr, scheduler).await,
    }
}

async fn schedule_from_expr(expr: &str, scheduler: &Mutex<CountdownScheduler>) {
    match timefmt::parse_duration(expr) {
        Ok(seconds) => {
            if let Err(err) = scheduler.lock().await.schedule(seconds) {
                warn!(%err, "schedule rejected");
            }
        }
        Err(err) => warn!(%err, expr, "invalid time expression"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
