//! Page Replay Entry Point
//!
//! Loads a page layout, wires the portfolio behavior onto it, replays a
//! timed event stream and prints the resulting page state as JSON.
//! Uses `anyhow` for startup errors; the exit code follows the
//! `kernel::error::ErrorKind` of the failure.

mod settings;

use std::process::ExitCode;
use std::time::Duration;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::TokioScheduler;
use portfolio::{
    BehaviorConfig, Document, LineEvents, LocalEventSource, PageBehavior, PageError, PageLayout,
    PageSnapshot, ScriptedEvents, dispatch, initialize,
};
use tokio::io::BufReader;
use tokio::task::LocalSet;
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[derive(Debug, Default)]
struct ReplayStats {
    dispatched: usize,
    failed: usize,
    skipped: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay=info,portfolio=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Throttle timers are spawned on the local task set.
    let local = LocalSet::new();
    match local.run_until(run()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = exit_kind(&e);
            if kind.is_internal() {
                tracing::error!(error = ?e, kind = %kind, "Replay failed");
            } else {
                tracing::warn!(error = %e, kind = %kind, "Replay rejected its input");
            }
            ExitCode::from(kind.exit_code())
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    tracing::info!(
        layout = %settings.layout.display(),
        script = ?settings.script,
        throttle_ms = ?settings.scroll_throttle.map(|t| t.window_ms()),
        "Starting replay"
    );

    let document = PageLayout::load(&settings.layout).await?.build()?;
    let mut config = BehaviorConfig::default();
    if let Some(throttle) = settings.scroll_throttle {
        config = config.with_scroll_throttle(throttle);
    }
    let page = initialize(document, config, TokioScheduler)?;

    let stats = match &settings.script {
        Some(path) => replay(&page, ScriptedEvents::load(path).await?).await?,
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            replay(&page, LineEvents::new(stdin)).await?
        }
    };
    tracing::info!(
        dispatched = stats.dispatched,
        failed = stats.failed,
        skipped = stats.skipped,
        "Replay finished"
    );

    let snapshot = PageSnapshot::capture(&page);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Feed `source` to `page`, holding each event until its `at_ms` offset.
///
/// Events that fail to dispatch or parse are logged and skipped.
async fn replay<D, S>(page: &PageBehavior<D>, mut source: S) -> anyhow::Result<ReplayStats>
where
    D: Document,
    S: LocalEventSource,
{
    let start = Instant::now();
    let mut stats = ReplayStats::default();

    loop {
        let timed = match source.next_event().await {
            Ok(Some(timed)) => timed,
            Ok(None) => break,
            Err(e @ PageError::InvalidEvent(_)) => {
                e.log();
                stats.skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        tokio::time::sleep_until(start + Duration::from_millis(timed.at_ms)).await;
        match dispatch(page, &timed.event) {
            Ok(()) => stats.dispatched += 1,
            Err(e) => {
                e.log();
                stats.failed += 1;
            }
        }
    }
    Ok(stats)
}

fn exit_kind(err: &anyhow::Error) -> ErrorKind {
    if let Some(e) = err.downcast_ref::<PageError>() {
        e.kind()
    } else if let Some(e) = err.downcast_ref::<AppError>() {
        e.kind()
    } else {
        ErrorKind::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio::MemoryDocument;
    use portfolio::domain::entities::MenuState;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

    async fn bundled_page() -> PageBehavior<MemoryDocument> {
        let document = PageLayout::load(format!("{FIXTURES}/portfolio.json"))
            .await
            .unwrap()
            .build()
            .unwrap();
        initialize(document, BehaviorConfig::default(), TokioScheduler).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_bundled_script() {
        let page = bundled_page().await;
        let script = ScriptedEvents::load(format!("{FIXTURES}/script.json"))
            .await
            .unwrap();

        let started = Instant::now();
        let stats = replay(&page, script).await.unwrap();
        assert_eq!(stats.dispatched, 9);
        assert_eq!(stats.failed, 0);
        assert!(started.elapsed() >= Duration::from_millis(2700));

        let snapshot = PageSnapshot::capture(&page);
        assert!(snapshot.loaded);
        assert_eq!(snapshot.menu, MenuState::Closed);
        assert_eq!(snapshot.scroll_y, 3030.0);
        assert_eq!(snapshot.active_links, vec!["#contact"]);
        assert_eq!(snapshot.body_overflow, None);
    }

    #[tokio::test]
    async fn test_replay_skips_bad_lines_and_targets() {
        let page = bundled_page().await;
        let input: &[u8] = b"{\"type\": \"load\"}\nnot json\n{\"type\": \"click\", \"target\": \"#missing\"}\n";

        let stats = replay(&page, LineEvents::new(input)).await.unwrap();
        assert_eq!(stats.dispatched, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_exit_kind() {
        let err = anyhow::Error::from(PageError::MissingElement(".nav".into()));
        assert_eq!(exit_kind(&err), ErrorKind::NotFound);

        let err = anyhow::Error::from(AppError::invalid_config("bad"));
        assert_eq!(exit_kind(&err).exit_code(), 78);

        assert_eq!(exit_kind(&anyhow::anyhow!("boom")), ErrorKind::Internal);
    }
}
