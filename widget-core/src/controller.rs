use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::{
    config::WidgetConfig, display::DisplayTarget, source::WeatherSource, view::WeatherView,
};

/// What a call to [`WeatherWidget::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A full fetch/render cycle ran. Fetch failures still count as
    /// completed: they are rendered, not propagated.
    Completed,
    /// Another cycle was already in flight; this trigger was ignored.
    Skipped,
}

/// The widget controller: owns the configuration, the observation source
/// and the display target, and runs the fetch/render cycle.
pub struct WeatherWidget {
    config: WidgetConfig,
    source: Box<dyn WeatherSource>,
    target: Mutex<Box<dyn DisplayTarget>>,
    in_flight: Mutex<()>,
}

impl WeatherWidget {
    pub fn new(
        config: WidgetConfig,
        source: Box<dyn WeatherSource>,
        target: Box<dyn DisplayTarget>,
    ) -> Self {
        Self { config, source, target: Mutex::new(target), in_flight: Mutex::new(()) }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Run one fetch/render cycle.
    ///
    /// Overlapping triggers (a manual refresh while the scheduled one is
    /// still in flight, or vice versa) are ignored: only one cycle runs at
    /// a time. The loading indicator is visible exactly while the fetch is
    /// in flight and hidden again on both outcomes.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!("Refresh already in flight; ignoring trigger");
            return RefreshOutcome::Skipped;
        };

        self.target.lock().await.set_loading(true);

        let outcome = self.source.current(&self.config.request()).await;

        let mut target = self.target.lock().await;
        match outcome {
            Ok(observation) => {
                tracing::debug!(code = observation.weathercode, "Rendering observation");
                target.render(&WeatherView::new(&observation, &self.config));
            }
            Err(err) => {
                tracing::warn!("Weather fetch failed: {err}");
                target.render_error(&err.to_string());
            }
        }
        target.set_loading(false);

        RefreshOutcome::Completed
    }
}

/// Owned handle to a running widget loop.
///
/// Dropping the handle ends the loop without waiting for it; call
/// [`WidgetHandle::stop`] for a clean shutdown.
pub struct WidgetHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WidgetHandle {
    /// Start the refresh loop: one cycle immediately, then one per
    /// configured interval until [`stop`](WidgetHandle::stop) is called.
    /// A failed cycle does not stop the loop.
    pub fn start(widget: Arc<WeatherWidget>) -> Self {
        let (shutdown, mut rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(widget.config().update_interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        widget.refresh().await;
                    }
                    _ = rx.changed() => break,
                }
            }
        });

        Self { shutdown, task }
    }

    /// Signal the loop to exit and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
