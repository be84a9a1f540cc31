//! Host-side plumbing: logging, cue output and the real-time tick source.

use std::time::Duration;

use tinnitus_core::{FeedbackKind, FeedbackSink, Gated, Settings, TickSource};
use tokio::runtime::Runtime;
use tokio::time::{Interval, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Stands in for the watch's haptic engine: one line per cue on stderr.
#[derive(Debug, Default)]
pub struct ConsoleCues;

impl FeedbackSink for ConsoleCues {
    fn play(&mut self, cue: FeedbackKind) {
        eprintln!("[{cue}]");
    }
}

pub fn cue_sink(settings: &Settings) -> Gated<ConsoleCues> {
    Gated::new(ConsoleCues, settings.haptics)
}

/// Wall-clock ticks from a tokio interval on a current-thread runtime.
pub struct RealtimeTicks {
    runtime: Runtime,
    interval: Interval,
    delivered: u64,
    limit: Option<u64>,
}

impl RealtimeTicks {
    pub fn new(period: Duration, limit: Option<u64>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let mut interval = runtime.block_on(async { tokio::time::interval(period) });
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately.
        runtime.block_on(interval.tick());
        Ok(Self {
            runtime,
            interval,
            delivered: 0,
            limit,
        })
    }
}

impl TickSource for RealtimeTicks {
    fn next_tick(&mut self) -> Option<u64> {
        if self.limit.is_some_and(|limit| self.delivered >= limit) {
            return None;
        }
        self.runtime.block_on(self.interval.tick());
        self.delivered += 1;
        Some(self.delivered)
    }
}
