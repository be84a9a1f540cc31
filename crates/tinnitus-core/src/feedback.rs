//! Feedback sinks.
//!
//! Transitions hand back [`Event`]s; a sink turns their cues into whatever
//! the host can do (a haptic tap on the watch, a line of text in the CLI).
//! Cues are fire-and-forget. A sink may drop any of them.

use crate::events::{Event, FeedbackKind};

pub trait FeedbackSink {
    fn play(&mut self, cue: FeedbackKind);
}

/// Records cues in order. Useful for tests and replay.
impl FeedbackSink for Vec<FeedbackKind> {
    fn play(&mut self, cue: FeedbackKind) {
        self.push(cue);
    }
}

/// Drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl FeedbackSink for Muted {
    fn play(&mut self, _cue: FeedbackKind) {}
}

/// Forwards cues to `inner` only while enabled (the "Haptic Feedback"
/// setting).
#[derive(Debug, Clone)]
pub struct Gated<S> {
    inner: S,
    enabled: bool,
}

impl<S: FeedbackSink> Gated<S> {
    pub fn new(inner: S, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FeedbackSink> FeedbackSink for Gated<S> {
    fn play(&mut self, cue: FeedbackKind) {
        if self.enabled {
            self.inner.play(cue);
        } else {
            tracing::trace!(%cue, "cue dropped, haptics disabled");
        }
    }
}

/// Plays the cue of every event through `sink`.
pub fn deliver<'a, S, I>(sink: &mut S, events: I)
where
    S: FeedbackSink + ?Sized,
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        let cue = event.feedback();
        tracing::trace!(%cue, ?event, "delivering cue");
        sink.play(cue);
    }
}
