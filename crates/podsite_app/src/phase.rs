//! Provider lifecycle
//!
//! A flat state machine in the shape of the framework's widget FSMs:
//! `Unmounted -> SyncEvaluated -> Listening -> Unmounted`, with
//! `Listening -> Listening` on every engine locale change.
//!
//! A provider may be mounted more than once. Live mounts are counted and the
//! machine only leaves `Listening` when the last one is released.

use smallvec::SmallVec;

const MAX_HISTORY: usize = 32;

/// Where a provider instance is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Unmounted,
    /// The synchronous locale check ran for the latest render.
    SyncEvaluated,
    /// Mounted with a live subscription mirroring the locale into the document.
    Listening,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseEvent {
    Render,
    Mount,
    LocaleChanged,
    Unmount,
}

/// One recorded transition: `(from, event, to)`.
pub type PhaseTransition = (Phase, PhaseEvent, Phase);

#[derive(Debug, Default)]
pub(crate) struct PhaseMachine {
    current: Phase,
    /// Mounts whose `Unmount` has not arrived yet
    mounts: usize,
    /// Most recent transitions, oldest first (for debugging)
    history: SmallVec<[PhaseTransition; 8]>,
}

impl PhaseMachine {
    pub(crate) fn current(&self) -> Phase {
        self.current
    }

    pub(crate) fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    #[cfg(test)]
    fn mounts(&self) -> usize {
        self.mounts
    }

    /// `remaining` is the number of live mounts after the event is applied.
    fn target(from: Phase, event: PhaseEvent, remaining: usize) -> Option<Phase> {
        use Phase::*;
        use PhaseEvent::*;

        match (from, event) {
            (Unmounted | SyncEvaluated, Render) => Some(SyncEvaluated),
            (Listening, Render) => Some(Listening),
            (_, Mount) => Some(Listening),
            (Listening, LocaleChanged) => Some(Listening),
            (Listening, Unmount) if remaining > 0 => Some(Listening),
            (SyncEvaluated | Listening, Unmount) => Some(Unmounted),
            _ => None,
        }
    }

    /// Apply `event`. Events with no transition from the current phase are ignored.
    pub(crate) fn send(&mut self, event: PhaseEvent) -> Phase {
        let from = self.current;
        let remaining = match event {
            PhaseEvent::Mount => self.mounts + 1,
            PhaseEvent::Unmount => self.mounts.saturating_sub(1),
            _ => self.mounts,
        };
        let Some(to) = Self::target(from, event, remaining) else {
            tracing::trace!(?from, ?event, "PhaseMachine: no transition");
            return from;
        };
        self.mounts = remaining;

        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
        self.current = to;
        to
    }
}
