//! Cancelable timers for the update loop.
//!
//! Handlers never sleep. They bump a generation in [`TimerGenerations`] and
//! return an [`UpdateAction::ScheduleTimer`](crate::UpdateAction) carrying a
//! [`TimerSpec`]. The [`TimerRegistry`] spawns one tokio task per timer kind;
//! rescheduling a kind aborts its previous task. Each firing is delivered as
//! `Message::TimerFired { kind, generation }` and is dropped by the handler
//! unless the generation is still current, so a firing that raced a cancel
//! has no effect.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

use crate::message::Message;

/// Every timer the page uses. At most one instance of each kind runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Repeating loader progress increment
    LoaderTick,
    /// One-shot: the skip control becomes available
    LoaderGrace,
    /// One-shot: hide the loader after completion
    LoaderDismiss,
    /// One-shot: hard ceiling on how long the loader may stay up
    PageReady,
    /// Repeating hero headline word change
    HeroRotate,
    /// Repeating stat counter step
    CounterStep,
    /// One-shot: technology bars grow to their level
    TechReveal,
    /// One-shot: submitted form returns to idle
    SubmitReset,
    /// One-shot: remove one toast
    ToastExpire(u64),
}

/// A timer the event loop should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub kind: TimerKind,
    pub generation: u64,
    pub delay: Duration,
    /// Fire every `delay` until cancelled instead of once.
    pub repeat: bool,
}

/// Current generation per timer kind, owned by `AppState`.
#[derive(Debug, Clone, Default)]
pub struct TimerGenerations {
    current: HashMap<TimerKind, u64>,
    next: u64,
}

impl TimerGenerations {
    /// Start a new instance of `kind`, invalidating any earlier one.
    pub fn arm(&mut self, kind: TimerKind) -> u64 {
        self.next += 1;
        self.current.insert(kind, self.next);
        self.next
    }

    /// Invalidate `kind` so pending firings are ignored.
    pub fn disarm(&mut self, kind: TimerKind) -> bool {
        self.current.remove(&kind).is_some()
    }

    pub fn is_current(&self, kind: TimerKind, generation: u64) -> bool {
        self.current.get(&kind) == Some(&generation)
    }

    pub fn current(&self, kind: TimerKind) -> Option<u64> {
        self.current.get(&kind).copied()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.current.contains_key(&kind)
    }

    pub fn disarm_all(&mut self) {
        self.current.clear();
    }
}

/// Running timer tasks, keyed by kind, plus the in-flight contact
/// submission so shutdown can abort everything the page started.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    tasks: HashMap<TimerKind, JoinHandle<()>>,
    submission: Option<JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the timer task, aborting the previous task of the same kind.
    pub fn schedule(&mut self, spec: TimerSpec, msg_tx: mpsc::Sender<Message>) {
        let TimerSpec {
            kind,
            generation,
            delay,
            repeat,
        } = spec;
        trace!("Scheduling {:?} #{} in {:?}", kind, generation, delay);

        let handle = tokio::spawn(async move {
            if repeat {
                let period = delay.max(Duration::from_millis(1));
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    if msg_tx
                        .send(Message::TimerFired { kind, generation })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
            } else {
                tokio::time::sleep(delay).await;
                let _ = msg_tx.send(Message::TimerFired { kind, generation }).await;
            }
        });

        if let Some(previous) = self.tasks.insert(kind, handle) {
            previous.abort();
        }

        self.tasks.retain(|_, h| !h.is_finished());
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.tasks.remove(&kind) {
            Some(handle) => {
                trace!("Cancelling {:?}", kind);
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Keep the submission task's handle. A previous one still running is
    /// aborted; the contact flow only ever has one request outstanding.
    pub fn track_submission(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.submission.replace(handle) {
            if !previous.is_finished() {
                trace!("Aborting superseded submission");
                previous.abort();
            }
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
        if let Some(handle) = self.submission.take() {
            handle.abort();
        }
    }

    /// Number of timer and submission tasks that have not finished yet.
    pub fn active(&self) -> usize {
        self.tasks
            .values()
            .chain(self.submission.iter())
            .filter(|h| !h.is_finished())
            .count()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: TimerKind, generation: u64, ms: u64, repeat: bool) -> TimerSpec {
        TimerSpec {
            kind,
            generation,
            delay: Duration::from_millis(ms),
            repeat,
        }
    }

    #[test]
    fn test_generations_invalidate_previous_instance() {
        let mut gens = TimerGenerations::default();
        let first = gens.arm(TimerKind::SubmitReset);
        let second = gens.arm(TimerKind::SubmitReset);
        assert!(!gens.is_current(TimerKind::SubmitReset, first));
        assert!(gens.is_current(TimerKind::SubmitReset, second));

        assert!(gens.disarm(TimerKind::SubmitReset));
        assert!(!gens.is_current(TimerKind::SubmitReset, second));
        assert!(!gens.disarm(TimerKind::SubmitReset));
    }

    #[test]
    fn test_generations_are_per_kind() {
        let mut gens = TimerGenerations::default();
        let a = gens.arm(TimerKind::LoaderTick);
        gens.arm(TimerKind::HeroRotate);
        assert!(gens.is_current(TimerKind::LoaderTick, a));
        assert!(gens.is_armed(TimerKind::HeroRotate));
        gens.disarm_all();
        assert!(!gens.is_armed(TimerKind::LoaderTick));
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new();
        timers.schedule(spec(TimerKind::LoaderGrace, 1, 1000, false), tx);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Message::TimerFired {
                kind: TimerKind::LoaderGrace,
                generation: 1
            }
        ));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_timer_until_cancelled() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut timers = TimerRegistry::new();
        timers.schedule(spec(TimerKind::LoaderTick, 3, 200, true), tx);

        for _ in 0..3 {
            let msg = rx.recv().await.unwrap();
            assert!(matches!(
                msg,
                Message::TimerFired {
                    kind: TimerKind::LoaderTick,
                    generation: 3
                }
            ));
        }

        assert!(timers.cancel(TimerKind::LoaderTick));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_previous() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new();
        timers.schedule(spec(TimerKind::TechReveal, 1, 100, false), tx.clone());
        timers.schedule(spec(TimerKind::TechReveal, 2, 100, false), tx);

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Message::TimerFired { generation: 2, .. }));
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new();
        timers.schedule(spec(TimerKind::HeroRotate, 1, 2000, true), tx.clone());
        timers.schedule(spec(TimerKind::PageReady, 2, 3000, false), tx);
        assert_eq!(timers.active(), 2);

        timers.cancel_all();
        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(timers.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_submission() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new();
        timers.track_submission(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = tx.send(Message::SubmissionFailed("late".into())).await;
        }));
        assert_eq!(timers.active(), 1);

        timers.cancel_all();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(timers.active(), 0);
    }
}
