use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Observable states of a simulated task. One-shot: a completed task does
/// not run again until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Idle,
    Running,
    Complete,
}

impl TaskState {
    pub const fn label(self) -> &'static str {
        match self {
            TaskState::Idle => "idle",
            TaskState::Running => "running",
            TaskState::Complete => "complete",
        }
    }
}

/// Shape of the simulated work.
#[derive(Debug, Clone)]
pub enum TaskShape {
    /// Percent counter advanced by `step` every `interval` until it reaches 100.
    Progress { step: u8, interval: Duration },
    /// Single timer that completes after `delay`.
    Delay(Duration),
}

/// Transitions emitted by `poll`, in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    Progress(u8),
    Complete,
}

/// Stand-in for an asynchronous operation with no real backing computation.
/// The machine never fires on its own: owners poll it with the current time,
/// so tearing down an owner silently drops any pending transition.
pub struct TaskSimulator {
    shape: TaskShape,
    state: TaskState,
    percent: u8,
    next_fire: Option<DateTime<Utc>>,
    on_complete: Option<Box<dyn FnMut() + Send>>,
    completion_fired: bool,
}

impl TaskSimulator {
    pub fn new(shape: TaskShape) -> Self {
        Self {
            shape,
            state: TaskState::Idle,
            percent: 0,
            next_fire: None,
            on_complete: None,
            completion_fired: false,
        }
    }

    /// Register the callback invoked exactly once when the task completes.
    pub fn on_complete(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Begin the run. Guarded: calling while running (or complete, before
    /// `reset`) is a no-op, so a double-triggered control cannot restart the
    /// timer. Returns whether the task actually started.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != TaskState::Idle {
            return false;
        }

        self.state = TaskState::Running;
        self.percent = 0;
        self.completion_fired = false;
        self.next_fire = Some(match &self.shape {
            TaskShape::Progress { interval, .. } => now + *interval,
            TaskShape::Delay(delay) => now + *delay,
        });
        true
    }

    /// Advance the machine to `now`, returning every transition that fired
    /// since the last poll, in order. Progress is monotonic and completion is
    /// emitted at most once per started run.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<TaskEvent> {
        let mut events = Vec::new();

        if self.state != TaskState::Running {
            return events;
        }

        match self.shape {
            TaskShape::Progress { step, interval } => {
                while let Some(fire_at) = self.next_fire {
                    if fire_at > now || self.percent >= 100 {
                        break;
                    }
                    self.percent = self.percent.saturating_add(step).min(100);
                    events.push(TaskEvent::Progress(self.percent));
                    self.next_fire = Some(fire_at + interval);
                }
                if self.percent >= 100 {
                    self.complete(&mut events);
                }
            }
            TaskShape::Delay(_) => {
                if let Some(fire_at) = self.next_fire {
                    if fire_at <= now {
                        self.complete(&mut events);
                    }
                }
            }
        }

        events
    }

    /// Drop any pending timer without firing the completion callback. The
    /// owner calls this when the surrounding view goes away mid-run.
    pub fn cancel(&mut self) {
        if self.state == TaskState::Running {
            self.state = TaskState::Idle;
            self.percent = 0;
            self.next_fire = None;
        }
    }

    /// Rearm the one-shot machine. Selecting a new file or challenge is the
    /// reset trigger; until then a completed task stays completed.
    pub fn reset(&mut self) {
        self.state = TaskState::Idle;
        self.percent = 0;
        self.next_fire = None;
        self.completion_fired = false;
    }

    fn complete(&mut self, events: &mut Vec<TaskEvent>) {
        self.state = TaskState::Complete;
        self.next_fire = None;
        events.push(TaskEvent::Complete);
        if !self.completion_fired {
            self.completion_fired = true;
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn progress_task_steps_to_completion_in_order() {
        let mut task = TaskSimulator::new(TaskShape::Progress {
            step: 50,
            interval: Duration::milliseconds(100),
        });
        assert!(task.start(t0()));

        let events = task.poll(t0() + Duration::milliseconds(250));
        assert_eq!(
            events,
            vec![
                TaskEvent::Progress(50),
                TaskEvent::Progress(100),
                TaskEvent::Complete,
            ]
        );
        assert_eq!(task.state(), TaskState::Complete);
        assert_eq!(task.percent(), 100);
    }

    #[test]
    fn delay_task_fires_once_after_the_deadline() {
        let mut task = TaskSimulator::new(TaskShape::Delay(Duration::milliseconds(500)));
        task.start(t0());

        assert!(task.poll(t0() + Duration::milliseconds(499)).is_empty());
        assert_eq!(
            task.poll(t0() + Duration::milliseconds(500)),
            vec![TaskEvent::Complete]
        );
        assert!(task.poll(t0() + Duration::milliseconds(600)).is_empty());
    }

    #[test]
    fn double_start_completes_exactly_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        let mut task = TaskSimulator::new(TaskShape::Delay(Duration::milliseconds(100)));
        task.on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(task.start(t0()));
        assert!(!task.start(t0()));

        let events = task.poll(t0() + Duration::milliseconds(200));
        let completions = events
            .iter()
            .filter(|event| matches!(event, TaskEvent::Complete))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Still one-shot after completion until reset.
        assert!(!task.start(t0() + Duration::milliseconds(300)));
        assert!(task.poll(t0() + Duration::milliseconds(400)).is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_drops_pending_timers_without_completion() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        let mut task = TaskSimulator::new(TaskShape::Delay(Duration::milliseconds(100)));
        task.on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        task.start(t0());
        task.cancel();

        assert_eq!(task.state(), TaskState::Idle);
        assert!(task.poll(t0() + Duration::milliseconds(500)).is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reset_rearms_a_completed_task() {
        let mut task = TaskSimulator::new(TaskShape::Delay(Duration::milliseconds(50)));
        task.start(t0());
        task.poll(t0() + Duration::milliseconds(50));
        assert_eq!(task.state(), TaskState::Complete);

        task.reset();
        assert_eq!(task.state(), TaskState::Idle);
        assert!(task.start(t0() + Duration::milliseconds(100)));
        assert_eq!(
            task.poll(t0() + Duration::milliseconds(150)),
            vec![TaskEvent::Complete]
        );
    }

    #[test]
    fn progress_step_never_overshoots_hundred() {
        let mut task = TaskSimulator::new(TaskShape::Progress {
            step: 30,
            interval: Duration::milliseconds(10),
        });
        task.start(t0());
        let events = task.poll(t0() + Duration::milliseconds(100));
        assert_eq!(
            events,
            vec![
                TaskEvent::Progress(30),
                TaskEvent::Progress(60),
                TaskEvent::Progress(90),
                TaskEvent::Progress(100),
                TaskEvent::Complete,
            ]
        );
    }
}
