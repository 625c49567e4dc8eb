// driver.rs - Timer-driven animation state machine

use std::time::Duration;

use log::debug;
use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Recurring tokio task that reports one tick per period.
struct Timer {
    task: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<()>,
}

impl Timer {
    fn spawn<F>(runtime: &Handle, period: Duration, wake: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (sender, ticks) = mpsc::unbounded_channel();
        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if sender.send(()).is_err() {
                    break;
                }
                wake();
            }
        });
        Self { task, ticks }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owns the running/stopped state and at most one timer.
///
/// The timer never touches the grid. It only queues ticks, and [`AnimationDriver::due_ticks`]
/// hands them out while the driver is running. Ticks that arrive while stopped are dropped.
pub struct AnimationDriver {
    state: DriverState,
    period: Duration,
    timer: Option<Timer>,
}

impl AnimationDriver {
    pub fn new(period: Duration) -> Self {
        Self {
            state: DriverState::Stopped,
            period: period.max(Duration::from_millis(1)), // tokio intervals reject a zero period
            timer: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Switches to `Running` and arms a fresh timer on `runtime`.
    ///
    /// `wake` is called from the timer task after each tick is queued. Returns `false` and
    /// changes nothing if the driver is already running.
    pub fn start<F>(&mut self, runtime: &Handle, wake: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        if self.is_running() {
            return false;
        }
        // Dropping the previous timer aborts its task.
        self.timer = Some(Timer::spawn(runtime, self.period, wake));
        self.state = DriverState::Running;
        debug!("timer armed, period {:?}", self.period);
        true
    }

    /// Switches to `Stopped`. The timer keeps firing but its ticks are ignored.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = DriverState::Stopped;
        true
    }

    /// Drains queued ticks, returning how many should be applied.
    pub fn due_ticks(&mut self) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let mut due = 0;
        while timer.ticks.try_recv().is_ok() {
            due += 1;
        }
        match self.state {
            DriverState::Running => due,
            DriverState::Stopped => {
                if due > 0 {
                    debug!("ignoring {} tick(s) while stopped", due);
                }
                0
            }
        }
    }
}
