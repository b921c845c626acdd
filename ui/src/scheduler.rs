//! Delayed tasks that die with their owner.

use std::any::Any;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Handle to a task registered with a [`Scheduler`]. Dropping the handle
/// cancels the task if it has not fired yet.
pub struct ScheduledTask {
    _guard: Box<dyn Any>,
}

impl ScheduledTask {
    /// Wrap whatever value cancels the task when dropped.
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

pub trait Scheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> ScheduledTask;
}

/// Schedules on the browser event loop with `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        ScheduledTask::new(Timeout::new(millis, task))
    }
}
