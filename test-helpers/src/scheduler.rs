//! A [`Scheduler`] driven by a simulated clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use trip_ui::scheduler::{ScheduledTask, Scheduler};

struct Pending {
    deadline: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

struct CancelOnDrop(Rc<Cell<bool>>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Tasks only run when the test calls [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the simulated clock.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|pending| !pending.cancelled.get())
            .count()
    }

    /// Move the clock forward by `by`, running every task that comes due in
    /// deadline order. Tasks scheduled while advancing run too if they fall
    /// inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;

        while let Some(pending) = self.pop_due(target) {
            self.now.set(pending.deadline);
            if !pending.cancelled.get() {
                (pending.task)();
            }
        }

        self.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut queue = self.pending.borrow_mut();
        queue.retain(|pending| !pending.cancelled.get());
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.deadline <= target)
            .min_by_key(|(_, pending)| (pending.deadline, pending.seq))
            .map(|(index, _)| index)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> ScheduledTask {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);

        self.pending.borrow_mut().push(Pending {
            deadline: self.now.get() + delay,
            seq,
            cancelled: cancelled.clone(),
            task,
        });

        ScheduledTask::new(CancelOnDrop(cancelled))
    }
}
