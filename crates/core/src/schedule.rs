//! Timer seam shared by the rotator and the debounced scroll handler.
//!
//! The browser bridge implements [`Scheduler`] on top of `setTimeout`;
//! [`ManualScheduler`] runs the same tasks on a virtual clock so state
//! machines can be stepped deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TaskId;

    /// Drop a pending task. Unknown or already-run ids are ignored.
    fn cancel(&self, id: TaskId);
}

struct Pending {
    due: Duration,
    id: TaskId,
    task: Task,
}

/// Single-threaded virtual-time scheduler.
///
/// Tasks due at the same instant run in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Delay until the earliest pending task, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.queue
            .borrow()
            .iter()
            .map(|p| p.due)
            .min()
            .map(|due| due.saturating_sub(self.now.get()))
    }

    /// Advance the clock to the earliest pending task and run it.
    /// Returns `false` when nothing is pending.
    pub fn run_next(&self) -> bool {
        let Some(pending) = self.pop_due(None) else {
            return false;
        };
        self.now.set(pending.due.max(self.now.get()));
        (pending.task)();
        true
    }

    /// Advance the clock by `by`, running every task that falls due,
    /// including tasks scheduled by tasks that ran along the way.
    pub fn advance(&self, by: Duration) {
        let until = self.now.get() + by;
        while let Some(pending) = self.pop_due(Some(until)) {
            self.now.set(pending.due.max(self.now.get()));
            (pending.task)();
        }
        self.now.set(until);
    }

    fn pop_due(&self, until: Option<Duration>) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        // Ids grow monotonically, so (due, id) orders ties by scheduling order.
        let pos = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| until.is_none_or(|u| p.due <= u))
            .min_by_key(|(_, p)| (p.due, p.id.0))
            .map(|(i, _)| i)?;
        Some(queue.remove(pos))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay,
            id,
            task,
        });
        id
    }

    fn cancel(&self, id: TaskId) {
        self.queue.borrow_mut().retain(|p| p.id != id);
    }
}

/// Trailing-edge debounce: only the last trigger within `delay` runs.
pub struct Debounce {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    pending: Rc<Cell<Option<TaskId>>>,
}

impl Debounce {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn trigger(&self, task: impl FnOnce() + 'static) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        let pending = Rc::clone(&self.pending);
        let id = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                pending.set(None);
                task();
            }),
        );
        self.pending.set(Some(id));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
