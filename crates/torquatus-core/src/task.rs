//! Deferred task queue for "run after the current UI update" work.
//!
//! Tasks are closures over a context type `Ctx` (usually the component that
//! owns the queue). They never run inline: the owner drains the queue once per
//! update cycle with [`TaskQueue::take_ready`] and applies each task to itself.
//! Tasks posted while a cycle is being drained land in the next cycle.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask<Ctx> = Box<dyn FnOnce(&mut Ctx) + 'static>;

/// A task taken out of the queue, ready to run against its context.
pub struct DeferredTask<Ctx> {
    id: TaskId,
    label: &'static str,
    task: BoxedTask<Ctx>,
}

impl<Ctx> DeferredTask<Ctx> {
    /// The ID the task was posted under.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Short description used in logs.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Run the task.
    pub fn run(self, ctx: &mut Ctx) {
        tracing::trace!(target: targets::TASK, id = self.id.0, label = self.label, "running deferred task");
        (self.task)(ctx);
    }
}

impl<Ctx> fmt::Debug for DeferredTask<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredTask")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Same-thread queue of deferred tasks.
pub struct TaskQueue<Ctx> {
    tasks: VecDeque<DeferredTask<Ctx>>,
}

impl<Ctx> TaskQueue<Ctx> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run in the next update cycle.
    pub fn post<F>(&mut self, label: &'static str, task: F) -> TaskId
    where
        F: FnOnce(&mut Ctx) + 'static,
    {
        let id = next_task_id();
        tracing::trace!(target: targets::TASK, id = id.0, label, "posted deferred task");
        self.tasks.push_back(DeferredTask {
            id,
            label,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove and return every task posted so far, in posting order.
    ///
    /// The caller runs them; anything they post goes to the next batch.
    pub fn take_ready(&mut self) -> Vec<DeferredTask<Ctx>> {
        self.tasks.drain(..).collect()
    }
}

impl<Ctx> Default for TaskQueue<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> fmt::Debug for TaskQueue<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
