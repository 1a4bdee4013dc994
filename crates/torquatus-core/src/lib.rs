//! Core systems for Torquatus.
//!
//! This crate provides the small runtime pieces the editor and the PDF viewer
//! share:
//!
//! - **Signals**: type-safe change notification ([`Signal`])
//! - **Task Queue**: same-thread deferred work ([`TaskQueue`])
//! - **Logging**: tracing targets and performance spans ([`logging`])
//!
//! # Example
//!
//! ```
//! use torquatus_core::{Signal, TaskQueue};
//!
//! struct Status {
//!     message: String,
//! }
//!
//! let changed = Signal::<String>::new();
//! changed.connect(|text| println!("status: {text}"));
//!
//! let mut status = Status { message: String::new() };
//! let mut queue = TaskQueue::<Status>::new();
//! queue.post("greet", |s| s.message.push_str("ready"));
//!
//! for task in queue.take_ready() {
//!     task.run(&mut status);
//! }
//! changed.emit(status.message.clone());
//! ```

pub mod logging;
pub mod signal;
pub mod task;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use task::{DeferredTask, TaskId, TaskQueue};
