//! Failure boundary for the recursive strategy

use super::StackBudget;
use std::io;
use std::panic;
use std::thread;

/// Run `work` on a dedicated thread with a stack of `budget.stack_bytes`
///
/// Blocks until the worker finishes; from the caller's point of view the call
/// is sequential. Errors only if the thread cannot be spawned. A panic in
/// `work` is re-raised on the calling thread with its original payload, so it
/// is never mistaken for stack exhaustion.
pub fn run_on_worker_stack<F, R>(budget: &StackBudget, work: F) -> io::Result<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let handle = thread::Builder::new()
        .name("tapewalk-recursive".to_string())
        .stack_size(budget.stack_bytes)
        .spawn(work)?;

    match handle.join() {
        Ok(value) => Ok(value),
        Err(payload) => panic::resume_unwind(payload),
    }
}
