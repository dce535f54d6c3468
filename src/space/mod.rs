//! Stack accounting for the recursive strategy
//!
//! Native stack overflow aborts the process, so recursion depth is bounded
//! explicitly: a [`StackBudget`] turns a worker stack size and a per-frame
//! estimate into a maximum depth, and [`run_on_worker_stack`] runs the
//! recursion on a thread whose stack actually has that many bytes.

mod budget;
mod guard;

pub use budget::{
    StackBudget, DEFAULT_FRAME_BYTES, DEFAULT_RESERVE_BYTES, DEFAULT_STACK_BYTES,
    MIN_FRAME_BYTES, MIN_RESERVE_BYTES,
};
pub use guard::run_on_worker_stack;
