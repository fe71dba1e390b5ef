//! Process-wide allocator.
//!
//! Key material and text buffers are short-lived heap allocations; mimalloc
//! serves them from thread-local free lists instead of the system allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
