//! Stack safety for deep recursion.
//!
//! Deeply nested expressions (parentheses, f-strings inside fields, format
//! specs) recurse through the grammar. Recursive entry points wrap their
//! body in [`ensure_sufficient_stack`] so legal but deep input grows the
//! stack instead of overflowing it.
//!
//! - **Red zone**: 100KB. Below this much remaining stack, grow.
//! - **Growth size**: 1MB per growth.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
