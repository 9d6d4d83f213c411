use std::sync::atomic::{AtomicUsize, Ordering};

/// Running allocation counts for shared (Rc-backed) runtime payloads.
///
/// Counters only ever grow; tests pair snapshot deltas with
/// `Rc::strong_count` to verify that the last owning handle frees exactly
/// once.
#[derive(Debug, Clone, Copy)]
pub struct LeakStats {
    pub functions: usize,
    pub var_args: usize,
    pub hash_maps: usize,
    pub large_buffers: usize,
}

static FUNCTIONS: AtomicUsize = AtomicUsize::new(0);
static VAR_ARGS: AtomicUsize = AtomicUsize::new(0);
static HASH_MAPS: AtomicUsize = AtomicUsize::new(0);
static LARGE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

pub fn record_function() {
    FUNCTIONS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_var_args() {
    VAR_ARGS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_hash_map() {
    HASH_MAPS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_large_buffer() {
    LARGE_BUFFERS.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> LeakStats {
    LeakStats {
        functions: FUNCTIONS.load(Ordering::Relaxed),
        var_args: VAR_ARGS.load(Ordering::Relaxed),
        hash_maps: HASH_MAPS.load(Ordering::Relaxed),
        large_buffers: LARGE_BUFFERS.load(Ordering::Relaxed),
    }
}
