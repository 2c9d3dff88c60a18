//! Sharded pool of reusable string buffers for the key generation hot path.
//!
//! Each shard is a small stack of idle buffers behind its own mutex. The calling
//! thread's id picks the shard, so callers on different threads rarely touch the
//! same lock and the critical section is a single `Vec` push or pop.

use ahash::RandomState;
use parking_lot::Mutex;
use std::fmt::{self, Write};
use std::ops::{Deref, DerefMut};
use std::thread;

const DEFAULT_CAPACITY: usize = 128;
// Buffers that grew past this are dropped instead of pooled.
const MAX_RETAINED_CAPACITY: usize = 4096;
const MAX_IDLE_PER_SHARD: usize = 64;
const MIN_SHARDS: usize = 4;

pub struct BufferPool {
    shards: Box<[Mutex<Vec<String>>]>,
    hasher: RandomState,
}

impl BufferPool {
    /// Create a pool with one shard per available CPU (rounded up to a power of two).
    pub fn new() -> Self {
        let parallelism = thread::available_parallelism().map(|n| n.get()).unwrap_or(MIN_SHARDS);
        Self::with_shards(parallelism)
    }

    pub fn with_shards(shards: usize) -> Self {
        let count = shards.max(MIN_SHARDS).next_power_of_two();
        let shards = (0..count).map(|_| Mutex::new(Vec::new())).collect();
        Self { shards, hasher: RandomState::new() }
    }

    /// Take a cleared buffer from the caller's shard, allocating if it is empty.
    ///
    /// The buffer goes back to the same shard when the guard is dropped.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let shard = self.shard();
        let buf =
            shard.lock().pop().unwrap_or_else(|| String::with_capacity(DEFAULT_CAPACITY));
        PooledBuffer { buf, shard }
    }

    /// Number of idle buffers currently held across all shards.
    pub fn idle(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    #[inline]
    fn shard(&self) -> &Mutex<Vec<String>> {
        let idx = self.hasher.hash_one(thread::current().id()) as usize & (self.shards.len() - 1);
        &self.shards[idx]
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool").field("shards", &self.shards.len()).finish()
    }
}

/// A buffer on loan from a [`BufferPool`]; returned to the pool on drop.
pub struct PooledBuffer<'a> {
    buf: String,
    shard: &'a Mutex<Vec<String>>,
}

impl PooledBuffer<'_> {
    /// Append the `Display` form of `value`.
    ///
    /// `fmt::Write for String` never returns an error, so the only failure left
    /// is a `Display` impl reporting one itself; integers and strings never do.
    pub fn push_display(&mut self, value: impl fmt::Display) {
        let _ = write!(self.buf, "{value}");
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if self.buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        let mut idle = self.shard.lock();
        if idle.len() < MAX_IDLE_PER_SHARD {
            idle.push(buf);
        }
    }
}
