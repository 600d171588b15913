//! fsync-tester - Filesystem fsync latency tester
//!
//! This library provides the core functionality for measuring how long a
//! durability barrier (fsync) takes on one file while a forked child process
//! generates continuous random-offset write pressure against a second, much
//! larger file.

use std::time::Duration;

pub mod cli;
pub mod driver;
pub mod setup;
pub mod timing;
pub mod writer;

/// Block size for all small writes; also the alignment of every random offset.
pub const BLOCK_SIZE: usize = 4096;

/// Size of the buffer written to the test file each iteration (1 MiB).
pub const WRITE_BUF_SIZE: usize = 32768 * 32;

/// Size the random-write file is extended to before the run (256 MiB).
pub const RND_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Fixed seed so the background writer's offset sequence is the same on
/// every run.
pub const RANDOM_SEED: u64 = 4096;

/// Hard cap on the number of write+fsync iterations.
pub const MAX_ITERATIONS: u32 = 60;

/// Wall-clock cap on the measurement loop.
pub const RUN_CAP: Duration = Duration::from_secs(60);

/// Pause between iterations.
pub const SLEEP_INTERVAL: Duration = Duration::from_secs(4);

/// File receiving the background writer's random 4 KiB writes.
pub const RND_FILE: &str = "fsync-tester.rnd-file";

/// File receiving the timed 1 MiB write + fsync each iteration.
pub const TST_FILE: &str = "fsync-tester.tst-file";
