//! Test file preparation
//!
//! Both files live in the working directory the tool was invoked from.
//! The random-write file is reused across runs once it has been extended
//! to full size, so repeated invocations skip the (slow) zero-fill pass.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::BLOCK_SIZE;

/// Open `path` for writing, creating it if absent. Existing content is
/// left in place (no truncation), matching the reuse semantics of the
/// random-write file.
pub fn open_for_write(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

/// Strict comparison: a file already at (or past) `total` bytes is reused
/// as-is and must not see any extension writes.
pub fn needs_extension(len: u64, total: u64) -> bool {
    len < total
}

/// Extend `file` to `total` bytes by sequential 4 KiB zero-fill writes
/// from the start of the file.
///
/// A write returning fewer bytes than requested aborts the run; there is
/// no retry.
pub fn zero_fill(file: &mut File, total: u64) -> Result<()> {
    let buf = [0u8; BLOCK_SIZE];
    let mut cur: u64 = 0;

    debug!(total, "zero-filling random write file");
    while cur < total {
        let ret = file
            .write(&buf)
            .context("write to random write file")?;
        if ret < BLOCK_SIZE {
            anyhow::bail!("short write ret {ret}");
        }
        cur += ret as u64;
    }
    Ok(())
}
