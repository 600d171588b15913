//! Background random-write load generator
//!
//! Runs in a forked child process and hammers the random-write file with
//! 4 KiB positioned writes at pseudo-random block-aligned offsets until
//! the parent sends SIGTERM. The offset sequence is seeded with a fixed
//! constant so every run generates the same write pattern.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::os::unix::fs::FileExt;
use thiserror::Error;

use crate::{BLOCK_SIZE, RANDOM_SEED};

/// Failures the writer loop can hit. Any of them terminates the writer
/// process immediately; the parent's measurement loop is unaffected.
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("short write ret {ret} cur {offset}")]
    ShortWrite { ret: usize, offset: u64 },

    #[error("write failed cur {offset}: {source}")]
    Io {
        offset: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Map a raw random draw to a block-aligned offset in `[0, total - 4096)`.
///
/// The draw becomes a byte offset via `(raw * 4096) % (total - 4096)`,
/// then truncates down to a 4096 multiple. The modulus excludes the last
/// block of the file by construction.
pub fn block_offset(raw: u32, total: u64) -> u64 {
    let block = BLOCK_SIZE as u64;
    let cur = (u64::from(raw) * block) % (total - block);
    cur / block * block
}

/// Deterministic stream of write offsets for a file of `total` bytes.
#[derive(Debug)]
pub struct OffsetSequence {
    rng: StdRng,
    total: u64,
}

impl OffsetSequence {
    /// Sequence with the fixed benchmark seed.
    pub fn new(total: u64) -> Self {
        Self::with_seed(RANDOM_SEED, total)
    }

    /// Sequence with an explicit seed.
    pub fn with_seed(seed: u64, total: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            total,
        }
    }

    /// Next aligned offset.
    pub fn next_offset(&mut self) -> u64 {
        block_offset(self.rng.gen::<u32>(), self.total)
    }
}

/// Write 4 KiB of zeros at random aligned offsets in `file` forever.
///
/// Only returns on error; the normal exit path is SIGTERM from the
/// parent once the measurement loop finishes.
pub fn random_io(file: &File, total: u64) -> Result<(), WriterError> {
    let buf = [0u8; BLOCK_SIZE];
    let mut offsets = OffsetSequence::new(total);

    loop {
        let cur = offsets.next_offset();
        let ret = file
            .write_at(&buf, cur)
            .map_err(|source| WriterError::Io {
                offset: cur,
                source,
            })?;
        if ret < BLOCK_SIZE {
            return Err(WriterError::ShortWrite { ret, offset: cur });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RND_FILE_SIZE;

    #[test]
    fn test_block_offset_aligned() {
        for raw in [0u32, 1, 4095, 4096, 65537, u32::MAX] {
            let off = block_offset(raw, RND_FILE_SIZE);
            assert_eq!(off % BLOCK_SIZE as u64, 0, "raw {raw} gave offset {off}");
        }
    }

    #[test]
    fn test_block_offset_excludes_last_block() {
        let block = BLOCK_SIZE as u64;
        for raw in [0u32, 1, 12345, u32::MAX] {
            let off = block_offset(raw, RND_FILE_SIZE);
            assert!(off < RND_FILE_SIZE - block, "raw {raw} gave offset {off}");
        }
    }

    #[test]
    fn test_offset_sequence_deterministic() {
        let mut a = OffsetSequence::new(RND_FILE_SIZE);
        let mut b = OffsetSequence::new(RND_FILE_SIZE);
        for _ in 0..64 {
            assert_eq!(a.next_offset(), b.next_offset());
        }
    }

    #[test]
    fn test_offset_sequence_seed_changes_stream() {
        let mut a = OffsetSequence::with_seed(1, RND_FILE_SIZE);
        let mut b = OffsetSequence::with_seed(2, RND_FILE_SIZE);
        let first_a: Vec<u64> = (0..16).map(|_| a.next_offset()).collect();
        let first_b: Vec<u64> = (0..16).map(|_| b.next_offset()).collect();
        assert_ne!(first_a, first_b);
    }

    #[test]
    fn test_offsets_writable_in_sized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rnd");
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .unwrap();

        let total = 64 * BLOCK_SIZE as u64;
        file.set_len(total).unwrap();

        let buf = [0u8; BLOCK_SIZE];
        let mut offsets = OffsetSequence::new(total);
        for _ in 0..32 {
            let cur = offsets.next_offset();
            let ret = file.write_at(&buf, cur).unwrap();
            assert_eq!(ret, BLOCK_SIZE);
        }
        // In-bounds writes never grow the file.
        assert_eq!(file.metadata().unwrap().len(), total);
    }

    #[test]
    fn test_short_write_error_message() {
        let err = WriterError::ShortWrite {
            ret: 100,
            offset: 8192,
        };
        assert_eq!(err.to_string(), "short write ret 100 cur 8192");
    }
}
