//! Measurement driver
//!
//! Owns the whole run: prepares both test files, forks the background
//! writer, times up to 60 write+fsync iterations against the test file,
//! then tears the writer down with SIGTERM and reaps it.
//!
//! All progress and timing lines go to stdout; stderr is reserved for
//! errors and `--debug` diagnostics.

use anyhow::{Context, Result};
use nix::sys::signal::{kill, Signal};
use nix::sys::wait::waitpid;
use nix::unistd::{fork, ForkResult};
use std::io::Write;
use std::os::unix::fs::FileExt;
use std::path::Path;
use std::thread;
use tracing::debug;

use crate::{setup, timing, writer};
use crate::{
    MAX_ITERATIONS, RND_FILE, RND_FILE_SIZE, RUN_CAP, SLEEP_INTERVAL, TST_FILE, WRITE_BUF_SIZE,
};

/// Run the benchmark in the current working directory.
pub fn run() -> Result<()> {
    let mut rnd_file = setup::open_for_write(Path::new(RND_FILE))?;
    let len = rnd_file
        .metadata()
        .context("failed to stat random write file")?
        .len();
    debug!(len, "random write file opened");

    if setup::needs_extension(len, RND_FILE_SIZE) {
        println!("setting up random write file");
        setup::zero_fill(&mut rnd_file, RND_FILE_SIZE)
            .context("failed to extend random write file")?;
        println!("done setting up random write file");
    }

    let tst_file = setup::open_for_write(Path::new(TST_FILE))?;

    let child = match unsafe { fork() }.context("failed to fork background writer")? {
        ForkResult::Parent { child } => child,
        ForkResult::Child => {
            // Child: generate write load until SIGTERM. Never returns to
            // the caller on any path.
            println!("starting random io!");
            if let Err(e) = writer::random_io(&rnd_file, RND_FILE_SIZE) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            std::process::exit(0);
        }
    };
    debug!(pid = %child, "background writer forked");

    // Continued writes to the random file belong to the child now.
    drop(rnd_file);

    let buf = vec![b'a'; WRITE_BUF_SIZE];
    let clock = timing::RunClock::new();
    println!("starting fsync run");

    let mut completed: u32 = 0;
    for _ in 0..MAX_ITERATIONS {
        let (ret, write_time) = timing::measure(|| tst_file.write_at(&buf, 0));
        let ret = ret.context("failed to write test file")?;
        if ret < WRITE_BUF_SIZE {
            anyhow::bail!("short write ret {ret}");
        }

        let (synced, fsync_time) = timing::measure(|| tst_file.sync_all());
        synced.context("fsync of test file failed")?;

        println!(
            "write time: {:5.4}s fsync time: {:5.4}s",
            write_time.as_secs_f64(),
            fsync_time.as_secs_f64()
        );
        completed += 1;

        if clock.expired(RUN_CAP) {
            break;
        }
        thread::sleep(SLEEP_INTERVAL);
    }

    println!("run done {completed} fsyncs total, killing random writer");
    std::io::stdout().flush().context("failed to flush stdout")?;

    kill(child, Signal::SIGTERM).context("failed to signal background writer")?;
    let status = waitpid(child, None).context("failed to wait for background writer")?;
    debug!(?status, "background writer reaped");

    Ok(())
}
