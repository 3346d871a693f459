use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FILE: AtomicU64 = AtomicU64::new(0);

/// A fresh path under the system temp dir, unique per process and call.
pub(crate) fn temp_path(name: &str) -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);

    std::env::temp_dir().join(format!("fractrap-{}-{n}-{name}", std::process::id()))
}
