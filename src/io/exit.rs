//! Deletion of files when the process exits.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once, PoisonError};

use tracing::{debug, warn};

static PENDING: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());
static HOOK: Once = Once::new();

/// Marks `path` to be removed when the process exits normally. Files are removed in the reverse of
/// the order they were registered in, and any failure to remove one is ignored.
pub(crate) fn delete_on_exit(path: &Path) {
    HOOK.call_once(install_hook);
    PENDING
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(path.to_owned());
    debug!(path = %path.display(), "registered for deletion on exit");
}

#[cfg(test)]
pub(crate) fn is_pending(path: &Path) -> bool {
    PENDING
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .any(|pending| pending == path)
}

#[cfg(unix)]
fn install_hook() {
    // SAFETY: delete_pending doesn't unwind and only touches statics, which outlive the hook.
    if unsafe { libc::atexit(delete_pending) } != 0 {
        warn!("unable to register exit hook, temp files will be left behind");
    }
}

#[cfg(not(unix))]
fn install_hook() {
    warn!("deletion on exit is unsupported on this platform, temp files will be left behind");
}

#[cfg(unix)]
extern "C" fn delete_pending() {
    let pending = std::mem::take(&mut *PENDING.lock().unwrap_or_else(PoisonError::into_inner));
    for path in pending.iter().rev() {
        let _ = std::fs::remove_file(path);
    }
}
