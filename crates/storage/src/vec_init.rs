//! sqlite-vec extension registration

use rusqlite::ffi::sqlite3_auto_extension;
use sqlite_vec::sqlite3_vec_init;
use std::sync::Once;

static INIT: Once = Once::new();

/// Register sqlite-vec as an auto extension so every new connection gets the
/// `vec_distance_*` functions. Must run before the first connection opens;
/// repeated calls are no-ops.
#[allow(clippy::missing_transmute_annotations)]
pub fn init_sqlite_vec() {
    INIT.call_once(|| {
        // SAFETY: `sqlite3_vec_init` has the entry-point signature SQLite expects
        // for auto extensions; the transmute only erases the argument types.
        unsafe {
            sqlite3_auto_extension(Some(std::mem::transmute(sqlite3_vec_init as *const ())));
        }
        tracing::info!("sqlite-vec extension registered");
    });
}
