use std::{
    fs,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique CSV file path under the system temp directory.
///
/// The file is not created, but it and any leftover temporary save file are
/// removed on drop.
pub(crate) struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub(crate) fn new(name: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "spending_tracker_{name}_{}_{id}.csv",
            process::id()
        ));
        let temp_file = Self { path };
        temp_file.remove();

        temp_file
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn remove(&self) {
        let _ = fs::remove_file(&self.path);
        let _ = fs::remove_file(self.path.with_extension("csv.tmp"));
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        self.remove();
    }
}
