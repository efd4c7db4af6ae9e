//! SQL file discovery.

use std::{
    fs, io,
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::error::{AppResult, dir_read_error};

/// List files in `dir` whose extension equals `extension`, sorted by path.
///
/// The listing is not recursive and skips hidden files. A directory that
/// does not exist yields an empty list so the caller can report "nothing
/// found"; any other I/O error is returned.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use sql_schema_report::discovery::find_sql_files;
///
/// let files = find_sql_files(Path::new("database-scripts"), "sql").unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_sql_files(dir: &Path, extension: &str) -> AppResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "input directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(dir_read_error(&dir.display().to_string(), e))
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| dir_read_error(&dir.display().to_string(), e))?;
        // Hidden files are skipped, as a `*.sql` shell glob would.
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered SQL files");
    Ok(files)
}
