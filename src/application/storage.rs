//! File load/save around the text codec.
//!
//! The universe itself never touches the filesystem; this module reads and
//! writes files and picks the import dialect from the file name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{Dialect, Universe};

/// Errors raised while moving patterns between files and a universe.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The pattern file could not be read.
    #[error("failed to read pattern file {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The pattern file could not be written.
    #[error("failed to write pattern file {path}: {source}")]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// Load the pattern at `path` into `universe`.
///
/// The dialect follows the extension (`.cells` centers, anything else
/// replaces). Invalid UTF-8 is replaced rather than rejected. Returns
/// whether the grid was replaced; a file with no pattern lines leaves the
/// universe untouched.
pub fn load(universe: &mut Universe, path: impl AsRef<Path>) -> Result<bool, StorageError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let dialect = Dialect::from_path(path);
    let replaced = universe.decode_text(&content, dialect);
    info!(path = %path.display(), ?dialect, replaced, "loaded pattern file");
    Ok(replaced)
}

/// Write `universe` to `path` in the plain format
pub fn save(universe: &Universe, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    fs::write(path, universe.encode_text()).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), width = universe.width(), height = universe.height(), "saved pattern file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Topology;

    #[test]
    fn test_save_then_load_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");

        let mut universe = Universe::new(9, 6, Topology::Toroidal, 0);
        universe.randomize(21);
        save(&universe, &path).unwrap();

        let mut restored = Universe::new(25, 25, Topology::Toroidal, 0);
        assert!(load(&mut restored, &path).unwrap());
        assert_eq!(restored.grid(), universe.grid());
    }

    #[test]
    fn test_load_cells_centers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blinker.CELLS");
        fs::write(&path, "!Name: Blinker\r\n!\r\nOOO\r\n").unwrap();

        let mut universe = Universe::new(25, 25, Topology::Toroidal, 0);
        assert!(load(&mut universe, &path).unwrap());
        assert_eq!((universe.width(), universe.height()), (33, 31));
        // start_x = 16 - 1, start_y = 15 - 0
        assert!(universe.cell_at(15, 15));
        assert!(universe.cell_at(17, 15));
        assert_eq!(universe.living_count(), 3);
    }

    #[test]
    fn test_load_empty_file_keeps_universe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let mut universe = Universe::new(7, 7, Topology::Finite, 0);
        universe.set_cell(3, 3, true);
        assert!(!load(&mut universe, &path).unwrap());
        assert_eq!((universe.width(), universe.height()), (7, 7));
        assert!(universe.cell_at(3, 3));
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noisy.txt");
        fs::write(&path, b"O\xFFO\n.O.\n").unwrap();

        let mut universe = Universe::new(5, 5, Topology::Finite, 0);
        assert!(load(&mut universe, &path).unwrap());
        assert_eq!((universe.width(), universe.height()), (3, 2));
        assert!(universe.cell_at(0, 0));
        assert!(universe.cell_at(2, 0));
        assert!(universe.cell_at(1, 1));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut universe = Universe::new(5, 5, Topology::Finite, 0);
        let err = load(&mut universe, &path).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("board.txt");

        let universe = Universe::new(5, 5, Topology::Finite, 0);
        let err = save(&universe, &path).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
