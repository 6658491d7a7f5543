use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// NB. titles come from filename stems; we deliberately don't open the
//     cartridge images themselves

/// file extensions recognised as SNES cartridge images
const ROM_EXTENSIONS: [&str; 2] = ["smc", "sfc"];

/// box art lives in a sibling directory, keyed by the ROM's basename
const COVER_EXTENSION: &str = "jpg";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("can't read ROM directory {path}: {source}")]
    UnreadableDir { path: PathBuf, source: io::Error },

    #[error("no ROMs found in {0}")]
    EmptyLibrary(PathBuf),
}

/// one browsable game: a cartridge image plus optional box art
#[derive(Debug, Clone)]
pub struct GameEntry {
    pub title: String,
    pub rom_path: PathBuf,
    pub cover_path: Option<PathBuf>,
}

/// the fixed, ordered set of games found at startup. built once by
/// [`scan`]; read-only afterwards
pub struct Library {
    entries: Vec<GameEntry>,
}

impl Library {
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<GameEntry>) -> Library {
        Library { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// panics if `index` is out of range; the selection keeps its index
    /// within `0..len` so browsing never gets here with a bad one
    pub fn get(&self, index: usize) -> &GameEntry {
        &self.entries[index]
    }
}

/// build the library from a directory of ROMs and a directory of covers.
/// a missing cover only means placeholder art; a missing or empty ROM
/// directory means there is nothing to browse, which is fatal
pub fn scan(roms_dir: &Path, covers_dir: &Path) -> Result<Library, ScanError> {
    let unreadable = |source| ScanError::UnreadableDir {
        path: roms_dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(roms_dir).map_err(unreadable)? {
        let path = dir_entry.map_err(unreadable)?.path();
        if !path.is_file() {
            continue;
        }
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_lowercase(),
            None => continue,
        };
        if !ROM_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }
        let title = match path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };

        let cover = covers_dir.join(format!("{}.{}", title, COVER_EXTENSION));
        let cover_path = cover.is_file().then(|| cover);

        tracing::debug!(rom = %path.display(), has_cover = cover_path.is_some(), "found ROM");
        entries.push(GameEntry {
            title,
            rom_path: path,
            cover_path,
        });
    }

    // deterministic carousel order, whatever the OS hands back
    entries.sort_by(|a, b| a.rom_path.file_name().cmp(&b.rom_path.file_name()));

    if entries.is_empty() {
        return Err(ScanError::EmptyLibrary(roms_dir.to_path_buf()));
    }
    Ok(Library { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn fixture(roms: &[&str], covers: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("roms")).unwrap();
        fs::create_dir(dir.path().join("covers")).unwrap();
        for name in roms {
            File::create(dir.path().join("roms").join(name)).unwrap();
        }
        for name in covers {
            File::create(dir.path().join("covers").join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_scan_pairs_covers_by_basename() {
        let dir = fixture(&["b.smc", "a.smc"], &["a.jpg"]);
        let lib = scan(&dir.path().join("roms"), &dir.path().join("covers")).unwrap();
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.get(0).title, "a");
        assert_eq!(
            lib.get(0).cover_path,
            Some(dir.path().join("covers").join("a.jpg"))
        );
        assert_eq!(lib.get(1).title, "b");
        assert_eq!(lib.get(1).cover_path, None);
    }

    #[test]
    fn test_scan_orders_by_filename() {
        let dir = fixture(&["zelda.smc", "chrono.smc", "mario.smc"], &[]);
        let lib = scan(&dir.path().join("roms"), &dir.path().join("covers")).unwrap();
        let titles: Vec<&str> = (0..lib.len()).map(|i| lib.get(i).title.as_str()).collect();
        assert_eq!(titles, ["chrono", "mario", "zelda"]);
    }

    #[test]
    fn test_scan_skips_unrecognised_extensions() {
        let dir = fixture(&["a.smc", "notes.txt", "b.sfc", "saves.srm"], &[]);
        let lib = scan(&dir.path().join("roms"), &dir.path().join("covers")).unwrap();
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.get(0).title, "a");
        assert_eq!(lib.get(1).title, "b");
    }

    #[test]
    fn test_scan_empty_dir_fails() {
        let dir = fixture(&[], &[]);
        let result = scan(&dir.path().join("roms"), &dir.path().join("covers"));
        assert!(matches!(result, Err(ScanError::EmptyLibrary(_))));
    }

    #[test]
    fn test_scan_missing_roms_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan(&dir.path().join("nope"), &dir.path().join("covers"));
        assert!(matches!(result, Err(ScanError::UnreadableDir { .. })));
    }

    #[test]
    fn test_scan_missing_covers_dir_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("roms")).unwrap();
        File::create(dir.path().join("roms").join("a.smc")).unwrap();
        let lib = scan(&dir.path().join("roms"), &dir.path().join("covers")).unwrap();
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.get(0).cover_path, None);
    }
}
