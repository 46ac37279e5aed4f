//! Local store for puzzle inputs
//!
//! Inputs live on disk as `{root}/{year}/day{NN}.txt`. The store only reads;
//! supplying the files is up to the user.

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Read-only file store for puzzle inputs
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Load the input for a year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.exists() {
            return Err(InputError::NotFound {
                year,
                day,
                path: path.display().to_string(),
            });
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        let path = store.input_path(2024, 1);
        assert!(path.to_string_lossy().ends_with("2024/day01.txt"));

        let path = store.input_path(2024, 25);
        assert!(path.to_string_lossy().ends_with("2024/day25.txt"));
    }

    #[test]
    fn test_load_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let dir = temp.path().join("2024");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day03.txt"), "mul(2,4)\n").unwrap();

        assert!(store.contains(2024, 3));
        assert_eq!(store.load(2024, 3).unwrap(), "mul(2,4)\n");
    }

    #[test]
    fn test_missing_input_reported() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 3));
        let err = store.load(2024, 3).unwrap_err();
        assert!(matches!(err, InputError::NotFound { year: 2024, day: 3, .. }));
    }
}
