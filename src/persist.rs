//! Loading and saving a number as text.
//!
//! A number file holds a decimal numeral on its first line; anything after it is ignored.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use digit_num::DigitList;
use log::{debug, warn};

use crate::error::NumberListError;

/// Reads the first line of `path`, trimmed. An empty file yields `None`.
pub fn read_first_line(path: &Path) -> Result<Option<String>, NumberListError> {
    let io_err = |source| NumberListError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;
    let mut lines = BufReader::new(file).lines();
    match lines.next() {
        Some(line) => Ok(Some(line.map_err(io_err)?.trim().to_string())),
        None => Ok(None),
    }
}

/// Parses the number stored in `path`. A file that cannot be read is logged and
/// gives an empty list.
pub fn load(path: &Path) -> DigitList {
    match read_first_line(path) {
        Ok(Some(line)) => {
            debug!("loaded {} characters from {}", line.len(), path.display());
            DigitList::from(line.as_str())
        }
        Ok(None) => {
            debug!("{} is empty", path.display());
            DigitList::new()
        }
        Err(e) => {
            warn!("{}", e);
            DigitList::new()
        }
    }
}

/// Writes the decimal rendering of `list` as the whole content of `path`.
pub fn save(list: &DigitList, path: &Path) -> Result<(), NumberListError> {
    let text = list.to_decimal_string();
    fs::write(path, &text).map_err(|source| {
        let e = NumberListError::Io { path: path.to_path_buf(), source };
        warn!("{}", e);
        e
    })?;
    debug!("saved {} digits to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");
        fs::write(&path, "  12345 \n999\n").unwrap();
        assert_eq!(load(&path), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = load(&dir.path().join("missing.txt"));
        assert!(list.is_empty());
        assert!(matches!(
            read_first_line(&dir.path().join("missing.txt")),
            Err(NumberListError::Io { .. })
        ));
    }

    #[test]
    fn load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(read_first_line(file.path()).unwrap(), None);
        assert!(load(file.path()).is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        save(&DigitList::from("00420"), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "00420");
        save(&DigitList::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
        assert_eq!(load(&path), [0]);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("file.txt");
        assert!(save(&DigitList::from("1"), &path).is_err());
    }
}
