use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use log::{debug, info};

use crate::error::{PredictError, Result};

/// Extension of the files read when the corpus path is a directory.
pub(crate) const CORPUS_EXTENSION: &str = "txt";

/// Reads a text file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 is reported as `io::ErrorKind::InvalidData`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted so that concatenation order is stable.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Loads a corpus into memory.
///
/// `path` is either a single text file or a directory, in which case every
/// `.txt` file directly inside it is read (subdirectories are ignored) and
/// the contents are joined with a newline.
///
/// # Errors
/// - `PredictError::Io` if a file is missing, unreadable or not UTF-8.
/// - `PredictError::EmptyCorpus` if the directory holds no `.txt` file.
pub(crate) fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = normalize_folder(path.as_ref());

	if !path.is_dir() {
		let text = read_file(&path)?;
		info!("Loaded corpus {} ({} bytes)", path.display(), text.len());
		return Ok(text);
	}

	let files = list_files(&path, CORPUS_EXTENSION)?;
	if files.is_empty() {
		return Err(PredictError::EmptyCorpus(path));
	}

	let mut text = String::new();
	for file in &files {
		debug!("Reading corpus file {}", file.display());
		text.push_str(&read_file(file)?);
		text.push('\n');
	}
	info!("Loaded corpus {} ({} files, {} bytes)", path.display(), files.len(), text.len());

	Ok(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_single_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "The son of Pandu").unwrap();

		let text = read_corpus(file.path()).unwrap();
		assert_eq!(text, "The son of Pandu");
	}

	#[test]
	fn reads_txt_files_of_directory_in_name_order() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "second").unwrap();
		fs::write(dir.path().join("a.txt"), "first").unwrap();
		fs::write(dir.path().join("notes.md"), "ignored").unwrap();

		let text = read_corpus(dir.path()).unwrap();
		assert_eq!(text, "first\nsecond\n");
	}

	#[test]
	fn empty_directory_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(read_corpus(dir.path()), Err(PredictError::EmptyCorpus(_))));
	}

	#[test]
	fn missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_corpus(dir.path().join("missing.txt")).unwrap_err();
		assert!(matches!(err, PredictError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
	}

	#[test]
	fn invalid_utf8_is_io_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

		let err = read_corpus(file.path()).unwrap_err();
		assert!(matches!(err, PredictError::Io(ref e) if e.kind() == io::ErrorKind::InvalidData));
	}
}
