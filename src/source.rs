/*
 * ==========================================================================
 * POLYLANG - Collection Schema Parser
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the POLYLANG schema parser project.
 * 
 * POLYLANG is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

//! Source-file driver.
//!
//! Turns a path into a `Program`:
//!
//! 1. A file is read and parsed on its own.
//! 2. A directory is listed (sorted by file name, subdirectories skipped),
//!    filtered to `*.polylang` files, and each file is parsed in turn.
//! 3. The top-level nodes of every file are appended, file after file,
//!    into one `Program`.
//!
//! The first failing file aborts a directory parse. Its error comes back
//! together with the nodes merged so far, for diagnostics only.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::ast::Program;
use crate::error::{Error, Result};
use crate::parser::parse_source;

/// Extension (without the dot) of files picked up from a directory.
pub const SOURCE_EXTENSION: &str = "polylang";

/// Parses a file or a directory, depending on what `path` is.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;

    if metadata.is_dir() {
        parse_dir(path)
    } else {
        parse_file(path)
    }
}

/// Reads and parses one source file, whatever its extension.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let program = parse_source(&source).map_err(|error| Error::Syntax {
        file: Some(path.to_path_buf()),
        error,
    })?;

    debug!(path = %path.display(), nodes = program.nodes.len(), "parsed file");
    Ok(program)
}

/// Parses every `*.polylang` file directly inside `dir` into one program.
///
/// Files are visited in file-name order. An empty directory, or one with
/// no matching files, gives an empty program.
pub fn parse_dir(dir: impl AsRef<Path>) -> Result<Program> {
    let dir = dir.as_ref();
    let files = collect_source_files(dir)?;
    let mut program = Program::default();

    for file in &files {
        match parse_file(file) {
            Ok(parsed) => program.nodes.extend(parsed.nodes),
            Err(error) => {
                warn!(path = %file.display(), error = %error, "directory parse stopped");
                return Err(Error::Directory {
                    file: file.clone(),
                    error: Box::new(error),
                    partial: program,
                });
            }
        }
    }

    info!(
        dir = %dir.display(),
        files = files.len(),
        nodes = program.nodes.len(),
        "parsed directory"
    );
    Ok(program)
}

/// Lists the source files directly inside `dir`, sorted by file name.
pub fn collect_source_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        if file_type.is_dir() {
            debug!(path = %path.display(), "skipping subdirectory");
            continue;
        }

        if !has_source_extension(&path) {
            debug!(path = %path.display(), "skipping non-source file");
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(SOURCE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn extension_filter() {
        assert!(has_source_extension(Path::new("a.polylang")));
        assert!(has_source_extension(Path::new("dir/b.c.polylang")));
        assert!(!has_source_extension(Path::new("a.polylang.bak")));
        assert!(!has_source_extension(Path::new("a.txt")));
        assert!(!has_source_extension(Path::new("polylang")));
    }

    #[test]
    fn collects_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.polylang", "");
        write(&dir, "a.polylang", "");
        write(&dir, "notes.txt", "");
        fs::create_dir(dir.path().join("nested.polylang")).unwrap();

        let names: Vec<_> = collect_source_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.polylang", "b.polylang"]);
    }

    #[test]
    fn parse_file_ignores_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "schema.txt", "collection A { id: string; }");
        assert_eq!(parse_file(&path).unwrap().nodes.len(), 1);
    }

    #[test]
    fn missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let error = parse_path(dir.path().join("absent.polylang")).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn syntax_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.polylang", "collection A {");
        match parse_file(&path).unwrap_err() {
            Error::Syntax { file, error } => {
                assert_eq!(file.as_deref(), Some(path.as_path()));
                assert_eq!(error.code, "E_SYNTAX");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
