//! Include directive extraction.
//!
//! A directive is recognized purely by its text: the line must start with
//! `#include ` (one space, no leading whitespace), followed somewhere by a
//! `"` or `<`. The include text runs up to the next `"` or `>`. Lines that
//! start with the prefix but lack either delimiter are skipped without
//! complaint, since commented-out or templated text is common and a false
//! report is worse than a missed include.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Literal prefix of an include line.
pub const INCLUDE_PREFIX: &str = "#include ";

/// One include directive found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line number, counted over every line of the file.
    pub line: u32,
    /// The text between the delimiters, e.g. `common/util.hpp`.
    pub text: String,
}

/// Extract the include text from a single line, if it is a directive.
///
/// # Examples
///
/// ```
/// use incpath::scan::parse_directive;
///
/// assert_eq!(parse_directive("#include \"a/b.h\""), Some("a/b.h"));
/// assert_eq!(parse_directive("#include <vector> // std"), Some("vector"));
/// assert_eq!(parse_directive("#include \"unterminated"), None);
/// assert_eq!(parse_directive("  #include <indented>"), None);
/// assert_eq!(parse_directive("#include MACRO_HEADER"), None);
/// ```
#[must_use]
pub fn parse_directive(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(INCLUDE_PREFIX)?;
    let start = rest.find(['"', '<'])?;
    let after = &rest[start + 1..];
    let end = after.find(['"', '>'])?;
    Some(&after[..end])
}

/// Open `path` and lazily iterate over its include directives.
///
/// Every call reopens the file, so scanning is restartable. The handle is
/// released when the returned iterator is dropped.
///
/// # Errors
///
/// Returns `ReadFile` if the file cannot be opened. Read failures part-way
/// through surface as an `Err` item from the iterator.
///
/// # Examples
///
/// ```no_run
/// use incpath::scan::scan;
/// use std::path::Path;
///
/// for directive in scan(Path::new("src/main.cpp")).unwrap() {
///     let directive = directive.unwrap();
///     println!("{}: {}", directive.line, directive.text);
/// }
/// ```
pub fn scan(path: &Path) -> Result<Directives> {
    let file = File::open(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Directives {
        reader: BufReader::new(file),
        path: path.to_path_buf(),
        line: 0,
        buf: Vec::new(),
        done: false,
    })
}

/// Iterator over the directives of one file. Created by [`scan`].
#[derive(Debug)]
pub struct Directives {
    reader: BufReader<File>,
    path: PathBuf,
    line: u32,
    buf: Vec<u8>,
    done: bool,
}

impl Iterator for Directives {
    type Item = Result<Directive>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line += 1;
                    let text = String::from_utf8_lossy(&self.buf);
                    let text = text.trim_end_matches(['\n', '\r']);
                    if let Some(include) = parse_directive(text) {
                        return Some(Ok(Directive {
                            line: self.line,
                            text: include.to_string(),
                        }));
                    }
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(Error::ReadFile {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }
        }
        None
    }
}
