use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Creates an empty wordlist at `path` (and its parent directory) when
/// absent. Failure here is fatal for the whole lookup, not a downgrade to
/// network-only mode.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage(path, e))?;
    }

    File::create(path).map(|_| ()).map_err(|e| storage(path, e))
}

/// Scan state while walking the file line by line. Blocks are delimited
/// by blank lines; the head line of each block decides its fate once.
enum Scan {
    Outside,
    Matching(Vec<String>),
    Skipping,
}

/// Returns the raw lines of the first block whose head line carries
/// `word` as its first whitespace-delimited token, stopping the scan
/// there. A trailing block cut off at end of file is still a block.
/// `None` when the file is empty or nothing matches.
pub fn find(path: &Path, word: &str) -> Result<Option<Vec<String>>> {
    let file = File::open(path).map_err(|e| storage(path, e))?;
    let reader = BufReader::new(file);

    let mut state = Scan::Outside;

    for line in reader.lines() {
        let line = line.map_err(|e| storage(path, e))?;
        let blank = line.trim().is_empty();

        state = match state {
            Scan::Outside => {
                if blank {
                    Scan::Outside
                } else if line.split_whitespace().next() == Some(word) {
                    Scan::Matching(vec![line])
                } else {
                    Scan::Skipping
                }
            }
            Scan::Matching(mut block) => {
                if blank {
                    debug!("wordlist hit for `{word}` ({} lines)", block.len());
                    return Ok(Some(block));
                }
                block.push(line);
                Scan::Matching(block)
            }
            Scan::Skipping => {
                if blank {
                    Scan::Outside
                } else {
                    Scan::Skipping
                }
            }
        };
    }

    match state {
        Scan::Matching(block) => {
            debug!("wordlist hit for `{word}` in trailing block");
            Ok(Some(block))
        }
        _ => {
            debug!("wordlist miss for `{word}`");
            Ok(None)
        }
    }
}

/// Appends one serialized block. The serializer terminates every block
/// with a blank line, so consecutive appends stay separated. The handle
/// is scoped to this function and closes on every exit path.
pub fn append(path: &Path, record: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| storage(path, e))?;

    file.write_all(record.as_bytes())
        .map_err(|e| storage(path, e))?;

    debug!("appended {} bytes to {}", record.len(), path.display());
    Ok(())
}

fn storage(path: &Path, source: std::io::Error) -> Error {
    Error::Storage {
        path: path.to_path_buf(),
        source,
    }
}
