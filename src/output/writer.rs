use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{self, Write};
use std::path::Path;

/// Print `content` to stdout, or replace `path` with it atomically.
///
/// Write failures on stdout (a closed pipe included) are returned, never panicked on.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        None => {
            let mut stdout = io::stdout().lock();
            write_content(&mut stdout, content).context("Failed to write to stdout")?;
        }
        Some(path) => {
            let mut file = AtomicWriteFile::open(path)
                .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
            write_content(&mut file, content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            file.commit()
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
        }
    }
    Ok(())
}

/// Write `content` with exactly one trailing newline
fn write_content<W: Write>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
