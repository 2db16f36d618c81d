//! SHA-256 digests for comparing seeded videos against their source.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks so large demo videos don't need to fit in memory.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_digest() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            sha256_path(f.path()).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_spans_multiple_reads() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let chunk = vec![b'x'; BUF_SIZE];
        f.write_all(&chunk).unwrap();
        f.write_all(b"tail").unwrap();
        f.flush().unwrap();

        let mut expected = Sha256::new();
        expected.update(&chunk);
        expected.update(b"tail");
        assert_eq!(sha256_path(f.path()).unwrap(), hex::encode(expected.finalize()));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = sha256_path(&dir.path().join("nope.mp4")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.mp4"));
    }
}
