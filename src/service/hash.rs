use crate::models::error::{Result, ScanError};
use blake2::{Blake2b512, Digest};
use std::fs;
use std::io::{BufReader, Error, Read};
use std::path::Path;

/// Hex-encoded BLAKE2b-512 digest of the file's full contents
pub fn checksum_file(file: &Path) -> Result<String> {
    let to_hash_error = |cause| ScanError::Hash {
        path: file.to_path_buf(),
        cause,
    };
    let reader = BufReader::new(fs::File::open(file).map_err(to_hash_error)?);
    hasher(reader).map_err(to_hash_error)
}

fn hasher<R: Read>(mut reader: BufReader<R>) -> std::result::Result<String, Error> {
    let mut hasher = Blake2b512::new();
    let mut buffer = [0; 8192];
    loop {
        let count = reader.read(&mut buffer)?;
        if count == 0 {
            break;
        }
        hasher.update(&buffer[..count]);
    }
    Ok(hex::encode(hasher.finalize()))
}
