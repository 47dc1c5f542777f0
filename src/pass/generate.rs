//! Password generation.

use std::io::Write;

use thiserror::Error;
use zeroize::Zeroizing;

use super::charset::{CharsetConfig, EmptyCharset};
use super::output::SecureBufWriter;
use crate::rand::{EntropyError, EntropySource};

/// Bytes requested from the entropy source per draw. Large enough to
/// amortize device reads, small enough to bound wasted entropy.
const DRAW_SIZE: usize = 128;

pub const DEFAULT_LENGTH: usize = 20;

/// One generation job: password length and how many to produce.
#[derive(Debug, Clone)]
pub struct PasswordRequest {
    pub length: usize,
    pub repeat: usize,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            repeat: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] EmptyCharset),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Generate one password of exactly `length` accepted bytes.
///
/// Raw uniform bytes are drawn in fixed-size chunks and kept or
/// discarded one at a time against `config`. There is no reduction from
/// the byte range onto the charset size anywhere, so alphabet sizes that
/// do not divide 256 introduce no bias; the cost is a variable number of
/// draws. The returned buffer zeroes itself on drop.
pub fn generate<E: EntropySource>(
    config: &CharsetConfig,
    length: usize,
    source: &mut E,
) -> Result<Zeroizing<Vec<u8>>, GenerateError> {
    config.validate()?;

    let mut pass = Zeroizing::new(Vec::with_capacity(length));
    let mut chunk = Zeroizing::new([0u8; DRAW_SIZE]);

    while pass.len() < length {
        source.fill(&mut chunk[..])?;
        for &byte in chunk.iter() {
            if config.accepts(byte) {
                pass.push(byte);
                if pass.len() == length {
                    break;
                }
            }
        }
    }

    Ok(pass)
}

/// Generate `request.repeat` independent passwords, one per line.
///
/// Each iteration draws fresh entropy. The first failure aborts the
/// remaining iterations without emitting a partial line.
pub fn generate_batch<E: EntropySource, W: Write>(
    config: &CharsetConfig,
    request: &PasswordRequest,
    source: &mut E,
    out: W,
) -> Result<(), GenerateError> {
    let mut out = SecureBufWriter::new(out);

    for _ in 0..request.repeat {
        let pass = generate(config, request.length, source)?;
        let _ = out.write_all(&pass);
        let _ = out.write_all(b"\n");
    }

    Ok(())
}
