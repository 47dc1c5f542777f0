//! Entropy sourcing.

mod dev;

pub use dev::DevUrandom;

use thiserror::Error;

/// Failure modes of the underlying random device.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("cannot open {device}: {0}", device = dev::DEVICE)]
    Unavailable(#[source] std::io::Error),
    #[error("short read from {device}: {0}", device = dev::DEVICE)]
    ShortRead(#[source] std::io::Error),
}

/// A supplier of uniformly distributed random bytes.
///
/// `fill` either fills `dest` completely or reports an error; a partial
/// fill is never returned as success.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
