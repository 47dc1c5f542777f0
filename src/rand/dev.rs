//! Kernel random device adapter.

use std::fs::File;
use std::io::Read;

use super::{EntropyError, EntropySource};

pub const DEVICE: &str = "/dev/urandom";

/// Blocking reader over the kernel CSPRNG device.
pub struct DevUrandom {
    file: File,
}

impl DevUrandom {
    /// Open the device. Fails up front rather than on the first draw.
    pub fn open() -> Result<Self, EntropyError> {
        let file = File::open(DEVICE).map_err(EntropyError::Unavailable)?;
        Ok(Self { file })
    }
}

impl EntropySource for DevUrandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.file.read_exact(dest).map_err(EntropyError::ShortRead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_exact_buffer_sizes() {
        let mut source = DevUrandom::open().expect("device should open");
        for size in [1, 16, 128] {
            let mut buf = vec![0u8; size];
            source.fill(&mut buf).expect("device should fill");
        }
    }
}
