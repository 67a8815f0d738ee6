//! Konfigurasi ukuran buffer untuk inisialisasi
//!
//! Default mengikuti `DEFAULT_MEMORY_SIZE_IN_BYTES` (128 bytes).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::DEFAULT_MEMORY_SIZE_IN_BYTES;

/// Parameter alokasi buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Ukuran buffer dalam bytes saat `initialize_with`
    pub memory_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE_IN_BYTES,
        }
    }
}

impl BufferConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set ukuran buffer
    pub fn with_memory_size(mut self, size: usize) -> Self {
        self.memory_size = size;
        self
    }

    /// Tolak ukuran nol (buffer kosong hanya boleh lewat `set_memory`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }
        Ok(())
    }
}
