//! Error types untuk Guarded Buffer
//!
//! Hanya ada satu kondisi gagal di jalur operasi: nilai yang dicari tidak ada.
//! Konfigurasi punya error sendiri karena divalidasi sebelum buffer dialokasi.

use thiserror::Error;

/// Error dari operasi pada `GuardedBuffer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// `find_and_update_first` tidak menemukan byte target
    #[error("value {value} not found")]
    NotFound { value: u8 },
}

/// Error validasi `BufferConfig`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("memory size must be greater than zero")]
    ZeroMemorySize,
}

pub type Result<T> = std::result::Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_value() {
        let err = BufferError::NotFound { value: 255 };
        assert_eq!(err.to_string(), "value 255 not found");
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            ConfigError::ZeroMemorySize.to_string(),
            "memory size must be greater than zero"
        );
    }
}
