//! Guarded Buffer - Mutex-Guarded Mutable State
//!
//! Arsitektur:
//! - `core`: `GuardedBuffer` (status + byte buffer di balik satu lock)
//! - `config`: ukuran buffer untuk inisialisasi
//! - `workload`: random fill dan lock exercise multi-thread
//!
//! ```
//! use guarded_buffer::{GuardedBuffer, Status};
//!
//! let mut buf = GuardedBuffer::new();
//! buf.initialize(Status::Idle);
//! buf.set_memory(&[10, 20, 10, 30]);
//!
//! assert_eq!(buf.find_and_update_first(10, 99), Ok(0));
//! assert_eq!(buf.replace_all(10, 0), 1);
//! assert_eq!(buf.memory(), vec![99, 20, 0, 30]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod workload;

pub use crate::config::BufferConfig;
pub use crate::core::{GuardedBuffer, Status};
pub use crate::error::{BufferError, ConfigError, Result};
pub use crate::workload::{ExerciseReport, LockExercise};

/// Ukuran buffer default yang dialokasi oleh `initialize`
pub const DEFAULT_MEMORY_SIZE_IN_BYTES: usize = 128;
