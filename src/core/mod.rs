//! Core module: Mutex-Guarded Byte Buffer
//!
//! Prinsip desain:
//! - Single Lock: Satu Mutex menjaga status + buffer, tidak ada akses parsial
//! - Owned Data: Buffer selalu disalin saat masuk dan keluar, tidak ada aliasing
//! - Error as Value: "not found" dikembalikan sebagai `Result`, bukan panic

mod guarded_buffer;
mod status;

pub use guarded_buffer::GuardedBuffer;
pub use status::Status;
