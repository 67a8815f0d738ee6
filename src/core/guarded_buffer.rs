//! Mutex-Guarded Byte Buffer
//!
//! Satu lock eksklusif menjaga status dan buffer sekaligus. Setiap method
//! `&self` memegang lock selama operasi penuh, dan guard melepasnya di semua
//! jalur keluar (termasuk return error).

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::Status;
use crate::config::BufferConfig;
use crate::error::{BufferError, Result};
use crate::DEFAULT_MEMORY_SIZE_IN_BYTES;

/// State yang dilindungi lock - status dan buffer selalu berubah bersama
#[derive(Debug, Default)]
struct State {
    status: Status,
    memory: Vec<u8>,
}

/// Byte buffer + status dengan akses ter-serialisasi
///
/// Zero value (`new()` / `default()`): status `Idle`, buffer kosong tanpa alokasi.
/// Panggil `initialize` sebelum dipakai bersama antar thread.
#[derive(Debug, Default)]
pub struct GuardedBuffer {
    state: Mutex<State>,
}

impl GuardedBuffer {
    /// Membuat instance zero value (belum diinisialisasi)
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                status: Status::Idle,
                memory: Vec::new(),
            }),
        }
    }

    /// Alokasi buffer `DEFAULT_MEMORY_SIZE_IN_BYTES` bytes (nol) dan set status.
    ///
    /// Tidak mengambil lock: `&mut self` menjamin tidak ada caller lain yang
    /// sedang memegang referensi ke instance ini.
    pub fn initialize(&mut self, status: Status) {
        self.reset(DEFAULT_MEMORY_SIZE_IN_BYTES, status);
    }

    /// Sama seperti `initialize`, ukuran buffer diambil dari config
    pub fn initialize_with(&mut self, config: &BufferConfig, status: Status) {
        self.reset(config.memory_size, status);
    }

    fn reset(&mut self, size: usize, status: Status) {
        let state = self.state.get_mut();
        state.memory = vec![0u8; size];
        state.status = status;
        debug!(size, %status, "buffer initialized");
    }

    pub fn status(&self) -> Status {
        self.state.lock().status
    }

    /// Salinan independen dari isi buffer saat ini
    pub fn memory(&self) -> Vec<u8> {
        self.state.lock().memory.clone()
    }

    /// Ganti seluruh buffer dengan salinan milik sendiri dari `memory`.
    ///
    /// Perubahan pada slice caller setelah call ini tidak terlihat di dalam.
    pub fn set_memory(&self, memory: &[u8]) {
        let owned = memory.to_vec();
        let len = owned.len();
        self.state.lock().memory = owned;
        debug!(len, "memory replaced");
    }

    /// Scan urut index naik; byte pertama yang sama dengan `target` ditimpa
    /// `replacement` di tempat, lalu index-nya dikembalikan.
    ///
    /// # Errors
    /// `BufferError::NotFound` jika `target` tidak ada di buffer.
    pub fn find_and_update_first(&self, target: u8, replacement: u8) -> Result<usize> {
        let mut state = self.state.lock();

        match state.memory.iter().position(|&b| b == target) {
            Some(index) => {
                state.memory[index] = replacement;
                trace!(index, target, replacement, "first match updated");
                Ok(index)
            }
            None => {
                debug!(target, len = state.memory.len(), "value not found");
                Err(BufferError::NotFound { value: target })
            }
        }
    }

    /// Ganti semua byte `target` dengan `replacement`, return jumlah yang diganti.
    ///
    /// Perubahan dikerjakan pada salinan privat lalu di-commit dalam satu
    /// assignment, jadi reader tidak pernah melihat buffer setengah jadi.
    pub fn replace_all(&self, target: u8, replacement: u8) -> usize {
        let mut state = self.state.lock();

        let mut replaced = state.memory.clone();
        let mut count = 0;
        for b in replaced.iter_mut().filter(|b| **b == target) {
            *b = replacement;
            count += 1;
        }

        state.memory = replaced;
        trace!(target, replacement, count, "replace all committed");
        count
    }

    /// Panjang buffer saat ini
    pub fn len(&self) -> usize {
        self.state.lock().memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().memory.is_empty()
    }
}
