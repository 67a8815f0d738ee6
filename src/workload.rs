//! Lock Exercise - beban kerja multi-thread untuk `GuardedBuffer`
//!
//! N finder thread mencari byte 255 sementara N replacer thread mengganti
//! digit hex acak, semuanya terhadap satu instance yang sama. Buffer diisi
//! digit hex (`0-9A-F`), jadi finder tidak boleh pernah menemukan 255.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::BufferConfig;
use crate::core::{GuardedBuffer, Status};
use crate::error::ConfigError;

/// Alfabet untuk random fill
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Byte yang dicari finder - tidak pernah muncul di buffer hasil random fill
pub const PROBE_VALUE: u8 = 255;

/// Satu digit hex acak (ASCII)
#[inline]
pub fn random_hex_digit() -> u8 {
    HEX_DIGITS[rand::thread_rng().gen_range(0..HEX_DIGITS.len())]
}

/// Isi seluruh slice dengan digit hex acak
pub fn fill_with_random_bytes(memory: &mut [u8]) {
    let mut rng = rand::thread_rng();
    for b in memory.iter_mut() {
        *b = HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())];
    }
}

/// Hasil satu kali `LockExercise::run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseReport {
    /// Finder yang berhasil menemukan `PROBE_VALUE`
    pub finder_hits: usize,
    /// Total byte yang diganti oleh semua replacer
    pub replacements: usize,
    /// Panjang buffer setelah semua thread selesai
    pub final_len: usize,
    pub elapsed: Duration,
}

/// Parameter lock exercise
#[derive(Debug, Clone)]
pub struct LockExercise {
    /// Jumlah finder (dan jumlah replacer yang sama)
    pub workers: usize,
    pub memory_size: usize,
}

impl Default for LockExercise {
    fn default() -> Self {
        Self {
            workers: 5,
            memory_size: 8192,
        }
    }
}

impl LockExercise {
    pub fn new(workers: usize, memory_size: usize) -> Self {
        Self {
            workers,
            memory_size,
        }
    }

    /// Buffer terinisialisasi berisi digit hex acak sebanyak `memory_size` bytes
    pub fn prepare(&self) -> Result<GuardedBuffer, ConfigError> {
        let config = BufferConfig::new().with_memory_size(self.memory_size);
        config.validate()?;

        let mut buffer = GuardedBuffer::new();
        buffer.initialize_with(&config, Status::Idle);

        let mut memory = vec![0u8; self.memory_size];
        fill_with_random_bytes(&mut memory);
        buffer.set_memory(&memory);

        Ok(buffer)
    }

    /// Jalankan finder dan replacer bersamaan, tunggu semuanya selesai
    pub fn run(&self, buffer: &GuardedBuffer) -> ExerciseReport {
        let finder_hits = AtomicUsize::new(0);
        let replacements = AtomicUsize::new(0);

        let start = Instant::now();
        thread::scope(|s| {
            for i in 0..self.workers {
                let finder_hits = &finder_hits;
                s.spawn(move || {
                    let id = 100 + i;
                    match buffer.find_and_update_first(PROBE_VALUE, 0) {
                        Ok(index) => {
                            debug!(id, index, "finder: probe value found");
                            finder_hits.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => debug!(id, error = %e, "finder: done"),
                    }
                });

                let search = random_hex_digit();
                let replace = random_hex_digit();
                let replacements = &replacements;
                s.spawn(move || {
                    let id = 200 + i;
                    let n = buffer.replace_all(search, replace);
                    if n == 0 {
                        debug!(id, search, "replacer: nothing found");
                    } else {
                        debug!(id, search, replace, n, "replacer: bytes replaced");
                    }
                    replacements.fetch_add(n, Ordering::Relaxed);
                });
            }
        });
        let elapsed = start.elapsed();

        let report = ExerciseReport {
            finder_hits: finder_hits.into_inner(),
            replacements: replacements.into_inner(),
            final_len: buffer.len(),
            elapsed,
        };

        info!(
            workers = self.workers,
            finder_hits = report.finder_hits,
            replacements = report.replacements,
            final_len = report.final_len,
            elapsed_us = report.elapsed.as_micros() as u64,
            "lock exercise complete"
        );

        report
    }
}
