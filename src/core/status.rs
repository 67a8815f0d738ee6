//! Status buffer - nilai informasional, tanpa aturan transisi

use std::fmt;

/// Status yang disimpan bersama buffer
///
/// Komponen tidak memvalidasi transisi; nilai apa pun boleh di-set saat
/// inisialisasi dan dibaca kembali apa adanya.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Zero value
    #[default]
    Idle = 0,
    Receiving = 1,
    Processing = 2,
    Transmitting = 3,
}

impl Status {
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Idle),
            1 => Some(Self::Receiving),
            2 => Some(Self::Processing),
            3 => Some(Self::Transmitting),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Receiving => "receiving",
            Self::Processing => "processing",
            Self::Transmitting => "transmitting",
        };
        f.write_str(name)
    }
}
