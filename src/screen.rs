//! # Screen Sampling
//!
//! This module reads the memory window 0x0200-0x05FF as a 32x32 grid of
//! palette indices and converts it to an RGB frame buffer for a host
//! renderer. The core never draws anything itself; a host samples the
//! window after some number of steps and consumes the frame however it
//! likes (canvas, terminal, texture upload).
//!
//! Each cell's low nibble selects one of 16 palette entries. Only eight
//! distinct colors exist; the upper half of the palette repeats them, a
//! limited-palette convention shared with the programs this window was
//! designed for.
//!
//! [`ScreenState::sample`] also reports whether anything visible changed
//! since the previous sample, so hosts can skip redundant redraws.

use crate::{MemoryBus, CPU};

/// First address of the screen window.
pub const SCREEN_BASE: u16 = 0x0200;

/// Screen dimensions in cells (one byte per cell).
pub const SCREEN_WIDTH: usize = 32;
pub const SCREEN_HEIGHT: usize = 32;

/// RGB frame buffer length: 32 * 32 pixels, 3 bytes each.
pub const FRAME_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 3;

/// Palette-index to RGB mapping. Indices 8-15 repeat the base colors,
/// with cyan filling the two slots that have no counterpart.
pub const PALETTE: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00), // 0: black
    (0xFF, 0xFF, 0xFF), // 1: white
    (0x80, 0x80, 0x80), // 2: grey
    (0xFF, 0x00, 0x00), // 3: red
    (0x00, 0xFF, 0x00), // 4: green
    (0x00, 0x00, 0xFF), // 5: blue
    (0xFF, 0x00, 0xFF), // 6: magenta
    (0xFF, 0xFF, 0x00), // 7: yellow
    (0x00, 0xFF, 0xFF), // 8: cyan
    (0x80, 0x80, 0x80), // 9: grey
    (0xFF, 0x00, 0x00), // 10: red
    (0x00, 0xFF, 0x00), // 11: green
    (0x00, 0x00, 0xFF), // 12: blue
    (0xFF, 0x00, 0xFF), // 13: magenta
    (0xFF, 0xFF, 0x00), // 14: yellow
    (0x00, 0xFF, 0xFF), // 15: cyan
];

/// An RGB snapshot of the screen window plus a change marker.
///
/// # Examples
///
/// ```
/// use emu6502::{ScreenState, SystemMemory, CPU};
///
/// let mut cpu = CPU::new(SystemMemory::new());
/// cpu.write(0x0200, 0x01).unwrap(); // top-left pixel white
///
/// let mut screen = ScreenState::new();
/// screen.sample(&cpu);
///
/// assert!(screen.changed());
/// assert_eq!(&screen.frame()[..3], &[0xFF, 0xFF, 0xFF]);
/// ```
pub struct ScreenState {
    frame: Box<[u8; FRAME_LEN]>,
    changed: bool,
}

impl ScreenState {
    /// Creates an all-black frame. `changed` starts false; the first
    /// sample of a non-black screen will set it.
    pub fn new() -> Self {
        Self {
            frame: Box::new([0; FRAME_LEN]),
            changed: false,
        }
    }

    /// Re-reads the screen window from the CPU's memory.
    ///
    /// After the call, [`changed`](Self::changed) is true iff at least one
    /// pixel's RGB differs from the previous sample; it is recomputed each
    /// sample, not accumulated. Unreadable cells keep their prior pixel.
    pub fn sample<M: MemoryBus>(&mut self, cpu: &CPU<M>) {
        let mut changed = false;
        for cell in 0..(SCREEN_WIDTH * SCREEN_HEIGHT) {
            let addr = SCREEN_BASE.wrapping_add(cell as u16);
            let index = match cpu.read(addr) {
                Ok(byte) => (byte & 0x0F) as usize,
                Err(_) => continue,
            };
            let (r, g, b) = PALETTE[index];
            let at = cell * 3;
            if self.frame[at] != r || self.frame[at + 1] != g || self.frame[at + 2] != b {
                self.frame[at] = r;
                self.frame[at + 1] = g;
                self.frame[at + 2] = b;
                changed = true;
            }
        }
        self.changed = changed;
    }

    /// The current RGB frame, row-major, 3 bytes per pixel.
    pub fn frame(&self) -> &[u8; FRAME_LEN] {
        &self.frame
    }

    /// Whether the last [`sample`](Self::sample) found any pixel change.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}
