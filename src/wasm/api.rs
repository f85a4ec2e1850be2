//! WASM API for the emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state
//! inspection, keyboard/random input and screen sampling.

use crate::demo::{LAST_KEY, RANDOM_SEED, SNAKE_DEMO};
use crate::{flags, ScreenState, SystemMemory, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
///
/// Owns one CPU with the standard mirrored memory map plus a screen
/// sampler. A frontend typically loads a program (or the bundled snake
/// demo), then on a timer: feeds a random byte, forwards key presses,
/// runs a batch of steps, samples the screen and redraws if anything
/// changed.
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<SystemMemory>,
    screen: ScreenState,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a new emulator with zero-filled memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(SystemMemory::new()),
            screen: ScreenState::new(),
        }
    }

    /// Load raw machine code at the fixed origin (0x0600) and reset
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu
            .load(program)
            .and_then(|_| self.cpu.reset())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Load the bundled snake demo and reset
    pub fn load_demo(&mut self) -> Result<(), JsError> {
        self.load_program(SNAKE_DEMO)
    }

    /// Reset the CPU to the loaded program's entry point
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.cpu.reset().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `count` instructions
    pub fn run_steps(&mut self, count: u32) -> Result<(), JsError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Record a key press at the demo's last-key byte (0x00FF)
    pub fn key_down(&mut self, key: u8) -> Result<(), JsError> {
        self.cpu
            .write(LAST_KEY, key)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Refresh the demo's random byte (0x00FE)
    pub fn set_random(&mut self, value: u8) -> Result<(), JsError> {
        self.cpu
            .write(RANDOM_SEED, value)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Re-sample the screen window; returns whether any pixel changed
    pub fn sample_screen(&mut self) -> bool {
        self.screen.sample(&self.cpu);
        self.screen.changed()
    }

    /// The current RGB frame (32x32 pixels, 3 bytes each)
    pub fn frame(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.screen.frame()[..])
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.is_flag_set(flags::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.is_flag_set(flags::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.is_flag_set(flags::DECIMAL)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.is_flag_set(flags::INTERRUPT_DISABLE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.is_flag_set(flags::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.is_flag_set(flags::CARRY)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        self.cpu.read(addr).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), JsError> {
        self.cpu
            .write(addr, value)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256)
            .map(|i| self.cpu.read(start + i).unwrap_or(0))
            .collect()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
