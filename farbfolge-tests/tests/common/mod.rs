//! Gemeinsame Mocks für die Integration Tests

#![allow(dead_code)]

use farbfolge_core::{COLOR_COUNT, Color, LightError, LightWriter, StatusLedWriter};
use rand_core::{RngCore, impls};
use rgb::RGB8;

// ============================================================================
// Mock Lights
// ============================================================================

#[derive(Default)]
pub struct MockLights {
    pub on: [bool; COLOR_COUNT],
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self, color: Color) -> bool {
        self.on[color.index()]
    }

    pub fn lit_count(&self) -> usize {
        self.on.iter().filter(|on| **on).count()
    }
}

impl LightWriter for MockLights {
    fn set_light(&mut self, color: Color, on: bool) -> Result<(), LightError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LightError::WriteFailed);
        }

        self.on[color.index()] = on;
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Status LED
// ============================================================================

#[derive(Default)]
pub struct MockStatusLed {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
}

impl StatusLedWriter for MockStatusLed {
    fn write(&mut self, color: RGB8) -> Result<(), LightError> {
        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Scripted RNG
// ============================================================================

/// Liefert die vorgegebenen Werte zyklisch
///
/// Fisher-Yates zieht pro Shuffle drei Werte (k für i = 3, 2, 1).
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    /// Erzeugt bei jedem Shuffle [Red, Green, Blue, Yellow]
    pub fn red_green_blue_yellow() -> Self {
        Self::new(&[2, 0, 0])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
