// Hardware-RNG als rand_core::RngCore für den Shuffle im Core

use esp_hal::rng::Rng;
use rand_core::{RngCore, impls};

/// Wrapper um den ESP32 True-RNG
pub struct HwRng {
    rng: Rng,
}

impl HwRng {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
