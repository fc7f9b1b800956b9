// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus farbfolge-core,
// damit die Spiel-Logik auf dem Host testbar bleibt.

pub mod lights;
pub mod rng;
pub mod status_led;

pub use lights::GpioLights;
pub use rng::HwRng;
pub use status_led::RmtStatusLed;
