// Spiel-Lichter - vier GPIO-Ausgänge, indiziert über Color::index()

use esp_hal::gpio::{Level, Output};

use crate::{COLOR_COUNT, Color, LightError, LightWriter};

/// Vier LEDs an GPIO-Ausgängen (active high)
///
/// Das Array hat genau eine Position pro Farbe, ein Index außerhalb
/// des Bereichs ist damit ausgeschlossen.
pub struct GpioLights {
    outputs: [Output<'static>; COLOR_COUNT],
}

impl GpioLights {
    /// Übernimmt die Ausgänge in der Reihenfolge Blue, Red, Yellow, Green
    /// und schaltet alle aus.
    pub fn new(mut outputs: [Output<'static>; COLOR_COUNT]) -> Self {
        for output in outputs.iter_mut() {
            output.set_low();
        }
        Self { outputs }
    }
}

impl LightWriter for GpioLights {
    fn set_light(&mut self, color: Color, on: bool) -> Result<(), LightError> {
        let level = if on { Level::High } else { Level::Low };
        self.outputs[color.index()].set_level(level);
        Ok(())
    }
}
