// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use esp_farbfolge::hal::GpioLights;
use esp_farbfolge::tasks::{button_task, game_task};
use esp_farbfolge::{Color, InputEventChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Spiel-Lichter: Blue, Red, Yellow, Green (siehe config::LIGHT_GPIO_PINS)
    let light_config = OutputConfig::default();
    let lights = GpioLights::new([
        Output::new(peripherals.GPIO0, Level::Low, light_config),
        Output::new(peripherals.GPIO1, Level::Low, light_config),
        Output::new(peripherals.GPIO2, Level::Low, light_config),
        Output::new(peripherals.GPIO3, Level::Low, light_config),
    ]);

    // Taster mit Pull-Up (siehe config::BUTTON_GPIO_PINS)
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        Input::new(peripherals.GPIO4, button_config),
        Input::new(peripherals.GPIO5, button_config),
        Input::new(peripherals.GPIO6, button_config),
        Input::new(peripherals.GPIO7, button_config),
    ];

    // Input-Channel erstellen (Button-Tasks → Game-Task)
    static INPUT_CHANNEL: static_cell::StaticCell<InputEventChannel> =
        static_cell::StaticCell::new();
    let input_channel = &*INPUT_CHANNEL.init(InputEventChannel::new());

    // Spawn Game Task (besitzt Lichter, RNG und Status-LED)
    spawner
        .spawn(game_task(
            lights,
            Rng::new(),
            peripherals.GPIO8,
            peripherals.RMT,
            input_channel.receiver(),
        ))
        .unwrap();

    // Spawn Button Tasks (einer pro Farbe, gleiche Reihenfolge wie Color::ALL)
    for (input, color) in buttons.into_iter().zip(Color::ALL) {
        spawner
            .spawn(button_task(input, color, input_channel.sender()))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
