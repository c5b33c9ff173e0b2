//! Feed timer firmware
//!
//! Main firmware binary for RP2040 boards with a lid-mounted LIS3DH, a ring
//! of WS2812 pixels, a piezo and two buttons.
//!
//! Pin assignment:
//! - GPIO4/5: I2C0 SDA/SCL to the LIS3DH (alternate address 0x19)
//! - GPIO6: button A (undo), active high
//! - GPIO7: button B (snooze), active high
//! - GPIO8: mute slide switch, active low
//! - GPIO10: piezo, PWM slice 5 channel A
//! - GPIO16: WS2812 data, PIO0 state machine 0

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use feedtimer_core::alarm::MuteGate;
use feedtimer_core::diagnostics::LoopProfiler;
use feedtimer_core::selftest::SelfTest;
use feedtimer_core::timer::TimerController;
use feedtimer_core::traits::Clock;
use feedtimer_drivers::input::{is_active, ActiveLevel, GpioButtons};
use feedtimer_drivers::output::{PixelFrame, PwmTone};
use feedtimer_drivers::sensor::{LidAccelerometer, SlaveAddr};

use crate::clock::UptimeClock;
use crate::config::{load_config, PIXEL_BRIGHTNESS};
use crate::events::EventLog;

mod clock;
mod config;
mod events;

/// Pixels on the ring
const PIXEL_COUNT: usize = 10;

/// Alarm tone frequency
const TONE_HZ: u32 = 1760;

/// PWM clock divider for the piezo slice
const TONE_DIVIDER: u8 = 2;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// PWM wrap value giving `TONE_HZ` at the current system clock
fn tone_top() -> u16 {
    let hz = embassy_rp::clocks::clk_sys_freq() / (u32::from(TONE_DIVIDER) * TONE_HZ);
    u16::try_from(hz.saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Feed timer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Accelerometer
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let mut accel = match LidAccelerometer::new(i2c, SlaveAddr::Alternate) {
        Ok(sensor) => {
            info!("LIS3DH initialized");
            Some(sensor)
        }
        // Keep running: every read counts as inconclusive
        Err(e) => {
            error!("LIS3DH init failed: {}", e);
            None
        }
    };

    // Buttons and mute switch
    let mut buttons = GpioButtons::new(
        Input::new(p.PIN_6, Pull::Down),
        Input::new(p.PIN_7, Pull::Down),
        ActiveLevel::High,
    );
    let mut mute_switch = Input::new(p.PIN_8, Pull::Up);

    // Piezo
    let mut pwm_config = pwm::Config::default();
    pwm_config.divider = TONE_DIVIDER.into();
    pwm_config.top = tone_top();
    let pwm = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config);
    let (Some(piezo), _) = pwm.split() else {
        defmt::panic!("piezo PWM channel unavailable");
    };
    let tone = MuteGate::new(PwmTone::new(piezo));
    info!("Piezo at {} Hz", TONE_HZ);

    // Pixel ring
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut ring = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);
    let mut frame = PixelFrame::<PIXEL_COUNT>::new();
    info!("Pixel ring: {} pixels, brightness {}", PIXEL_COUNT, PIXEL_BRIGHTNESS);

    let clock = UptimeClock;

    // Power-on self test
    let mut post = SelfTest::new();
    loop {
        let done = post.step(clock.now_ms(), &mut frame);
        if let Some(colors) = frame.take_changed(PIXEL_BRIGHTNESS) {
            ring.write(&colors).await;
        }
        if done {
            break;
        }
        yield_now().await;
    }
    info!("Self test complete");

    let mut controller = TimerController::new(config, clock.now_ms(), frame, tone);
    let mut profiler = LoopProfiler::default();
    let mut events = EventLog::default();

    info!("Entering main loop");

    loop {
        let started = Instant::now();

        let muted = is_active(&mut mute_switch, ActiveLevel::Low);
        controller.tone_mut().set_muted(muted);

        let report = controller.poll(&mut accel, &mut buttons, &clock);
        events.record(&report);

        if let Some(colors) = controller.pixels_mut().take_changed(PIXEL_BRIGHTNESS) {
            ring.write(&colors).await;
        }

        let micros = u32::try_from(started.elapsed().as_micros()).unwrap_or(u32::MAX);
        profiler.record(micros);
        if let Some(histogram) = profiler.report_due(report.now) {
            info!("Loop times (us): {}", histogram);
        }

        yield_now().await;
    }
}
