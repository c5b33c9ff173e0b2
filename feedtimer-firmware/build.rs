//! Build script for feedtimer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml and embeds it as postcard binary

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use feedtimer_core::config::{TimerConfig, MAX_ENCODED_LEN};
use serde::Deserialize;

/// Default WS2812 brightness when `[board]` leaves it out
const DEFAULT_BRIGHTNESS: u8 = 64;

#[derive(Deserialize)]
struct TimerFile {
    #[serde(default)]
    timer: TimerConfig,
    #[serde(default)]
    board: BoardSection,
}

#[derive(Deserialize)]
struct BoardSection {
    #[serde(default = "default_brightness")]
    brightness: u8,
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

fn default_brightness() -> u8 {
    DEFAULT_BRIGHTNESS
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    setup_linker(&out_dir);
    embed_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to copy memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml and write the encoded config plus board constants
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file in the    ║\n\
            ║  feedtimer-firmware directory.                                   ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("\nERROR: failed to read timer.toml: {}\n", e));

    let file: TimerFile = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("\nERROR: timer.toml is not valid:\n\n{}\n", e));

    if let Err(e) = file.timer.validate() {
        panic!(
            "\nERROR: timer.toml [timer] section rejected: {:?}\n\
             Check that durations are non-zero, that a beep burst fits inside\n\
             beep_interval_ms, and that due <= overdue <= arm thresholds.\n",
            e
        );
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let len = file
        .timer
        .encode(&mut buf)
        .unwrap_or_else(|e| panic!("\nERROR: failed to encode timer config: {:?}\n", e));
    fs::write(out_dir.join("timer_config.bin"), &buf[..len])
        .expect("failed to write timer_config.bin");

    let board = format!(
        "/// Global WS2812 brightness from timer.toml\n\
         pub const PIXEL_BRIGHTNESS: u8 = {};\n",
        file.board.brightness
    );
    fs::write(out_dir.join("board.rs"), board).expect("failed to write board.rs");
}
