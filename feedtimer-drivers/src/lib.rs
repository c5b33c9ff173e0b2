//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in feedtimer-core, written against `embedded-hal` so any chip HAL
//! can supply the pins and buses:
//!
//! - Accelerometer (LIS3DH over I2C)
//! - Tone output (PWM duty cycle)
//! - Push buttons and switches (GPIO inputs)
//! - Pixel frame buffer for WS2812 rings

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod output;
pub mod sensor;
