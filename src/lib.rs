// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f64->u32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u64->f64 in histogram scaling
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f64->u64 where we know sign is positive
#![allow(clippy::module_name_repetitions)] // HttpMetricsSource in sources::metrics reads fine

//! Status display for a LoRaWAN gateway's 128x64 monochrome OLED.
//!
//! Every tick the [`scheduler`] renders the next page of a fixed rotation onto a
//! [`canvas::Canvas`] and pushes it to a [`display`] backend. A page without
//! data skips its turn and the next page renders in the same tick.
//!
//! # Pages
//!
//! | Page | Source | Skips |
//! |------|--------|-------|
//! | Network | `getifaddrs`, container bridge list | never |
//! | Stats | `sysinfo`, `vcgencmd` / thermal zone | never |
//! | Traffic | HTTP metrics endpoint | no data, zero max, zero buckets |
//!
//! # Layout
//!
//! ```text
//! Network / Stats               Traffic
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │██████ NETWORK ███████│      │^ LAST 36m, MAX:20    │
//! │eth0: 192.168.1.10    │      ││                     │
//! │wlan0: 10.0.0.4       │      ││ █  █                │
//! │                      │      ││ █ ██ █  █       t   │
//! └──────────────────────┘      │└────────────────────>│
//!                               └──────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: layout constants and runtime [`config::Settings`]
//! - [`canvas`]: 1-bpp frame buffer implementing `DrawTarget`
//! - [`histogram`]: bar layout for the traffic page
//! - [`screens`]: the three pages
//! - [`sources`]: OS and HTTP collaborators behind traits
//! - [`scheduler`]: rotation, skip handling, tick loop
//! - [`display`]: SSD1306, simulator window and ASCII backends

pub mod canvas;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod histogram;
pub mod pages;
pub mod scheduler;
pub mod screens;
pub mod sources;
pub mod styles;
pub mod widgets;
