//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's secure random facility.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same public surface,
//! allowing higher-level code to remain fully portable.
//!
//! Unlike a seeding-only helper, the functions here report failure instead
//! of panicking: an exhausted or misbehaving kernel entropy facility is
//! surfaced to the caller as an error, because this crate must never
//! substitute a weaker source when the secure one is unavailable.
//!
//! Current capabilities:
//! - cryptographically secure randomness

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
