// SPDX-License-Identifier: LGPL-3.0-only
//! Services shared by the jukebox skin and the application shell.

pub mod settings;

pub use settings::{JsonSettings, MemorySettings, SettingsStore};
