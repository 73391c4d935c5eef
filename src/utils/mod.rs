// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod time_format;

pub use time_format::{human_duration, iso_instant};
