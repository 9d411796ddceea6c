/*
saver.rs

Copyright 2025 Hervé Quatremain

This file is part of Kidcomputer.

Kidcomputer is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kidcomputer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kidcomputer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Serialization helpers and persistent files.

pub mod highscores;

/// Serialize and deserialize [`std::time::Instant`] objects with Serde.
///
/// An [`std::time::Instant`] cannot be serialized as such. The time elapsed since the instant
/// is stored instead, and the instant is rebuilt from the current time.
pub mod instant {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::time::{Duration, Instant};

    /// Serialize an [`std::time::Instant`] object.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration: Duration = instant.elapsed();
        duration.serialize(serializer)
    }

    /// Deserialize an [`std::time::Instant`] object.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: Duration = Duration::deserialize(deserializer)?;
        let now: Instant = Instant::now();
        let instant: Instant = now
            .checked_sub(duration)
            .ok_or_else(|| Error::custom("Cannot compute the session start time"))?;
        Ok(instant)
    }
}
