//! # Wire Durations
//!
//! Conversion between [`chrono::TimeDelta`] and the `(seconds, nanos)` pair
//! used on the wire. A wire duration is valid when:
//!
//! - `|seconds| <= 315,576,000,000` (10,000 years)
//! - `|nanos| < 1,000,000,000`
//! - `nanos` is zero or has the same sign as `seconds`
//!
//! An absent wire duration is not an error: [`duration_from_wire`] returns
//! `Ok(None)` so callers can tell "not set" from "set to zero".

use crate::config::{MAX_DURATION_SECONDS, NANOS_PER_SECOND};
use chrono::TimeDelta;
use eyre::{ensure, eyre, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WireDuration {
    pub seconds: i64,
    pub nanos: i32,
}

impl WireDuration {
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (-MAX_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&self.seconds),
            "duration seconds {} out of range",
            self.seconds
        );
        ensure!(
            self.nanos > -NANOS_PER_SECOND && self.nanos < NANOS_PER_SECOND,
            "duration nanos {} out of range",
            self.nanos
        );
        ensure!(
            !((self.seconds < 0 && self.nanos > 0) || (self.seconds > 0 && self.nanos < 0)),
            "duration has seconds and nanos with different signs: {}s {}ns",
            self.seconds,
            self.nanos
        );
        Ok(())
    }
}

/// Converts a wire duration, treating `None` as "not set".
pub fn duration_from_wire(wire: Option<&WireDuration>) -> Result<Option<TimeDelta>> {
    let Some(wire) = wire else {
        return Ok(None);
    };
    wire.validate()?;

    let secs = TimeDelta::try_seconds(wire.seconds)
        .ok_or_else(|| eyre!("duration seconds {} out of range", wire.seconds))?;
    let nanos = TimeDelta::nanoseconds(i64::from(wire.nanos));
    secs.checked_add(&nanos)
        .map(Some)
        .ok_or_else(|| eyre!("duration {}s {}ns out of range", wire.seconds, wire.nanos))
}

/// Splits a duration into whole seconds and a same-signed nanosecond rest.
pub fn duration_to_wire(d: TimeDelta) -> WireDuration {
    let seconds = d.num_seconds();
    let rest = d - TimeDelta::seconds(seconds);
    let nanos = rest.num_nanoseconds().unwrap_or(0) as i32;
    WireDuration { seconds, nanos }
}
