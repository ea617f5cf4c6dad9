use serde::{Deserialize, Serialize};

/// Minimum battery voltage before the UI refuses uploads, per chemistry
pub const LIPO_LOW_VOLTAGE: f64 = 3.2;
pub const PRIMARY_LOW_VOLTAGE: f64 = 2.2;

/// Telemetry snapshot from `/get_status_info` and `/set_time`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusInfo {
    pub cp_version: String,
    pub board_id: String,
    pub pcb_version: String,
    pub dl_commit: String,
    /// Device time as epoch seconds; locale rendering is a shell concern
    pub dev_time: i64,
    /// Battery voltage in volts
    pub battery: f64,
    /// True when a rechargeable LiPo cell is fitted
    pub lipo: bool,
}

impl StatusInfo {
    /// Low-battery policy: 3.2V threshold with a LiPo cell, 2.2V with
    /// primary cells.
    pub fn battery_low(&self) -> bool {
        let threshold = if self.lipo {
            LIPO_LOW_VOLTAGE
        } else {
            PRIMARY_LOW_VOLTAGE
        };
        self.battery < threshold
    }
}

/// Body for `/set_time`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetTimeRequest {
    pub ts: i64,
}

/// Epoch seconds of local wall-clock time, as the device expects.
/// `tz_offset_minutes` follows the browser convention (positive west of UTC).
pub fn local_epoch_seconds(epoch_millis: i64, tz_offset_minutes: i64) -> i64 {
    (epoch_millis - tz_offset_minutes * 60_000) / 1000
}
