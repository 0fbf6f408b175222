// Accelerometer tilt and integrated gyro yaw

use crate::drivers::imu::mpu6050::Motion6;
use core::f32::consts::PI;
use core::fmt;
use libm::{atan2f, atanf, sqrtf};

const RAD_TO_DEG: f32 = 180.0 / PI;

// LSB per deg/s at the +-250 deg/s power-on range
pub const GYRO_LSB_PER_DPS: f32 = 131.0;

/// Orientation estimate in degrees.
///
/// Pitch and roll are recomputed from every sample. Yaw is an open loop
/// integral of the z rate and drifts without bound.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

/// One serial telemetry record, rendered as `pitch,roll,yaw`.
///
/// Values are printed with two decimals. NaN prints `nan`, either infinity
/// prints `inf` and magnitudes beyond `OVF_LIMIT` print `ovf`, so the line
/// stays in the format serial plotters already parse. The line break is left
/// to the writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryLine(pub Attitude);

// largest f32 below u32::MAX, the widest value printed digit by digit
pub const OVF_LIMIT: f32 = 4_294_967_040.0;

fn write_value(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        f.write_str("inf")
    } else if value > OVF_LIMIT || value < -OVF_LIMIT {
        f.write_str("ovf")
    } else {
        write!(f, "{:.2}", value)
    }
}

impl fmt::Display for TelemetryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0.pitch)?;
        f.write_str(",")?;
        write_value(f, self.0.roll)?;
        f.write_str(",")?;
        write_value(f, self.0.yaw)
    }
}

// rotation about the forward axis
pub fn roll_deg(ay: i16, az: i16) -> f32 {
    atan2f(ay as f32, az as f32) * RAD_TO_DEG
}

// rotation about the lateral axis
// ay == az == 0 divides by zero: +-90 when ax != 0, NaN when ax == 0
pub fn pitch_deg(ax: i16, ay: i16, az: i16) -> f32 {
    // negate before widening to f32 so that ax == 0 stays +0.0
    let nax = -(ax as i32) as f32;
    let ay = ay as f32;
    let az = az as f32;
    atanf(nax / sqrtf(ay * ay + az * az)) * RAD_TO_DEG
}

// dt in seconds
pub fn integrate_yaw(yaw: f32, gz: i16, dt: f32) -> f32 {
    yaw + (gz as f32) / GYRO_LSB_PER_DPS * dt
}

/// Advance the estimate by one sample taken `elapsed` seconds after the
/// previous one.
pub fn advance(state: Attitude, sample: &Motion6, elapsed: f32) -> (Attitude, TelemetryLine) {
    let next = Attitude {
        pitch: pitch_deg(sample.ax, sample.ay, sample.az),
        roll: roll_deg(sample.ay, sample.az),
        yaw: integrate_yaw(state.yaw, sample.gz, elapsed),
    };
    (next, TelemetryLine(next))
}
