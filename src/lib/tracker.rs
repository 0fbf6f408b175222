// Sample -> estimate -> print driver, independent of the board

use crate::drivers::imu::mpu6050::{Motion6, Mpu6050};
use crate::estimation::clock::Stopwatch;
use crate::estimation::tilt::{self, Attitude};
use core::fmt::Write;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

pub const LOOP_PERIOD_MS: u32 = 50;
pub const CONNECTION_FAILED_MSG: &str = "MPU6050 connection failed!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    ConnectionFailed,
}

/// Failed setup, handing the sensor back so the caller can retry.
#[derive(Debug)]
pub struct SetupError<S> {
    pub code: ErrorCode,
    pub sensor: S,
}

/// Six-axis sensor as seen by the tracker.
pub trait MotionSensor {
    // power up and configure, status is not reported
    fn initialize(&mut self);

    fn test_connection(&mut self) -> bool;

    // unchecked read
    fn motion6(&mut self) -> Motion6;
}

impl<I2C> MotionSensor for Mpu6050<I2C>
where
    I2C: i2c::Write + i2c::WriteRead,
{
    fn initialize(&mut self) {
        let _ = self.init();
    }

    fn test_connection(&mut self) -> bool {
        Mpu6050::test_connection(self)
    }

    fn motion6(&mut self) -> Motion6 {
        Mpu6050::motion6(self)
    }
}

pub struct Tracker<S> {
    sensor: S,
    attitude: Attitude,
    stopwatch: Stopwatch,
}

impl<S> Tracker<S>
where
    S: MotionSensor,
{
    // Brings the sensor up and verifies it answers. On failure the diagnostic
    // line is the only output and the sensor comes back in the error.
    pub fn setup<W: Write>(
        mut sensor: S,
        serial: &mut W,
        now_ms: u32,
    ) -> Result<Self, SetupError<S>> {
        sensor.initialize();
        if !sensor.test_connection() {
            let _ = writeln!(serial, "{}", CONNECTION_FAILED_MSG);
            return Err(SetupError {
                code: ErrorCode::ConnectionFailed,
                sensor,
            });
        }
        Ok(Self {
            sensor,
            attitude: Attitude::default(),
            stopwatch: Stopwatch::new(now_ms),
        })
    }

    // one loop body: sample, estimate, print
    // the clock is read after the sample is taken
    pub fn step<W, C>(&mut self, serial: &mut W, now_ms: C) -> Attitude
    where
        W: Write,
        C: FnOnce() -> u32,
    {
        let sample = self.sensor.motion6();
        let dt = self.stopwatch.lap(now_ms());
        let (attitude, line) = tilt::advance(self.attitude, &sample, dt);
        self.attitude = attitude;
        let _ = writeln!(serial, "{}", line);
        attitude
    }

    pub fn pause<D: DelayMs<u32>>(&self, delay: &mut D) {
        delay.delay_ms(LOOP_PERIOD_MS);
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn release(self) -> S {
        self.sensor
    }
}
