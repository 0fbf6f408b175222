#![cfg_attr(not(test), no_std)]

//! gyrocell - MPU-6050 tilt and heading over serial
//!
//! Sensor driver and estimation code, kept free of board specifics so it can
//! be unit tested on the host. The STM32F4 firmware lives in
//! `src/bin/gyrocell`.

pub mod drivers {
    pub mod imu {
        pub mod mpu6050;
        pub mod mpu6050_constants;
    }
}

pub mod estimation {
    pub mod clock;
    pub mod tilt;
}

pub mod tracker;

#[cfg(test)]
mod mock;
