use gyrocell::drivers::imu::mpu6050::MPU6050_DEFAULT_ADDR;

pub const SYSCLK_MHZ: u32 = 48;

pub const SERIAL_BAUD: u32 = 9600;

pub const I2C_FREQUENCY_KHZ: u32 = 100;
pub const MPU6050_ADDRESS: u8 = MPU6050_DEFAULT_ADDR;
