// MPU-6050 Registers and Configs

#[repr(u8)]
pub enum RegAddr {
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    AccelXoutH = 0x3B,
    PwrMgmt1 = 0x6B,
    WhoAmI = 0x75,
}

// PwrMgmt1 register:
// Bits:     |       7      |   6   |   5   |     4    |     3    |   2:0  |
// Function: | DEVICE_RESET | SLEEP | CYCLE | reserved | TEMP_DIS | CLKSEL |
#[repr(u8)]
#[allow(dead_code)]
pub enum PwrMgmt1Bits {
    ClkSel = 0x07 << 0,
    TempDis = 0x01 << 3,
    Cycle = 0x01 << 5,
    Sleep = 0x01 << 6,
    DeviceReset = 0x01 << 7,
}

// GyroConfig register:
// Bits:     |   7   |   6   |   5   |  4:3   |   2:0    |
// Function: | XG_ST | YG_ST | ZG_ST | FS_SEL | reserved |
#[repr(u8)]
#[allow(dead_code)]
pub enum GyroConfigBits {
    FSSel = 0x03 << 3,
    ZSelfTest = 0x01 << 5,
    YSelfTest = 0x01 << 6,
    XSelfTest = 0x01 << 7,
}

// AccelConfig register:
// Bits:     |   7   |   6   |   5   |   4:3   |   2:0    |
// Function: | XA_ST | YA_ST | ZA_ST | AFS_SEL | reserved |
#[repr(u8)]
#[allow(dead_code)]
pub enum AccelConfigBits {
    AFSSel = 0x03 << 3,
    ZSelfTest = 0x01 << 5,
    YSelfTest = 0x01 << 6,
    XSelfTest = 0x01 << 7,
}

// WhoAmI register:
// Bits:     |    7     |   6:1    |    0     |
// Function: | reserved | WHO_AM_I | reserved |
pub const WHO_AM_I_MASK: u8 = 0x3F << 1;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(dead_code)]
pub enum ClockSource {
    Internal = 0x00,
    PllXGyro = 0x01,
    PllYGyro = 0x02,
    PllZGyro = 0x03,
    PllExt32k = 0x04,
    PllExt19M = 0x05,
    Stop = 0x07,
}

// Gyro full scale range in degrees per second
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GyroFullScaleSel {
    Dps250 = 0x00,
    Dps500 = 0x01,
    Dps1000 = 0x02,
    Dps2000 = 0x03,
}

// Accel full scale range in G's (plus or minus)
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AccelFullScaleSel {
    Gpm2 = 0x00,
    Gpm4 = 0x01,
    Gpm8 = 0x02,
    Gpm16 = 0x03,
}

// Constants
pub const MPU6050_DEFAULT_ADDR: u8 = 0x68; // AD0 low
pub const MPU6050_ALT_ADDR: u8 = 0x69; // AD0 high
pub const MPU6050_DEVICE_ID: u8 = 0x34;
pub const MOTION_NUM_BYTES: usize = 14;

pub const ACCEL_SENSITIVITY_SCALE_GPM2: f32 = 16.384;
pub const ACCEL_SENSITIVITY_SCALE_GPM4: f32 = 8.192;
pub const ACCEL_SENSITIVITY_SCALE_GPM8: f32 = 4.096;
pub const ACCEL_SENSITIVITY_SCALE_GPM16: f32 = 2.048;

pub const GYRO_SENSITIVITY_SCALE_DPS250: f32 = 131.0;
pub const GYRO_SENSITIVITY_SCALE_DPS500: f32 = 65.5;
pub const GYRO_SENSITIVITY_SCALE_DPS1000: f32 = 32.8;
pub const GYRO_SENSITIVITY_SCALE_DPS2000: f32 = 16.4;

pub const TEMP_SENSITIVITY: f32 = 340.0;
pub const TEMP_OFFSET_C: f32 = 36.53;
