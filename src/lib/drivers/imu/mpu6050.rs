// MPU-6050 IMU driver
// Register map: https://invensense.tdk.com/wp-content/uploads/2015/02/MPU-6000-Register-Map1.pdf
// Power-up sequence matches the i2cdevlib MPU6050 Arduino library

pub use crate::drivers::imu::mpu6050_constants::*;

use embedded_hal::blocking::i2c::{Write, WriteRead};

// Error codes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    I2cError,
    WrongID,
}

/// One raw six-axis reading, in sensor counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Motion6 {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
    pub gx: i16,
    pub gy: i16,
    pub gz: i16,
}

#[derive(Debug)]
struct FssConfig {
    accel: AccelFullScaleSel,
    gyro: GyroFullScaleSel,
}

#[derive(Debug)]
pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
    raw_temp: i16,
    fss_config: FssConfig,
}

impl<I2C> Mpu6050<I2C>
where
    I2C: Write + WriteRead,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            raw_temp: 0,
            fss_config: FssConfig {
                accel: AccelFullScaleSel::Gpm2,
                gyro: GyroFullScaleSel::Dps250,
            },
        }
    }

    // PLL clock on the X gyro, +-250 deg/s, +-2 g, awake
    pub fn init(&mut self) -> Result<(), ErrorCode> {
        self.set_clock_source(ClockSource::PllXGyro)?;
        self.config_gyro(GyroFullScaleSel::Dps250)?;
        self.config_accel(AccelFullScaleSel::Gpm2)?;
        self.sleep(false)?;
        Ok(())
    }

    pub fn test_connection(&mut self) -> bool {
        self.check_id().is_ok()
    }

    // WHO_AM_I bits 6:1, 0x34 on a genuine part regardless of AD0
    pub fn device_id(&mut self) -> Result<u8, ErrorCode> {
        let whoami = self.read_byte(RegAddr::WhoAmI as u8)?;
        Ok((whoami & WHO_AM_I_MASK) >> 1)
    }

    pub fn read_motion6(&mut self) -> Result<Motion6, ErrorCode> {
        let mut buf: [u8; MOTION_NUM_BYTES] = [0; MOTION_NUM_BYTES];
        self.read_bytes(RegAddr::AccelXoutH as u8, &mut buf[..])?;
        self.raw_temp = (((buf[6] as u16) << 8) | buf[7] as u16) as i16;
        Ok(Motion6 {
            ax: (((buf[0] as u16) << 8) | buf[1] as u16) as i16,
            ay: (((buf[2] as u16) << 8) | buf[3] as u16) as i16,
            az: (((buf[4] as u16) << 8) | buf[5] as u16) as i16,
            gx: (((buf[8] as u16) << 8) | buf[9] as u16) as i16,
            gy: (((buf[10] as u16) << 8) | buf[11] as u16) as i16,
            gz: (((buf[12] as u16) << 8) | buf[13] as u16) as i16,
        })
    }

    // Unchecked read: a failed transfer reads as all zeros
    pub fn motion6(&mut self) -> Motion6 {
        self.read_motion6().unwrap_or_default()
    }

    // linear acceleration in milli G's
    pub fn get_accel_mg(&self, raw: i16) -> f32 {
        match self.fss_config.accel {
            AccelFullScaleSel::Gpm2 => (raw as f32) / ACCEL_SENSITIVITY_SCALE_GPM2,
            AccelFullScaleSel::Gpm4 => (raw as f32) / ACCEL_SENSITIVITY_SCALE_GPM4,
            AccelFullScaleSel::Gpm8 => (raw as f32) / ACCEL_SENSITIVITY_SCALE_GPM8,
            AccelFullScaleSel::Gpm16 => (raw as f32) / ACCEL_SENSITIVITY_SCALE_GPM16,
        }
    }

    // angular velocity in degrees per second
    pub fn get_gyro_dps(&self, raw: i16) -> f32 {
        match self.fss_config.gyro {
            GyroFullScaleSel::Dps250 => (raw as f32) / GYRO_SENSITIVITY_SCALE_DPS250,
            GyroFullScaleSel::Dps500 => (raw as f32) / GYRO_SENSITIVITY_SCALE_DPS500,
            GyroFullScaleSel::Dps1000 => (raw as f32) / GYRO_SENSITIVITY_SCALE_DPS1000,
            GyroFullScaleSel::Dps2000 => (raw as f32) / GYRO_SENSITIVITY_SCALE_DPS2000,
        }
    }

    // die temperature from the last motion read, in degrees C
    pub fn get_temperature_c(&self) -> f32 {
        (self.raw_temp as f32) / TEMP_SENSITIVITY + TEMP_OFFSET_C
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn check_id(&mut self) -> Result<(), ErrorCode> {
        if self.device_id()? != MPU6050_DEVICE_ID {
            Err(ErrorCode::WrongID)
        } else {
            Ok(())
        }
    }

    fn set_clock_source(&mut self, source: ClockSource) -> Result<(), ErrorCode> {
        let mut reg = self.read_byte(RegAddr::PwrMgmt1 as u8)?;

        // Configure CLKSEL
        reg &= !(PwrMgmt1Bits::ClkSel as u8);
        reg |= source as u8;

        self.write_byte(RegAddr::PwrMgmt1 as u8, reg)
    }

    fn sleep(&mut self, sleep: bool) -> Result<(), ErrorCode> {
        let mut reg = self.read_byte(RegAddr::PwrMgmt1 as u8)?;

        // Set SLEEP bit
        if sleep {
            reg |= PwrMgmt1Bits::Sleep as u8;
        } else {
            reg &= !(PwrMgmt1Bits::Sleep as u8);
        }

        self.write_byte(RegAddr::PwrMgmt1 as u8, reg)
    }

    fn config_gyro(&mut self, fss_config: GyroFullScaleSel) -> Result<(), ErrorCode> {
        let mut config = self.read_byte(RegAddr::GyroConfig as u8)?;

        // Configure FS
        config &= !(GyroConfigBits::FSSel as u8);
        config |= (fss_config as u8) << 3;

        self.write_byte(RegAddr::GyroConfig as u8, config)?;
        self.fss_config.gyro = fss_config;
        Ok(())
    }

    fn config_accel(&mut self, fss_config: AccelFullScaleSel) -> Result<(), ErrorCode> {
        let mut config = self.read_byte(RegAddr::AccelConfig as u8)?;

        // Configure FS
        config &= !(AccelConfigBits::AFSSel as u8);
        config |= (fss_config as u8) << 3;

        self.write_byte(RegAddr::AccelConfig as u8, config)?;
        self.fss_config.accel = fss_config;
        Ok(())
    }

    fn write_byte(&mut self, reg: u8, data: u8) -> Result<(), ErrorCode> {
        self.i2c
            .write(self.address, &[reg, data])
            .map_err(|_| ErrorCode::I2cError)
    }

    fn read_byte(&mut self, reg: u8) -> Result<u8, ErrorCode> {
        let mut data = [0u8];
        self.read_bytes(reg, &mut data[..])?;
        Ok(data[0])
    }

    fn read_bytes(&mut self, reg: u8, data: &mut [u8]) -> Result<(), ErrorCode> {
        self.i2c
            .write_read(self.address, &[reg], data)
            .map_err(|_| ErrorCode::I2cError)
    }
}
