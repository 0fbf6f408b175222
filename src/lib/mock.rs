//! Mock peripherals for host tests

use crate::drivers::imu::mpu6050::Motion6;
use crate::tracker::MotionSensor;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write {
        addr: u8,
        data: Vec<u8>,
    },
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockI2cError;

/// Register-file model of a single I2C device.
///
/// Writes of `[reg, data..]` store to consecutive registers, write-reads of
/// `[reg]` return consecutive registers. Any other address NACKs.
#[derive(Debug)]
pub struct MockI2c {
    address: u8,
    registers: [u8; 128],
    transactions: Vec<I2cTransaction>,
    failing: bool,
}

impl MockI2c {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; 128],
            transactions: Vec::new(),
            failing: false,
        }
    }

    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    pub fn set_registers(&mut self, start: u8, values: &[u8]) {
        let start = start as usize;
        self.registers[start..start + values.len()].copy_from_slice(values);
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    // every transfer errors while set
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    fn acknowledges(&self, addr: u8) -> bool {
        !self.failing && addr == self.address
    }
}

impl Write for MockI2c {
    type Error = MockI2cError;

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: bytes.to_vec(),
        });
        if !self.acknowledges(addr) {
            return Err(MockI2cError);
        }
        if let Some((reg, data)) = bytes.split_first() {
            self.set_registers(*reg, data);
        }
        Ok(())
    }
}

impl WriteRead for MockI2c {
    type Error = MockI2cError;

    fn write_read(&mut self, addr: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: bytes.to_vec(),
            read_len: buffer.len(),
        });
        if !self.acknowledges(addr) {
            return Err(MockI2cError);
        }
        let start = bytes.first().copied().unwrap_or(0) as usize;
        buffer.copy_from_slice(&self.registers[start..start + buffer.len()]);
        Ok(())
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct MockDelay {
    calls: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[u32] {
        &self.calls
    }
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

/// Scripted sensor, replays samples then reads zeros.
#[derive(Debug)]
pub struct MockSensor {
    pub initialized: bool,
    connected: bool,
    samples: VecDeque<Motion6>,
    reads: Rc<Cell<usize>>,
}

impl MockSensor {
    pub fn connected(samples: impl IntoIterator<Item = Motion6>) -> Self {
        Self {
            initialized: false,
            connected: true,
            samples: samples.into_iter().collect(),
            reads: Rc::default(),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            initialized: false,
            connected: false,
            samples: VecDeque::new(),
            reads: Rc::default(),
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn push(&mut self, sample: Motion6) {
        self.samples.push_back(sample);
    }

    // shared counter of motion6 calls, readable while the sensor is borrowed
    pub fn reads(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }
}

impl MotionSensor for MockSensor {
    fn initialize(&mut self) {
        self.initialized = true;
    }

    fn test_connection(&mut self) -> bool {
        self.connected
    }

    fn motion6(&mut self) -> Motion6 {
        self.reads.set(self.reads.get() + 1);
        self.samples.pop_front().unwrap_or_default()
    }
}
