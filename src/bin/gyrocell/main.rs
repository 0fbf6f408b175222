#![no_main]
#![no_std]

mod config {
    pub mod sys_config;
}

#[rtic::app(device = stm32f4xx_hal::pac, peripherals = true)]
mod app {
    use crate::config::sys_config;
    use cortex_m::asm;
    use gyrocell::drivers::imu::mpu6050;
    use gyrocell::tracker::{self, Tracker};
    use panic_write::PanicHandler;
    use stm32f4xx_hal::{
        gpio::{PB8, PB9},
        i2c::{I2c, Mode as i2cMode},
        pac::{I2C1, TIM5, USART2},
        prelude::*,
        serial::{Config, Serial, Tx},
        timer::DelayMs,
    };
    use systick_monotonic::Systick;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        tx: core::pin::Pin<PanicHandler<Tx<USART2>>>,
        tracker: Tracker<mpu6050::Mpu6050<I2c<I2C1, (PB8, PB9)>>>,
        delay: DelayMs<TIM5>,
    }

    // 1 kHz, ticks are milliseconds
    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<1000>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        // configure clocks
        let rcc = ctx.device.RCC.constrain();
        let mono = Systick::new(ctx.core.SYST, sys_config::SYSCLK_MHZ * 1_000_000);
        let clocks = rcc.cfgr.sysclk(sys_config::SYSCLK_MHZ.MHz()).freeze();

        // set up uart tx
        let gpioa = ctx.device.GPIOA.split();
        let tx_pin = gpioa.pa2.into_alternate();
        let serial = Serial::tx(
            ctx.device.USART2,
            tx_pin,
            Config::default()
                .baudrate(sys_config::SERIAL_BAUD.bps())
                .wordlength_8()
                .parity_none(),
            &clocks,
        )
        .unwrap();
        let mut tx = PanicHandler::new(serial);

        // configure I2C
        let gpiob = ctx.device.GPIOB.split();
        let scl = gpiob.pb8;
        let sda = gpiob.pb9;
        let i2c = I2c::new(
            ctx.device.I2C1,
            (scl, sda),
            i2cMode::Standard {
                frequency: sys_config::I2C_FREQUENCY_KHZ.kHz(),
            },
            &clocks,
        );

        let delay = ctx.device.TIM5.delay_ms(&clocks);

        // set up MPU-6050, the monotonic starts from zero once init returns
        let imu = mpu6050::Mpu6050::new(i2c, sys_config::MPU6050_ADDRESS);
        let tracker = match Tracker::setup(imu, &mut *tx, 0) {
            Ok(tracker) => tracker,
            Err(tracker::SetupError {
                code: tracker::ErrorCode::ConnectionFailed,
                ..
            }) => loop {
                asm::wfi();
            },
        };

        (
            Shared {},
            Local { tx, tracker, delay },
            init::Monotonics(mono),
        )
    }

    #[idle(local = [tx, tracker, delay])]
    fn idle(ctx: idle::Context) -> ! {
        loop {
            // timestamp taken after the sensor read
            ctx.local
                .tracker
                .step(&mut **ctx.local.tx, || monotonics::now().ticks() as u32);
            ctx.local.tracker.pause(ctx.local.delay);
        }
    }
}
