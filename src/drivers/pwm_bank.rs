//! PWM-backed LED bank.
//!
//! Drives a fixed set of LED channels through `embedded-hal` PWM outputs,
//! one [`SetDutyCycle`] per LED. Brightness maps directly onto duty-cycle
//! percent.

use embedded_hal::pwm::{Error as _, ErrorKind, SetDutyCycle};

use crate::app::ports::LedPort;
use crate::brightness::Brightness;
use crate::error::DeviceError;

/// errno-style codes reported in [`DeviceError::ChannelWrite`].
const EIO: i32 = -5;
const EINVAL: i32 = -22;

pub struct PwmLedBank<P, const N: usize> {
    channels: [P; N],
    ready: bool,
}

impl<P: SetDutyCycle, const N: usize> PwmLedBank<P, N> {
    /// Take ownership of `channels` and switch them all off. The bank
    /// reports not-ready if that first write fails on any channel.
    pub fn new(mut channels: [P; N]) -> Self {
        let ready = N > 0 && channels.iter_mut().all(|ch| ch.set_duty_cycle_fully_off().is_ok());
        Self { channels, ready }
    }

    /// Borrow the PWM output behind `channel`.
    pub fn channel(&self, channel: usize) -> Option<&P> {
        self.channels.get(channel)
    }
}

impl<P: SetDutyCycle, const N: usize> LedPort for PwmLedBank<P, N> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn channel_count(&self) -> usize {
        N
    }

    fn set_brightness(&mut self, channel: usize, level: Brightness) -> Result<(), DeviceError> {
        let Some(pwm) = self.channels.get_mut(channel) else {
            return Err(DeviceError::ChannelWrite { channel, code: EINVAL });
        };
        pwm.set_duty_cycle_percent(level.percent())
            .map_err(|e| DeviceError::ChannelWrite {
                channel,
                code: match e.kind() {
                    ErrorKind::Other => EIO,
                    _ => EINVAL,
                },
            })
    }
}
