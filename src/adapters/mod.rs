//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                         | Connects to              |
//! |------------|------------------------------------|--------------------------|
//! | `hardware` | KeyboardStatePort, UnderglowPort,  | a state source + LED bank|
//! |            | LedPort                            |                          |
//! | `log_sink` | EventSink                          | `log` facade             |
//! | `sim`      | KeyboardStatePort, UnderglowPort   | scripted host simulation |
//! |            | (`SimPwm`: embedded-hal PWM)       |                          |
//! | `time`     | —                                  | embassy-time clock       |

pub mod hardware;
pub mod log_sink;
pub mod sim;
pub mod time;
