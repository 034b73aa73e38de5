pub mod clock;
pub mod console;
pub mod led;
pub mod sim;
pub mod spi;

pub use clock::Clock;
pub use console::Console;
pub use console::LineBuf;
pub use led::StatusLed;
pub use spi::SlaveRx;
