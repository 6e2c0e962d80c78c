mod clock_time;
pub use clock_time::*;
mod window;
pub use window::*;
