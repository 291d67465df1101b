pub mod logging;
pub mod period;
