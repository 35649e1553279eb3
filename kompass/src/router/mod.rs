pub mod esg;
pub mod fundamentals;
pub mod macros;
pub mod performance;
pub mod profile;
pub mod screen;
pub mod snapshot;

pub mod util;
