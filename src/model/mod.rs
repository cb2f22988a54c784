pub use campaign::*;
pub use impression::*;
pub use stats::*;
pub use timestamp::*;

mod campaign;
mod impression;
mod stats;
mod timestamp;
