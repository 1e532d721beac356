pub mod config;
pub mod input;
pub mod quantity;
pub mod result;

pub use config::RollConfig;
pub use input::{QuantityInput, Support};
pub use quantity::{compute, compute_with};
pub use result::{CornerStripLine, QuantityResult};
