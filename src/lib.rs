pub mod calc;
pub mod constants;
pub mod describe;
pub mod geom;
pub mod io;
pub mod parse;
pub mod report;

// Prelude
pub use calc::{
    CornerStripLine, QuantityInput, QuantityResult, RollConfig, Support, compute, compute_with,
};
pub use describe::FormulaSheet;
pub use geom::skylight::SkylightSpec;
pub use geom::terrace::Terrace;
pub use parse::RawInput;
pub use report::BillOfMaterials;
