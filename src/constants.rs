//! Policy constants for waterproofing roll quantities.
//!
//! Roll sizes are nominal (as sold). The coverage factor gives the usable part
//! of a roll once side and end overlaps are taken out.

/// Coverage of one membrane roll in m^2.
pub const ROLL_SURFACE_AREA: f64 = 5.0;

/// Coverage of one aluminium-faced flashing roll in m^2.
pub const ROLL_ALU_AREA: f64 = 6.0;

/// Length of one corner-strip (bande d'équerre) roll in m.
pub const ROLL_EQUERRE_LENGTH: f64 = 10.0;

/// Usable fraction of a membrane or flashing roll (10% overlap loss).
pub const COVERAGE_FACTOR: f64 = 0.9;

/// Multiplier applied to the linear total before dividing into corner-strip rolls.
pub const EQUERRE_LOSS_FACTOR: f64 = 1.1;

/// Developed (unfolded) width of the upstand flashing strip in m.
pub const UPSTAND_STRIP_WIDTH: f64 = 0.3;

/// Perimeter assumed for each skylight when its dimensions are not measured, in m.
pub const FIXED_SKYLIGHT_PERIMETER: f64 = 4.0;

/// Corner-strip widths (layer 1, layer 2) on an insulated support, in m.
///
/// NF DTU 43.1 requires a double corner strip on insulated terraces.
pub const ISOLATED_EQUERRE_WIDTHS: [f64; 2] = [0.25, 0.33];

/// Side length offered by default for a skylight, in m.
pub const DEFAULT_SKYLIGHT_SIDE: f64 = 1.0;
