pub mod analysis;
pub mod blueprint;
pub mod bom;
pub mod dimensions;
pub mod materials;
pub mod palette;
pub mod playground;

pub use analysis::*;
pub use blueprint::*;
pub use bom::*;
pub use dimensions::*;
pub use materials::*;
pub use palette::*;
pub use playground::*;
