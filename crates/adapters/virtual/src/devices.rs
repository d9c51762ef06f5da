//! Virtual legacy hardware: sprinkler and garage opener.

mod garage;
mod sprinkler;

pub use garage::VirtualGarageOpener;
pub use sprinkler::VirtualSprinkler;
