pub mod buf;
pub mod consts;
#[macro_use]
pub mod macros;
pub mod util;
