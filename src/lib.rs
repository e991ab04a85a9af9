mod interface_shim;

#[cfg(not(target_arch = "wasm32"))]
pub mod ffi;

pub use interface_shim::*;

pub use std::borrow::ToOwned;
pub use std::fmt;
pub use std::string::{String, ToString};
pub use std::sync::Arc;
pub use std::vec::Vec;

pub use eyre::{bail, eyre, Report as EyreReport, Result as EyreResult, WrapErr};


cfg_if! {
    if #[cfg(feature = "tracing")] {
        use tracing::*;
    } else {
        use log::*;
    }
}
use cfg_if::*;
use parking_lot::*;

// For iOS tests
#[no_mangle]
pub extern "C" fn main_rs() {}
