//! Link-time stand-ins for the macOS-only SystemConfiguration interface
//! enumeration symbols.
//!
//! A lower-level network watching component references these symbols
//! unconditionally across all Apple targets, but the real API does not exist
//! on iOS or the iOS simulator. Exporting constant NULL-returning bodies
//! satisfies the linker there, and a caller observes the same thing as a
//! legitimate "no interfaces found" answer.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use libc::c_void;
use std::ptr;

#[repr(C)]
pub struct __CFArray {
    _private: [u8; 0],
}
/// CoreFoundation array reference. Opaque here; never dereferenced.
pub type CFArrayRef = *const __CFArray;

#[repr(C)]
pub struct __CFString {
    _private: [u8; 0],
}
/// CoreFoundation string reference. Opaque here; never dereferenced.
pub type CFStringRef = *const __CFString;

/// The interface reference as the consumer's headers declare it. Accepted
/// with any value, including NULL and garbage, and never dereferenced.
pub type SCNetworkInterfaceRef = *const c_void;

// Constant bodies behind the exports. Kept portable so the host test suite
// can exercise them without an iOS toolchain.

pub(crate) fn copy_all_interfaces() -> CFArrayRef {
    ptr::null()
}

pub(crate) fn get_bsd_name(_interface: SCNetworkInterfaceRef) -> CFStringRef {
    ptr::null()
}

pub(crate) fn get_interface_type(_interface: SCNetworkInterfaceRef) -> CFStringRef {
    ptr::null()
}

pub(crate) fn get_localized_display_name(_interface: SCNetworkInterfaceRef) -> CFStringRef {
    ptr::null()
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "ios")] {
        // TARGET_OS_IOS and TARGET_OS_SIMULATOR both map to target_os = "ios"
        // in Rust; the simulator differs only in target_abi.

        /// Stub: no network interfaces are visible through this API on iOS.
        #[no_mangle]
        pub extern "C" fn SCNetworkInterfaceCopyAll() -> CFArrayRef {
            copy_all_interfaces()
        }

        /// Stub: always NULL.
        #[no_mangle]
        pub extern "C" fn SCNetworkInterfaceGetBSDName(
            interface: SCNetworkInterfaceRef,
        ) -> CFStringRef {
            get_bsd_name(interface)
        }

        /// Stub: always NULL.
        #[no_mangle]
        pub extern "C" fn SCNetworkInterfaceGetInterfaceType(
            interface: SCNetworkInterfaceRef,
        ) -> CFStringRef {
            get_interface_type(interface)
        }

        /// Stub: always NULL.
        #[no_mangle]
        pub extern "C" fn SCNetworkInterfaceGetLocalizedDisplayName(
            interface: SCNetworkInterfaceRef,
        ) -> CFStringRef {
            get_localized_display_name(interface)
        }
    }
}
