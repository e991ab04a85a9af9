use super::*;

/// Platform support for targets without the interface enumeration capability.
///
/// Mirrors the constructor/`get_interfaces` seam of the enumeration backends
/// on richer platforms, but holds no state, performs no system calls, and
/// cannot fail.
pub struct PlatformSupportStub {}

impl PlatformSupportStub {
    pub fn new() -> EyreResult<Self> {
        Ok(PlatformSupportStub {})
    }

    pub fn get_interfaces(&mut self, interfaces: &mut Vec<InterfaceHandle>) -> EyreResult<()> {
        debug!("interface enumeration not supported on this platform, reporting none");
        interfaces.clear();
        Ok(())
    }
}
