mod stub;

use crate::*;

// There is exactly one backend in this crate. The richer platforms'
// enumeration backends live with the consumer, never here, so a binary can
// carry either the real capability or this shim but not both.
use self::stub::PlatformSupportStub as PlatformSupport;

/// Opaque, address-sized token for a queryable network interface.
///
/// On this platform no interface handle is ever produced, but any raw value
/// must be accepted at the API boundary, including garbage from a caller
/// compiled against a richer platform's headers. The token is never
/// dereferenced.
#[derive(Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
pub struct InterfaceHandle(usize);

impl InterfaceHandle {
    /// The canonical "no interface" sentinel.
    pub const ABSENT: InterfaceHandle = InterfaceHandle(0);

    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }
    pub fn as_raw(&self) -> usize {
        self.0
    }
    pub fn is_absent(&self) -> bool {
        self.0 == 0
    }
}

// Must stay pointer-sized so a native handle passes through unmodified
static_assertions::assert_eq_size!(InterfaceHandle, *const ());

/// Enumerate the network interfaces visible through this capability.
///
/// Always empty here: "no interfaces" is indistinguishable from "query not
/// supported", which is the documented contract for this platform.
/// `Vec::new` does not allocate, so this is pure and side-effect-free.
pub fn enumerate_interfaces() -> Vec<InterfaceHandle> {
    Vec::new()
}

/// Link-layer (BSD) name of an interface. Always absent here.
pub fn interface_bsd_name(_interface: InterfaceHandle) -> Option<String> {
    None
}

/// Interface type of an interface. Always absent here.
pub fn interface_type(_interface: InterfaceHandle) -> Option<String> {
    None
}

/// Localized display name of an interface. Always absent here.
pub fn interface_display_name(_interface: InterfaceHandle) -> Option<String> {
    None
}

struct NetworkInterfacesInner {
    valid: bool,
    handles: Vec<InterfaceHandle>,
}

/// Registry shaped like the richer platforms' interface registries, so caller
/// code written against those runs unmodified and observes zero interfaces.
#[derive(Clone)]
pub struct NetworkInterfaces {
    inner: Arc<Mutex<NetworkInterfacesInner>>,
}

impl fmt::Debug for NetworkInterfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("NetworkInterfaces")
            .field("valid", &inner.valid)
            .field("handles", &inner.handles)
            .finish()
    }
}

impl Default for NetworkInterfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkInterfaces {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(NetworkInterfacesInner {
                valid: false,
                handles: Vec::new(),
            })),
        }
    }

    pub fn is_valid(&self) -> bool {
        let inner = self.inner.lock();
        inner.valid
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();

        inner.handles.clear();
        inner.valid = false;
    }

    // returns Ok(false) if refresh had no changes, Ok(true) if changes were present
    pub fn refresh(&self) -> EyreResult<bool> {
        let mut last_handles = Vec::<InterfaceHandle>::new();
        let mut platform_support = PlatformSupport::new()?;
        platform_support.get_interfaces(&mut last_handles)?;

        let mut inner = self.inner.lock();
        core::mem::swap(&mut inner.handles, &mut last_handles);
        inner.valid = true;

        Ok(last_handles != inner.handles)
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock();
        inner.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        let inner = self.inner.lock();
        inner.handles.is_empty()
    }

    pub fn handles(&self) -> Vec<InterfaceHandle> {
        let inner = self.inner.lock();
        inner.handles.clone()
    }
}
