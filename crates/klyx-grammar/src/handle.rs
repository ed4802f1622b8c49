//! Opaque grammar handle.

use std::ffi::c_void;
use std::fmt;

/// Address of a grammar descriptor owned by a dynamically loaded library.
///
/// The handle is never dereferenced or freed here. Zero is the absence value,
/// produced when a grammar factory returns null.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LanguageHandle(usize);

impl LanguageHandle {
    pub const ABSENT: Self = Self(0);

    pub fn from_ptr(ptr: *const c_void) -> Self {
        Self(ptr as usize)
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0 as *const c_void
    }

    pub fn is_absent(self) -> bool {
        self.0 == 0
    }

    /// Raw address, for callers that store handles as plain integers.
    pub fn addr(self) -> usize {
        self.0
    }

    /// The handle as the JVM's `long`. 32-bit addresses are zero-extended.
    pub fn as_i64(self) -> i64 {
        self.0 as u64 as i64
    }
}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            f.write_str("LanguageHandle(absent)")
        } else {
            write!(f, "LanguageHandle({:#x})", self.0)
        }
    }
}

impl fmt::Display for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
