//! Typed identifiers.
//!
//! `CustomerId`s are handed out in arrival order, so comparing two ids also
//! compares arrival order.  `PoolId`s index directly into the runner's pool
//! `Vec`.

use std::fmt;

/// Newtype id over an unsigned integer, displayed as `<label>#<n>`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident($inner:ty), $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Position in a `Vec` indexed by this id.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Sequence number of a customer, assigned at spawn time.
    CustomerId(u64), "customer"
}

typed_id! {
    /// Index of a teller pool within one run.
    PoolId(u16), "pool"
}

impl CustomerId {
    /// The id following `self`.
    #[inline]
    pub fn next(self) -> CustomerId {
        CustomerId(self.0 + 1)
    }
}
