//! Sentinel-based link index for arena-backed nodes.
//!
//! Uses a reserved sentinel value (e.g. `u32::MAX`) instead of `Option<K>`
//! so node links stay one word wide.

/// A copyable index type with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use generic_collections::Key;
///
/// let key: u32 = 5;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the key as a `usize` arena slot.
    fn as_usize(self) -> usize;

    /// Creates a key from an arena slot.
    ///
    /// Returns `None` if the slot does not fit, or collides with the sentinel.
    fn from_usize(val: usize) -> Option<Self>;

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Option<Self> {
                    <$ty>::try_from(val).ok().filter(|k| k.is_some())
                }
            }
        )*
    };
}

// `as_usize` is a plain cast, so only types no wider than `usize` qualify.
const _: () = assert!(usize::BITS >= u32::BITS);

impl_key_for_unsigned!(u16, u32, usize);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_key_sentinel {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert!(<$ty>::NONE.is_none());
                    assert!(!<$ty>::NONE.is_some());
                    assert!((0 as $ty).is_some());
                    assert!((<$ty>::MAX - 1).is_some());
                }
            )*
        };
    }

    test_key_sentinel!(
        u16 => u16_sentinel,
        u32 => u32_sentinel,
        usize => usize_sentinel
    );

    #[test]
    fn from_usize_rejects_sentinel_and_overflow() {
        assert_eq!(u32::from_usize(7), Some(7));
        assert_eq!(u32::from_usize(u32::MAX as usize), None);
        assert_eq!(u16::from_usize(70_000), None);
        assert_eq!(usize::from_usize(usize::MAX), None);
    }

    #[test]
    fn slot_conversion_round_trips_at_the_top() {
        let top = u16::MAX - 1;
        assert_eq!(u16::from_usize(top.as_usize()), Some(top));

        let top = u32::MAX - 1;
        assert_eq!(top.as_usize(), 4_294_967_294);
        assert_eq!(u32::from_usize(top.as_usize()), Some(top));

        let top = usize::MAX - 1;
        assert_eq!(usize::from_usize(top.as_usize()), Some(top));
    }

    #[test]
    fn get_maps_sentinel_to_none() {
        assert_eq!(3u32.get(), Some(3));
        assert_eq!(u32::NONE.get(), None);
    }
}
