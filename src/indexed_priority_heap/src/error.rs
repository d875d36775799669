//! Error types
use core::fmt;

/// The macro to define [`ErrorKind`].
macro_rules! define_error_kind {
    (
        $( #[$meta:meta] )*
        pub enum ErrorKind {
            $(
                $( #[$vmeta:meta] )*
                $vname:ident = $vd:expr => $msg:literal
            ),* $(,)*
        }
    ) => {
        $( #[$meta] )*
        pub enum ErrorKind {
            $(
                $( #[$vmeta] )*
                $vname = $vd
            ),*
        }

        impl ErrorKind {
            /// Get the short name of the error kind.
            ///
            /// # Examples
            ///
            /// ```
            /// use indexed_priority_heap::ErrorKind;
            /// assert_eq!(ErrorKind::Underflow.as_str(), "Underflow");
            /// ```
            pub fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$vname => stringify!($vname),
                    )*
                }
            }

            /// Get a human-readable description of the error kind.
            pub fn message(self) -> &'static str {
                match self {
                    $(
                        Self::$vname => $msg,
                    )*
                }
            }
        }

        impl fmt::Debug for ErrorKind {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Display for ErrorKind {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.message())
            }
        }
    };
}

define_error_kind! {
    /// All kinds of errors that the operations of
    /// [`IndexedPriorityHeap`](crate::IndexedPriorityHeap) can report.
    ///
    /// Every operation-specific error type converts into this type.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[repr(i8)]
    pub enum ErrorKind {
        /// The heap already holds as many elements as its maximum capacity
        /// allows. The element was not inserted.
        CapacityExceeded = -1 => "the heap has reached its maximum capacity",
        /// The heap is empty.
        Underflow = -2 => "the heap is empty",
        /// The element is not in the heap. This indicates a bug in the caller.
        NotQueued = -3 => "the element is not in the heap",
        /// The element is already in the heap. This indicates a bug in the
        /// caller.
        AlreadyQueued = -4 => "the element is already in the heap",
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}

macro_rules! define_error {
    (
        mod $mod_name:ident {}
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $(
                $( #[$vmeta:meta] )*
                $vname:ident
            ),* $(,)*
        }
    ) => {
        $( #[$meta] )*
        ///
        /// See [`ErrorKind`] for all error kinds and generic descriptions.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i8)]
        $vis enum $name {
            $(
                $( #[$vmeta] )*
                // Use the same discriminants as `ErrorKind`
                $vname = ErrorKind::$vname as i8
            ),*
        }

        impl $name {
            /// Get the [`ErrorKind`] corresponding to this error.
            #[inline]
            pub fn kind(self) -> ErrorKind {
                ErrorKind::from(self)
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(&self.kind(), f)
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.kind(), f)
            }
        }

        #[cfg(feature = "std")]
        impl std::error::Error for $name {}

        impl From<$name> for ErrorKind {
            #[inline]
            fn from(x: $name) -> Self {
                match x {
                    $(
                        $name::$vname => Self::$vname,
                    )*
                }
            }
        }

        #[cfg(test)]
        mod $mod_name {
            use super::*;

            #[test]
            fn to_error_kind() {
                $(
                    assert_eq!(ErrorKind::$vname, ErrorKind::from($name::$vname));
                    assert_eq!(ErrorKind::$vname as i8, $name::$vname as i8);
                )*
            }

            #[test]
            fn display_matches_kind() {
                $(
                    assert_eq!(
                        std::format!("{}", $name::$vname),
                        ErrorKind::$vname.message(),
                    );
                    assert_eq!(
                        std::format!("{:?}", $name::$vname),
                        stringify!($vname),
                    );
                )*
            }
        }
    };
}

define_error! {
    mod push_error {}
    /// Error type for [`IndexedPriorityHeap::push`] and
    /// [`IndexedPriorityHeap::insert_or_update`].
    ///
    /// [`IndexedPriorityHeap::push`]: crate::IndexedPriorityHeap::push
    /// [`IndexedPriorityHeap::insert_or_update`]: crate::IndexedPriorityHeap::insert_or_update
    pub enum PushError {
        /// The heap is full.
        CapacityExceeded,
        /// The element's recorded position indicates it's already in the heap.
        AlreadyQueued,
    }
}

define_error! {
    mod pop_error {}
    /// Error type for [`IndexedPriorityHeap::pop`] and
    /// [`IndexedPriorityHeap::peek`].
    ///
    /// [`IndexedPriorityHeap::pop`]: crate::IndexedPriorityHeap::pop
    /// [`IndexedPriorityHeap::peek`]: crate::IndexedPriorityHeap::peek
    pub enum PopError {
        /// The heap is empty.
        Underflow,
    }
}

define_error! {
    mod update_error {}
    /// Error type for [`IndexedPriorityHeap::update`] and
    /// [`IndexedPriorityHeap::update_at`].
    ///
    /// [`IndexedPriorityHeap::update`]: crate::IndexedPriorityHeap::update
    /// [`IndexedPriorityHeap::update_at`]: crate::IndexedPriorityHeap::update_at
    pub enum UpdateError {
        /// The element (or position) does not refer to a queued element.
        NotQueued,
    }
}

define_error! {
    mod remove_error {}
    /// Error type for [`IndexedPriorityHeap::remove`] and
    /// [`IndexedPriorityHeap::remove_at`].
    ///
    /// [`IndexedPriorityHeap::remove`]: crate::IndexedPriorityHeap::remove
    /// [`IndexedPriorityHeap::remove_at`]: crate::IndexedPriorityHeap::remove_at
    pub enum RemoveError {
        /// The element (or position) does not refer to a queued element.
        NotQueued,
    }
}
