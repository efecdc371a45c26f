//! Dense index types for the identifier spaces.
//!
//! Instance files use string identifiers; [`Model`](crate::Model) interns
//! each space into a dense index so solver state can live in flat vectors.

macro_rules! impl_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from its dense index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index as u32)
            }

            /// Returns the dense index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

impl_id!(
    /// Index of an employee in the instance roster.
    EmployeeId
);
impl_id!(
    /// Index of a desk in the instance roster.
    DeskId
);
impl_id!(
    /// Index of a day in the planning sequence.
    DayId
);
impl_id!(
    /// Index of a zone roster.
    ZoneId
);
impl_id!(
    /// Index of a group roster.
    GroupId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let desk = DeskId::new(7);
        assert_eq!(desk.index(), 7);
        assert_eq!(desk, DeskId::new(7));
        assert_ne!(desk, DeskId::new(8));
    }

    #[test]
    fn ids_order_by_index() {
        assert!(DayId::new(0) < DayId::new(3));
    }
}
