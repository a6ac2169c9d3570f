//! Deep merge used to fold configurator fragments together.
//!
//! Rules:
//! - an absent (`None`) value in the later fragment never overwrites;
//! - scalar leaves from the later fragment win;
//! - structs merge field by field;
//! - vectors merge index-wise: element `i` of the later fragment merges into
//!   element `i` of the earlier one and extra elements are appended.

use crate::core::StackingMode;

/// Deep-merges a later configuration fragment into `self`.
pub trait Merge {
    fn merge_from(&mut self, later: Self);
}

macro_rules! merge_by_replace {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::api::merge::Merge for $ty {
                fn merge_from(&mut self, later: Self) {
                    *self = later;
                }
            }
        )*
    };
}

merge_by_replace!(bool, f64, i32, usize, String, StackingMode);

/// Implements [`Merge`] for a struct by merging each listed field.
macro_rules! merge_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::api::merge::Merge for $ty {
            fn merge_from(&mut self, later: Self) {
                $( $crate::api::merge::Merge::merge_from(&mut self.$field, later.$field); )*
            }
        }
    };
}

pub(crate) use {merge_by_replace, merge_fields};

impl<T: Merge> Merge for Option<T> {
    fn merge_from(&mut self, later: Self) {
        let Some(later) = later else {
            return;
        };
        match self {
            Some(current) => current.merge_from(later),
            None => *self = Some(later),
        }
    }
}

impl<T: Merge> Merge for Vec<T> {
    fn merge_from(&mut self, later: Self) {
        for (index, item) in later.into_iter().enumerate() {
            match self.get_mut(index) {
                Some(current) => current.merge_from(item),
                None => self.push(item),
            }
        }
    }
}

/// Merges `later` into a copy of `base`, leaving both inputs untouched.
#[must_use]
pub fn merged<T: Merge + Clone>(base: &T, later: T) -> T {
    let mut result = base.clone();
    result.merge_from(later);
    result
}
