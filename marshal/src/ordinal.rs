//! Ordinal identity for enumerated parameter values.

use std::fmt::Debug;

/// A fieldless enum whose wire identity is its declaration position.
///
/// Reordering the constants of an enum marshalled with the public policy
/// changes the meaning of every token already handed out. Append only.
pub trait Ordinal: Copy + Eq + Debug + 'static {
    /// All constants in declaration order.
    const VALUES: &'static [Self];

    /// Returns the zero-based declaration position.
    fn ordinal(self) -> usize;

    /// Looks up the constant at `ordinal`.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VALUES.get(ordinal).copied()
    }
}

/// Declares a fieldless enum together with its [`Ordinal`] table.
///
/// ```
/// marshal::ordinal_enum! {
///     /// Navigation targets.
///     pub enum Page { Home, Settings }
/// }
///
/// use marshal::Ordinal;
/// assert_eq!(Page::Settings.ordinal(), 1);
/// assert_eq!(Page::VALUES, &[Page::Home, Page::Settings]);
/// ```
#[macro_export]
macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::Ordinal for $name {
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::ordinal_enum! {
        enum Color {
            Red,
            Green,
            Blue,
        }
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        assert_eq!(Color::Red.ordinal(), 0);
        assert_eq!(Color::Green.ordinal(), 1);
        assert_eq!(Color::Blue.ordinal(), 2);
    }

    #[test]
    fn values_table_matches_ordinals() {
        for (idx, color) in Color::VALUES.iter().enumerate() {
            assert_eq!(color.ordinal(), idx);
        }
    }

    #[test]
    fn from_ordinal_bounds() {
        assert_eq!(Color::from_ordinal(2), Some(Color::Blue));
        assert_eq!(Color::from_ordinal(3), None);
    }
}
