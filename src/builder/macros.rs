//! Macros for declaring state identities.

/// Generate a `State` implementation for a plain enum.
///
/// The enum also derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`,
/// `Serialize` and `Deserialize`; each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use pendulum::core::State;
/// use pendulum::state_enum;
///
/// state_enum! {
///     pub enum Gait {
///         Walk,
///         Run,
///     }
/// }
///
/// assert_eq!(Gait::Run.name(), "Run");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
