/// Declares a list's sort-key enum together with its kebab-case string
/// forms, `SortKey`, `Display` and `FromStr` impls.
///
/// # Example
/// ```rust,ignore
/// sort_keys! {
///     pub enum CollectionSort {
///         NameAsc => "name-asc",
///         NameDesc => "name-desc",
///     }
/// }
/// ```
#[macro_export]
macro_rules! sort_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::list::SortKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::list::SortKey::as_str(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::list::parse_sort_key(s)
            }
        }
    };
}

/// Declares a list's filter-key enum. Each key names the `FilterValue`
/// variant it accepts, which the reducer checks in debug builds.
#[macro_export]
macro_rules! filter_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal as $shape:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::list::FilterKey for $name {
            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn accepts(self, value: &$crate::list::FilterValue) -> bool {
                match self {
                    $(Self::$variant => matches!(value, $crate::list::FilterValue::$shape(..))),+
                }
            }
        }
    };
}
