//! Request and response models
//!
//! Wire shapes for the Budgets (AWS JSON, PascalCase) and Social Messaging
//! (REST-JSON, camelCase) operations.
//!
//! Nested sub-objects are assembled with builders whose `build()` returns
//! `None` when nothing was set, so a parent never carries an empty child.

/// Declare a string enum with its wire names, `FromStr` and `Display`
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire names of every variant
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Wire name of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let normalized = s.trim().replace('-', "_");
                $(
                    if normalized.eq_ignore_ascii_case($wire) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!(
                    "unknown {} '{}', expected one of: {}",
                    stringify!($name),
                    s,
                    Self::VALUES.join(", ")
                ))
            }
        }
    };
}

pub mod budgets;
pub mod epoch;
pub mod social;

#[cfg(test)]
mod tests;
