/// Declares a closed OCPP token set.
///
/// Every variant maps to exactly one wire token; the generated `FromStr` rejects anything else
/// with a `SchemaViolation` naming the enumeration.
macro_rules! ocpp_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $wire:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const WIRE_TYPE: &'static str = $wire;

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::ModelError::unknown_token($wire, other)),
                }
            }
        }
    };
}
