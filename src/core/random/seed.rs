use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const AUTO: &str = "auto";

/// Seed of a random stream.
///
/// `Auto` asks for an unpredictable seed, for genuine Monte Carlo runs. It is
/// written as the string `"auto"` in configuration files; fixed seeds are
/// plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    Fixed(u64),
    #[default]
    Auto,
}

impl Seed {
    /// Turns `Auto` into a concrete seed drawn from the OS; `Fixed` is returned
    /// unchanged.
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Fixed(s) => s,
            Seed::Auto => rand::random::<u64>(),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Fixed(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Fixed(s) => write!(f, "{s}"),
            Seed::Auto => f.write_str(AUTO),
        }
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Seed::Fixed(s) => serializer.serialize_u64(*s),
            Seed::Auto => serializer.serialize_str(AUTO),
        }
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeedVisitor;

        impl Visitor<'_> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or \"auto\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Seed, E> {
                Ok(Seed::Fixed(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Seed, E> {
                u64::try_from(v)
                    .map(Seed::Fixed)
                    .map_err(|_| E::custom("seed must be non-negative"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Seed, E> {
                if v.eq_ignore_ascii_case(AUTO) {
                    Ok(Seed::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}

impl JsonSchema for Seed {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Seed".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "description": "PRNG seed: a non-negative integer, or \"auto\"",
            "oneOf": [
                { "type": "integer", "minimum": 0 },
                { "type": "string", "const": "auto" }
            ]
        })
    }
}
