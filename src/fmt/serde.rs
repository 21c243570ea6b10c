/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

They serialize and deserialize [`Instant`](crate::Instant) values as an
integer number of seconds or microseconds from the Unix epoch.

# Module hierarchy

The available helpers can be more quickly understood by looking at a fully
rendered tree of this module's hierarchy. Only the leaves of the tree are
usable with Serde's `with` attribute. For each leaf, the full path is spelled
out for easy copy & paste.

* [`instant`]
    * [`second`](self::instant::second)
        * [`kalends::fmt::serde::instant::second::required`](self::instant::second::required)
        * [`kalends::fmt::serde::instant::second::optional`](self::instant::second::optional)
    * [`microsecond`](self::instant::microsecond)
        * [`kalends::fmt::serde::instant::microsecond::required`](self::instant::microsecond::required)
        * [`kalends::fmt::serde::instant::microsecond::optional`](self::instant::microsecond::optional)

# Advice

These helpers are the only Serde support in this crate. A
[`DateTime`](crate::civil::DateTime) does not serialize at all: its renderings
are template driven and there is no parser to read any of them back. Convert
to an [`Instant`](crate::Instant) and pick a unit. An instant carries no
offset, so if the offset matters to the consumer, transmit its minutes as a
separate field.

# Example

This example shows how to deserialize an integer number of seconds since the
Unix epoch into an [`Instant`](crate::Instant). And the reverse operation for
serialization:

```
use kalends::Instant;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "kalends::fmt::serde::instant::second::required")]
    sighted: Instant,
}

let json = r#"{"sighted":1434052392}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.sighted, Instant::from_unix_second(1434052392));
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: optional support

And this example shows how to use an `Option<Instant>` instead of an
`Instant`. Note that in this case, we show how to roundtrip the number of
**microseconds** since the Unix epoch:

```
use kalends::Instant;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "kalends::fmt::serde::instant::microsecond::optional")]
    sighted: Option<Instant>,
}

let json = r#"{"sighted":1434052392543294}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.sighted, Some(Instant::from_unix_microsecond(1434052392_543294)));
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// Convenience routines for (de)serializing [`Instant`](crate::Instant) as
/// raw integer values.
pub mod instant {
    use serde::de;

    /// A generic visitor for `Option<Instant>`.
    struct OptionalVisitor<V>(V);

    impl<'de, V: de::Visitor<'de, Value = crate::Instant>> de::Visitor<'de>
        for OptionalVisitor<V>
    {
        type Value = Option<crate::Instant>;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str(
                "an integer number of seconds from the Unix epoch or `None`",
            )
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Option<crate::Instant>, D::Error> {
            de.deserialize_i64(self.0).map(Some)
        }

        #[inline]
        fn visit_none<E: de::Error>(
            self,
        ) -> Result<Option<crate::Instant>, E> {
            Ok(None)
        }
    }

    /// (De)serialize an integer number of seconds from the Unix epoch.
    pub mod second {
        use serde::de;

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = crate::Instant;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an integer number of seconds from the Unix epoch")
            }

            #[inline]
            fn visit_i8<E: de::Error>(
                self,
                v: i8,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u8<E: de::Error>(
                self,
                v: u8,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i16<E: de::Error>(
                self,
                v: i16,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u16<E: de::Error>(
                self,
                v: u16,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i32<E: de::Error>(
                self,
                v: i32,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u32<E: de::Error>(
                self,
                v: u32,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i64<E: de::Error>(
                self,
                v: i64,
            ) -> Result<crate::Instant, E> {
                Ok(crate::Instant::from_unix_second(v))
            }

            #[inline]
            fn visit_u64<E: de::Error>(
                self,
                v: u64,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got unsigned integer {v} seconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }

            #[inline]
            fn visit_i128<E: de::Error>(
                self,
                v: i128,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got signed integer {v} seconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }

            #[inline]
            fn visit_u128<E: de::Error>(
                self,
                v: u128,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got unsigned integer {v} seconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }
        }

        /// (De)serialize a required integer number of seconds from the Unix
        /// epoch.
        pub mod required {
            /// Serialize a required integer number of seconds since the Unix
            /// epoch.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                instant: &crate::Instant,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                se.serialize_i64(instant.as_unix_second())
            }

            /// Deserialize a required integer number of seconds since the
            /// Unix epoch.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<crate::Instant, D::Error> {
                de.deserialize_i64(super::Visitor)
            }
        }

        /// (De)serialize an optional integer number of seconds from the Unix
        /// epoch.
        pub mod optional {
            /// Serialize an optional integer number of seconds since the Unix
            /// epoch.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                instant: &Option<crate::Instant>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                match *instant {
                    None => se.serialize_none(),
                    Some(instant) => {
                        se.serialize_i64(instant.as_unix_second())
                    }
                }
            }

            /// Deserialize an optional integer number of seconds since the
            /// Unix epoch.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<crate::Instant>, D::Error> {
                de.deserialize_option(super::super::OptionalVisitor(
                    super::Visitor,
                ))
            }
        }
    }

    /// (De)serialize an integer number of microseconds from the Unix epoch.
    pub mod microsecond {
        use serde::de;

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = crate::Instant;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str(
                    "an integer number of microseconds from the Unix epoch",
                )
            }

            #[inline]
            fn visit_i8<E: de::Error>(
                self,
                v: i8,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u8<E: de::Error>(
                self,
                v: u8,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i16<E: de::Error>(
                self,
                v: i16,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u16<E: de::Error>(
                self,
                v: u16,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i32<E: de::Error>(
                self,
                v: i32,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_u32<E: de::Error>(
                self,
                v: u32,
            ) -> Result<crate::Instant, E> {
                self.visit_i64(i64::from(v))
            }

            #[inline]
            fn visit_i64<E: de::Error>(
                self,
                v: i64,
            ) -> Result<crate::Instant, E> {
                Ok(crate::Instant::from_unix_microsecond(v))
            }

            #[inline]
            fn visit_u64<E: de::Error>(
                self,
                v: u64,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got unsigned integer {v} microseconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }

            #[inline]
            fn visit_i128<E: de::Error>(
                self,
                v: i128,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got signed integer {v} microseconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }

            #[inline]
            fn visit_u128<E: de::Error>(
                self,
                v: u128,
            ) -> Result<crate::Instant, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(alloc::format!(
                        "got unsigned integer {v} microseconds, \
                         which is too big to fit in an `Instant`",
                    ))
                })?;
                self.visit_i64(v)
            }
        }

        /// (De)serialize a required integer number of microseconds from the
        /// Unix epoch.
        pub mod required {
            /// Serialize a required integer number of microseconds since the
            /// Unix epoch.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                instant: &crate::Instant,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                se.serialize_i64(instant.as_unix_microsecond())
            }

            /// Deserialize a required integer number of microseconds since
            /// the Unix epoch.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<crate::Instant, D::Error> {
                de.deserialize_i64(super::Visitor)
            }
        }

        /// (De)serialize an optional integer number of microseconds from the
        /// Unix epoch.
        pub mod optional {
            /// Serialize an optional integer number of microseconds since the
            /// Unix epoch.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                instant: &Option<crate::Instant>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                match *instant {
                    None => se.serialize_none(),
                    Some(instant) => {
                        se.serialize_i64(instant.as_unix_microsecond())
                    }
                }
            }

            /// Deserialize an optional integer number of microseconds since
            /// the Unix epoch.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<crate::Instant>, D::Error> {
                de.deserialize_option(super::super::OptionalVisitor(
                    super::Visitor,
                ))
            }
        }
    }
}
