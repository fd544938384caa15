//! Declarative registration macros.
//!
//! [`impl_record!`](crate::impl_record) writes the [`Record`](crate::Record)
//! boilerplate: an ordered name list plus shared and mutable accessors, one
//! entry per registered field. [`text_scalar!`](crate::text_scalar) wires a
//! [`FromText`](crate::FromText) type up as a [`Scalar`](crate::Scalar) leaf.

/// Implements [`Record`](crate::Record) for a struct from an ordered field
/// list.
///
/// Each entry is `"ExternalName" => kind field`, where `kind` is one of:
///
/// - `scalar`: a leaf (scalar, sequence, or optional scalar)
/// - `record`: a nested record
/// - `opt_record`: an `Option` of a nested record, allocated on first use
///
/// The external name is the candidate handed to the naming policy; it need
/// not match the Rust field identifier. Struct fields that are not listed do
/// not participate in the codec at all.
///
/// # Examples
///
/// ```rust
/// use envcodec::impl_record;
///
/// #[derive(Default)]
/// struct Database {
///     url: String,
///     pool: u32,
/// }
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
///     database: Database,
///     replica: Option<Database>,
///     session: u64, // unregistered: invisible to the codec
/// }
///
/// impl_record! {
///     Database {
///         "Url" => scalar url,
///         "Pool" => scalar pool,
///     }
/// }
///
/// impl_record! {
///     Config {
///         "Name" => scalar name,
///         "Database" => record database,
///         "Replica" => opt_record replica,
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($name:literal => $kind:ident $field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn field_names(&self) -> &'static [&'static str] {
                &[$($name),*]
            }

            fn field(&self, name: &str) -> Option<$crate::FieldRef<'_>> {
                match name {
                    $($name => Some($crate::impl_record!(@ref $kind self.$field)),)*
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<$crate::FieldMut<'_>> {
                match name {
                    $($name => Some($crate::impl_record!(@mut $kind self.$field)),)*
                    _ => None,
                }
            }
        }
    };

    (@ref scalar $field:expr) => {
        $crate::FieldRef::Scalar(&$field)
    };
    (@ref record $field:expr) => {
        $crate::FieldRef::Record(&$field)
    };
    (@ref opt_record $field:expr) => {
        $crate::FieldRef::OptRecord($field.as_ref().map(|r| r as &dyn $crate::Record))
    };

    (@mut scalar $field:expr) => {
        $crate::FieldMut::Scalar(&mut $field)
    };
    (@mut record $field:expr) => {
        $crate::FieldMut::Record(&mut $field)
    };
    (@mut opt_record $field:expr) => {
        $crate::FieldMut::OptRecord(&mut $field)
    };
}

/// Wires a [`FromText`](crate::FromText) + [`Display`](std::fmt::Display)
/// type up as a [`Scalar`](crate::Scalar) leaf.
///
/// Decoding goes through the type's own `from_text`, bypassing every built-in
/// rule; encoding uses `Display`. Works through `Option` indirection, since
/// `Option<T>` delegates to `T`'s impl after materializing a default.
///
/// # Examples
///
/// ```rust
/// use envcodec::{text_scalar, FromText, Options, Scalar};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Port(u16);
///
/// impl FromText for Port {
///     fn from_text(&mut self, text: &str) {
///         self.0 = text.trim_start_matches(':').parse().unwrap_or_default();
///     }
/// }
///
/// impl std::fmt::Display for Port {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, ":{}", self.0)
///     }
/// }
///
/// text_scalar!(Port);
///
/// let mut port = Port::default();
/// port.decode_text(":8080", &Options::new());
/// assert_eq!(port, Port(8080));
/// ```
#[macro_export]
macro_rules! text_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Scalar for $ty {
            fn decode_text(&mut self, text: &str, _options: &$crate::Options) {
                $crate::FromText::from_text(self, text);
            }

            fn encode_text(&self, _options: &$crate::Options) -> Option<String> {
                Some(::std::string::ToString::to_string(self))
            }
        }
    )*};
}
