//! The field registry.
//!
//! The original codec located struct fields through runtime reflection. Here
//! every participating type carries an explicit, compile-time registry
//! instead: [`Record`] exposes an ordered list of external-name candidates
//! plus accessors that classify each field as a scalar leaf, a nested record,
//! or a lazily allocated optional record. The [`impl_record!`](crate::impl_record)
//! macro writes the registration boilerplate.
//!
//! Fields left out of the registry are invisible to the codec on both
//! directions, which is how non-public fields are expressed.
//!
//! [`resolve`] is the path resolver: it walks a registry with the segments of
//! a split external key and hands back the target scalar slot, materializing
//! `Option` records along the way.

use crate::{Options, Scalar};

/// A type whose fields participate in the codec.
///
/// Implementations supply a fixed, ordered field list. Names are external-name
/// candidates (what the naming policy is applied to), not necessarily the Rust
/// field identifiers; declaration order drives encode order.
///
/// Usually implemented via [`impl_record!`](crate::impl_record):
///
/// ```rust
/// use envcodec::impl_record;
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl_record! {
///     Server {
///         "Host" => scalar host,
///         "Port" => scalar port,
///     }
/// }
/// ```
pub trait Record {
    /// Registered field names, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Shared view of the field registered under `name`.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Mutable view of the field registered under `name`.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

/// Shared view of one registered field, used by the encoder.
pub enum FieldRef<'a> {
    /// A leaf: scalar, sequence, or optional scalar.
    Scalar(&'a dyn Scalar),
    /// A nested record the traversal recurses into.
    Record(&'a dyn Record),
    /// An optional nested record; `None` emits nothing.
    OptRecord(Option<&'a dyn Record>),
}

/// Mutable view of one registered field, used by the path resolver.
pub enum FieldMut<'a> {
    /// A leaf: scalar, sequence, or optional scalar.
    Scalar(&'a mut dyn Scalar),
    /// A nested record the traversal descends into.
    Record(&'a mut dyn Record),
    /// An optional nested record, materialized on first descent.
    OptRecord(&'a mut dyn RecordSlot),
}

/// A lazily initialized owned slot holding a nested record.
///
/// Implemented for `Option<R>`; the resolver calls [`materialize`] the first
/// time a path traverses the slot, allocating the default instance in place.
/// The allocation is a required side effect of resolution, even when a later
/// path segment then fails to match.
///
/// [`materialize`]: RecordSlot::materialize
pub trait RecordSlot {
    /// Returns the contained record, allocating a default one if unset.
    fn materialize(&mut self) -> &mut dyn Record;
}

impl<R: Record + Default> RecordSlot for Option<R> {
    fn materialize(&mut self) -> &mut dyn Record {
        self.get_or_insert_with(R::default)
    }
}

/// Walks `root` along `path`, returning the scalar slot the final segment
/// names.
///
/// Each segment must equal the mapper-transformed name of exactly one
/// registered field (first match in declaration order wins; comparison is
/// exact, with no case folding beyond what the policy performs). `None` means
/// the entry resolves nowhere and the caller drops it: an unknown segment, a
/// scalar met before the final segment, or a record met at the final segment.
pub(crate) fn resolve<'a>(
    root: &'a mut dyn Record,
    path: &[&str],
    options: &Options,
) -> Option<&'a mut dyn Scalar> {
    let mut current = root;
    let mut segments = path.iter().peekable();

    while let Some(segment) = segments.next() {
        let name = current
            .field_names()
            .iter()
            .find(|name| (options.mapper)(name) == *segment)
            .copied()?;
        let last = segments.peek().is_none();

        let this = current;
        match this.field_mut(name)? {
            FieldMut::Scalar(scalar) => {
                return if last { Some(scalar) } else { None };
            }
            FieldMut::Record(record) => {
                if last {
                    return None;
                }
                current = record;
            }
            FieldMut::OptRecord(slot) => {
                // Allocate before checking whether the rest of the path
                // resolves; the original codec does the same.
                let record = slot.materialize();
                if last {
                    return None;
                }
                current = record;
            }
        }
    }

    None
}
