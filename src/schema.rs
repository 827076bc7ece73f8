//! Schema data model: wire type tags and field descriptors.
//!
//! A [`Schema`] is an ordered list of [`FieldDescriptor`]s describing one
//! struct type's shape on the wire. Schemas are plain data with `const`
//! constructors, so each struct type defines its schema once as a `static`
//! and reuses it for every encode/decode call (see [`crate::hadoopfs`]).
//!
//! Field order matters only for write-time ordering; reads are driven by the
//! field id in each wire header and are order-independent.

use crate::error::{Error, Result};

/// Thrift binary protocol type tags, one byte each on the wire.
///
/// The discriminant values are fixed by the protocol and must not change:
/// they are what existing Thrift producers and consumers emit and expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TType {
    Stop = 0,
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl TType {
    /// Parse a wire tag byte. Tags outside the protocol's fixed set are a
    /// malformed-stream error: a value of unknown shape cannot be skipped.
    pub fn from_wire(tag: u8) -> Result<TType> {
        Ok(match tag {
            0 => TType::Stop,
            1 => TType::Void,
            2 => TType::Bool,
            3 => TType::Byte,
            4 => TType::Double,
            6 => TType::I16,
            8 => TType::I32,
            10 => TType::I64,
            11 => TType::String,
            12 => TType::Struct,
            13 => TType::Map,
            14 => TType::Set,
            15 => TType::List,
            other => return Err(Error::InvalidTypeTag(other)),
        })
    }
}

/// The declared kind of a field's value.
///
/// Unlike [`TType`], which is a flat wire tag, a `FieldKind` carries the
/// recursive element and struct information the codec needs to decode a
/// value: a list knows its element kind, a nested struct knows its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    I16,
    I64,
    String,
    List(&'static FieldKind),
    Struct(&'static Schema),
}

impl FieldKind {
    /// The wire tag this kind encodes as.
    pub const fn wire_type(&self) -> TType {
        match self {
            FieldKind::Bool => TType::Bool,
            FieldKind::I16 => TType::I16,
            FieldKind::I64 => TType::I64,
            FieldKind::String => TType::String,
            FieldKind::List(_) => TType::List,
            FieldKind::Struct(_) => TType::Struct,
        }
    }
}

/// One struct member: a stable small-integer wire id, a name, and a kind.
///
/// The id identifies the field on the wire independent of its name or
/// position, which is what makes forward/backward compatible evolution work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: i16,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ordered field descriptors for one struct type.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl Schema {
    /// Look up a field by its wire id.
    pub fn field_by_id(&self, id: i16) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Look up a field by name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
