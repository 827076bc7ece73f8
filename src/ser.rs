//! Thrift binary protocol serializer.
//!
//! The [`Serializer`] is generic over any `W: std::io::Write`, enabling both
//! in-memory serialization (`to_bytes`) and streaming serialization
//! (`to_writer`).
//!
//! ## Wire format summary
//! - All integers are big-endian (network byte order)
//! - Struct begin/end emit no bytes: a struct is its fields followed by the
//!   one-byte STOP marker
//! - Field header: type tag (1 byte) + field id (2 bytes, signed)
//! - Bool: 1 byte, 0 or 1
//! - I16/I64: 2/8 bytes, two's complement
//! - Strings: 4-byte signed length prefix + UTF-8 bytes, no padding
//! - Lists: element type tag (1 byte) + 4-byte signed count + elements
//!
//! Only fields that are present in the [`StructValue`] are emitted; absent
//! fields are omitted entirely, never written as a default. Fields are
//! written in schema order, so output is deterministic for a given schema
//! and present-field set.

use crate::error::{Error, Result};
use crate::schema::{FieldKind, TType};
use crate::value::{StructValue, Value};
use std::io::Write;

// ── Public entry points ────────────────────────────────────────────────────

/// Encode `value` into a freshly allocated `Vec<u8>`.
pub fn to_bytes(value: &StructValue) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::new());
    ser.write_struct(value)?;
    Ok(ser.into_writer())
}

/// Encode `value`, writing directly into `writer`.
///
/// Unlike [`to_bytes`], this never allocates an intermediate buffer. Useful
/// when writing to a `TcpStream`, `File`, or any other `Write` sink. The
/// serializer does not own or close the writer.
pub fn to_writer<W: Write>(mut writer: W, value: &StructValue) -> Result<()> {
    let mut ser = Serializer::new(&mut writer);
    ser.write_struct(value)
}

// ── Serializer ─────────────────────────────────────────────────────────────

/// The Thrift binary protocol serializer. Generic over any `W: Write`.
///
/// Obtain one via [`to_bytes`] / [`to_writer`], or construct directly to
/// write several structs back to back into one sink.
pub struct Serializer<W: Write> {
    writer: W,
}

impl<W: Write> Serializer<W> {
    /// Create a new serializer that writes into `writer`.
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    /// Consume the serializer and return the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    // ── Internal helpers ───────────────────────────────────────────────────

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| Error::Io(e.to_string()))
    }

    fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_all(&[v])
    }

    fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// Length-prefixed bytes: 4-byte signed length + data, no padding.
    fn write_binary(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > i32::MAX as usize {
            return Err(Error::LengthOverflow(bytes.len()));
        }
        self.write_i32(bytes.len() as i32)?;
        self.write_all(bytes)
    }

    fn write_field_header(&mut self, ttype: TType, id: i16) -> Result<()> {
        self.write_u8(ttype as u8)?;
        self.write_i16(id)
    }

    // ── Struct encoding ────────────────────────────────────────────────────

    /// Encode one struct: each present field in schema order as
    /// `header + value`, then the STOP marker. Struct begin/end and field
    /// end are zero-byte boundaries in the binary protocol.
    pub fn write_struct(&mut self, value: &StructValue) -> Result<()> {
        for field in value.schema().fields {
            let Some(v) = value.get(field.name) else {
                continue;
            };
            self.write_field_header(field.kind.wire_type(), field.id)?;
            self.write_value(&field.kind, v)?;
        }
        self.write_u8(TType::Stop as u8)
    }

    fn write_value(&mut self, kind: &FieldKind, value: &Value) -> Result<()> {
        match (kind, value) {
            (FieldKind::Bool, Value::Bool(v)) => self.write_u8(*v as u8),
            (FieldKind::I16, Value::I16(v)) => self.write_i16(*v),
            (FieldKind::I64, Value::I64(v)) => self.write_i64(*v),
            (FieldKind::String, Value::String(v)) => self.write_binary(v.as_bytes()),
            (FieldKind::List(elem), Value::List(items)) => {
                if items.len() > i32::MAX as usize {
                    return Err(Error::LengthOverflow(items.len()));
                }
                self.write_u8(elem.wire_type() as u8)?;
                self.write_i32(items.len() as i32)?;
                for item in items {
                    self.write_value(elem, item)?;
                }
                Ok(())
            }
            (FieldKind::Struct(schema), Value::Struct(nested)) => {
                if nested.schema() != *schema {
                    return Err(Error::SchemaMismatch {
                        expected: schema.name,
                        got: nested.name(),
                    });
                }
                self.write_struct(nested)
            }
            (kind, value) => Err(Error::KindMismatch {
                expected: kind.wire_type(),
                got: value.wire_type(),
            }),
        }
    }
}
