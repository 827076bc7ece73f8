//! Thrift binary protocol deserializer.
//!
//! Decoding is id-driven and permissive: the wire is self-describing enough
//! (every field header carries a type tag and a field id) that the decoder
//! can consume fields it does not recognize. A field whose id is not in the
//! schema, or whose wire type disagrees with the schema's declared type for
//! that id, is skipped without error; its bytes are consumed according to
//! the wire type. This is the forward/backward compatibility contract of
//! the protocol, so mismatches drop data rather than fail, and changing it
//! would break interop with existing producers and consumers.
//!
//! Decoding fails only on malformed or truncated input: running out of
//! bytes, a type tag outside the protocol's fixed set, a negative length
//! prefix, invalid UTF-8 in a string, or nesting past [`MAX_DEPTH`].

use crate::error::{Error, Result};
use crate::schema::{FieldKind, Schema, TType};
use crate::value::{StructValue, Value};
use tracing::trace;

/// Maximum nesting depth for structs and collections, applied to both
/// decoded values and skipped ones. Bounds stack use on adversarial input.
pub const MAX_DEPTH: usize = 64;

/// Decode one struct of the given schema from `input`.
///
/// Fields never encountered on the wire remain absent in the result.
pub fn from_bytes(input: &[u8], schema: &'static Schema) -> Result<StructValue> {
    let mut de = Deserializer::new(input);
    de.read_struct(schema)
}

/// Decode one struct, also returning the remaining unconsumed bytes.
///
/// Useful when several structs are laid out back to back in one buffer.
pub fn from_bytes_partial<'de>(
    input: &'de [u8],
    schema: &'static Schema,
) -> Result<(StructValue, &'de [u8])> {
    let mut de = Deserializer::new(input);
    let value = de.read_struct(schema)?;
    Ok((value, de.remaining()))
}

/// The binary protocol deserializer. Reads from a byte slice, maintaining a
/// cursor position. It neither owns nor frames the underlying transport;
/// the caller hands it already-received bytes.
pub struct Deserializer<'de> {
    input: &'de [u8],
    pos: usize,
    depth: usize,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8]) -> Self {
        Deserializer {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the unconsumed portion of the input buffer.
    pub fn remaining(&self) -> &'de [u8] {
        &self.input[self.pos..]
    }

    // ── Primitive readers ──────────────────────────────────────────────────

    /// Consume exactly `n` bytes, returning a slice. Fails with UnexpectedEof.
    fn take(&mut self, n: usize) -> Result<&'de [u8]> {
        if self.input.len() - self.pos < n {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.take(2)?;
        Ok(i16::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.take(8)?;
        Ok(i64::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn read_type(&mut self) -> Result<TType> {
        TType::from_wire(self.read_u8()?)
    }

    /// Length-prefixed bytes: 4-byte signed length + data. Returns a slice
    /// into the original input (zero-copy).
    fn read_binary(&mut self) -> Result<&'de [u8]> {
        let n = self.read_i32()?;
        if n < 0 {
            return Err(Error::InvalidLength(n));
        }
        self.take(n as usize)
    }

    /// Non-negative element count for a list, set, or map. Every element
    /// occupies at least one byte on the wire, so a count larger than the
    /// remaining input can never be satisfied and is rejected up front.
    fn read_count(&mut self) -> Result<usize> {
        let n = self.read_i32()?;
        if n < 0 {
            return Err(Error::InvalidLength(n));
        }
        let n = n as usize;
        if n > self.input.len() - self.pos {
            return Err(Error::UnexpectedEof);
        }
        Ok(n)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth == MAX_DEPTH {
            return Err(Error::DepthLimit(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ── Struct decoding ────────────────────────────────────────────────────

    /// Decode one struct of the given schema.
    ///
    /// Loops over field headers until the STOP marker: a header whose id is
    /// in the schema with a matching wire type decodes into the result; any
    /// other header's value is skipped. Struct begin/end and field end are
    /// zero-byte boundaries in the binary protocol, so there is nothing to
    /// consume for them.
    pub fn read_struct(&mut self, schema: &'static Schema) -> Result<StructValue> {
        self.enter()?;
        let mut out = StructValue::new(schema);
        loop {
            let ttype = self.read_type()?;
            if ttype == TType::Stop {
                break;
            }
            let id = self.read_i16()?;
            match schema.field_by_id(id) {
                Some(field) if field.kind.wire_type() == ttype => {
                    let value = self.read_value(&field.kind)?;
                    out.set(field.name, value);
                }
                Some(field) => {
                    trace!(
                        strukt = schema.name,
                        field = field.name,
                        expected = ?field.kind.wire_type(),
                        got = ?ttype,
                        "wire type mismatch, skipping field"
                    );
                    self.skip(ttype)?;
                }
                None => {
                    trace!(
                        strukt = schema.name,
                        id,
                        wire_type = ?ttype,
                        "unknown field id, skipping"
                    );
                    self.skip(ttype)?;
                }
            }
        }
        self.leave();
        Ok(out)
    }

    fn read_value(&mut self, kind: &FieldKind) -> Result<Value> {
        match kind {
            FieldKind::Bool => Ok(Value::Bool(self.read_u8()? != 0)),
            FieldKind::I16 => Ok(Value::I16(self.read_i16()?)),
            FieldKind::I64 => Ok(Value::I64(self.read_i64()?)),
            FieldKind::String => {
                let bytes = self.read_binary()?;
                let s = std::str::from_utf8(bytes).map_err(|_| Error::InvalidString)?;
                Ok(Value::String(s.to_string()))
            }
            FieldKind::List(elem) => {
                self.enter()?;
                // The wire carries an element tag, but elements are decoded
                // per the schema's declared kind, matching what generated
                // Thrift readers do.
                self.read_type()?;
                let count = self.read_count()?;
                let mut items = Vec::new();
                for _ in 0..count {
                    items.push(self.read_value(elem)?);
                }
                self.leave();
                Ok(Value::List(items))
            }
            FieldKind::Struct(schema) => Ok(Value::Struct(self.read_struct(schema)?)),
        }
    }

    // ── Skipping ───────────────────────────────────────────────────────────

    /// Consume one value of the given wire type without materializing it.
    /// Handles every protocol type, not only the kinds the schemas declare,
    /// so foreign fields of any shape are tolerated.
    pub fn skip(&mut self, ttype: TType) -> Result<()> {
        match ttype {
            TType::Stop | TType::Void => Ok(()),
            TType::Bool | TType::Byte => self.take(1).map(drop),
            TType::I16 => self.take(2).map(drop),
            TType::I32 => self.take(4).map(drop),
            TType::I64 | TType::Double => self.take(8).map(drop),
            TType::String => self.read_binary().map(drop),
            TType::Struct => {
                self.enter()?;
                loop {
                    let field_type = self.read_type()?;
                    if field_type == TType::Stop {
                        break;
                    }
                    self.read_i16()?;
                    self.skip(field_type)?;
                }
                self.leave();
                Ok(())
            }
            TType::Map => {
                self.enter()?;
                let key_type = self.read_type()?;
                let val_type = self.read_type()?;
                let count = self.read_count()?;
                for _ in 0..count {
                    self.skip(key_type)?;
                    self.skip(val_type)?;
                }
                self.leave();
                Ok(())
            }
            TType::Set | TType::List => {
                self.enter()?;
                let elem_type = self.read_type()?;
                let count = self.read_count()?;
                for _ in 0..count {
                    self.skip(elem_type)?;
                }
                self.leave();
                Ok(())
            }
        }
    }
}
