//! # thrift-binary
//!
//! A pure-Rust, schema-driven encoder/decoder for the Apache Thrift binary
//! protocol, bit-compatible with Thrift-generated producers and consumers
//! such as the Hadoop thriftfs services.
//!
//! ## Overview
//!
//! Instead of generating a `read`/`write` method pair per struct, this crate
//! has one generic codec driven entirely by a [`Schema`]: an ordered list of
//! `(field id, kind, name)` descriptors defined once per struct type as
//! `static` data. A decoded struct is a [`StructValue`], a mapping from
//! field name to dynamic [`Value`] in which every field is optional —
//! absent means "not set", distinct from any zero value.
//!
//! Decoding is permissive by contract: a field with an unknown id, or whose
//! wire type disagrees with the schema, is skipped (its bytes consumed per
//! its wire type) rather than rejected. That is the protocol's
//! forward/backward compatibility guarantee. Decoding fails only on
//! malformed or truncated bytes. Encoding emits only present fields, in
//! schema order, so output is deterministic.
//!
//! ## Wire format
//!
//! | Item | Encoding |
//! |------|----------|
//! | Struct | fields then a 1-byte STOP marker (begin/end emit no bytes) |
//! | Field header | type tag (1 byte) + field id (2-byte big-endian `i16`) |
//! | `bool` | 1 byte: 0 or 1 |
//! | `i16`, `i64` | 2 / 8 bytes, big-endian two's complement |
//! | String | 4-byte big-endian signed length + UTF-8 bytes |
//! | List | element type tag (1 byte) + 4-byte count + elements |
//!
//! ## Example
//!
//! ```rust
//! use thrift_binary::hadoopfs::FILE_STATUS;
//! use thrift_binary::{StructValue, from_bytes, to_bytes};
//!
//! let status = StructValue::new(&FILE_STATUS)
//!     .with("path", "/tmp/a")
//!     .with("length", 42i64)
//!     .with("isdir", false)
//!     .with("owner", "alice");
//!
//! let bytes = to_bytes(&status).unwrap();
//! let decoded = from_bytes(&bytes, &FILE_STATUS).unwrap();
//! assert_eq!(status, decoded);
//!
//! // Fields never written stay absent after decode.
//! assert!(decoded.get("blocksize").is_none());
//! ```

pub mod de;
pub mod error;
pub mod hadoopfs;
pub mod schema;
pub mod ser;
pub mod value;

pub use de::{Deserializer, MAX_DEPTH, from_bytes, from_bytes_partial};
pub use error::{Error, Result};
pub use schema::{FieldDescriptor, FieldKind, Schema, TType};
pub use ser::{Serializer, to_bytes, to_writer};
pub use value::{StructValue, Value};
