//! Schemas for the Hadoop thriftfs remote filesystem API.
//!
//! These reproduce, field for field, the wire shape of the structs the
//! thriftfs IDL defines: open-file handles, path names, file status
//! records, block locations, and the two error structs the service raises.
//! Each is a plain [`Schema`] value; every instance is encoded and decoded
//! by the same generic codec.

use crate::error::Result;
use crate::schema::{FieldDescriptor, FieldKind, Schema};
use crate::value::StructValue;
use crate::{de, ser};
use thiserror::Error;

/// An opaque handle to an open file, issued by the server.
pub static THRIFT_HANDLE: Schema = Schema {
    name: "ThriftHandle",
    fields: &[FieldDescriptor {
        id: 1,
        name: "id",
        kind: FieldKind::I64,
    }],
};

/// A filesystem path.
pub static PATHNAME: Schema = Schema {
    name: "Pathname",
    fields: &[FieldDescriptor {
        id: 1,
        name: "pathname",
        kind: FieldKind::String,
    }],
};

/// Status of one file or directory: size, type, replication, ownership.
pub static FILE_STATUS: Schema = Schema {
    name: "FileStatus",
    fields: &[
        FieldDescriptor {
            id: 1,
            name: "path",
            kind: FieldKind::String,
        },
        FieldDescriptor {
            id: 2,
            name: "length",
            kind: FieldKind::I64,
        },
        FieldDescriptor {
            id: 3,
            name: "isdir",
            kind: FieldKind::Bool,
        },
        FieldDescriptor {
            id: 4,
            name: "block_replication",
            kind: FieldKind::I16,
        },
        FieldDescriptor {
            id: 5,
            name: "blocksize",
            kind: FieldKind::I64,
        },
        FieldDescriptor {
            id: 6,
            name: "modification_time",
            kind: FieldKind::I64,
        },
        FieldDescriptor {
            id: 7,
            name: "permission",
            kind: FieldKind::String,
        },
        FieldDescriptor {
            id: 8,
            name: "owner",
            kind: FieldKind::String,
        },
        FieldDescriptor {
            id: 9,
            name: "group",
            kind: FieldKind::String,
        },
    ],
};

/// Placement of one block: the hosts holding it and its extent in the file.
/// The `hosts` and `names` lists are order-significant.
pub static BLOCK_LOCATION: Schema = Schema {
    name: "BlockLocation",
    fields: &[
        FieldDescriptor {
            id: 1,
            name: "hosts",
            kind: FieldKind::List(&FieldKind::String),
        },
        FieldDescriptor {
            id: 2,
            name: "names",
            kind: FieldKind::List(&FieldKind::String),
        },
        FieldDescriptor {
            id: 3,
            name: "offset",
            kind: FieldKind::I64,
        },
        FieldDescriptor {
            id: 4,
            name: "length",
            kind: FieldKind::I64,
        },
    ],
};

/// Wire shape of [`MalformedInputException`].
pub static MALFORMED_INPUT_EXCEPTION: Schema = Schema {
    name: "MalformedInputException",
    fields: &[FieldDescriptor {
        id: 1,
        name: "message",
        kind: FieldKind::String,
    }],
};

/// Wire shape of [`ThriftIOException`].
pub static THRIFT_IO_EXCEPTION: Schema = Schema {
    name: "ThriftIOException",
    fields: &[FieldDescriptor {
        id: 1,
        name: "message",
        kind: FieldKind::String,
    }],
};

// ── Typed error values ─────────────────────────────────────────────────────
//
// On the wire these are ordinary structs; they are errors only in how the
// service layer raises and catches them. The typed forms implement
// `std::error::Error` so callers can propagate them, and convert to/from
// `StructValue` for the trip through the codec.

/// The service rejected the caller's input (for example a bad path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed input: {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct MalformedInputException {
    pub message: Option<String>,
}

impl MalformedInputException {
    pub fn new(message: impl Into<String>) -> Self {
        MalformedInputException {
            message: Some(message.into()),
        }
    }

    pub fn to_struct(&self) -> StructValue {
        message_to_struct(&MALFORMED_INPUT_EXCEPTION, &self.message)
    }

    pub fn from_struct(value: &StructValue) -> Self {
        MalformedInputException {
            message: message_from_struct(value),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        ser::to_bytes(&self.to_struct())
    }

    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        Ok(Self::from_struct(&de::from_bytes(
            input,
            &MALFORMED_INPUT_EXCEPTION,
        )?))
    }
}

/// An I/O failure in the underlying filesystem, reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("filesystem I/O error: {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct ThriftIOException {
    pub message: Option<String>,
}

impl ThriftIOException {
    pub fn new(message: impl Into<String>) -> Self {
        ThriftIOException {
            message: Some(message.into()),
        }
    }

    pub fn to_struct(&self) -> StructValue {
        message_to_struct(&THRIFT_IO_EXCEPTION, &self.message)
    }

    pub fn from_struct(value: &StructValue) -> Self {
        ThriftIOException {
            message: message_from_struct(value),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        ser::to_bytes(&self.to_struct())
    }

    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        Ok(Self::from_struct(&de::from_bytes(
            input,
            &THRIFT_IO_EXCEPTION,
        )?))
    }
}

fn message_to_struct(schema: &'static Schema, message: &Option<String>) -> StructValue {
    let mut out = StructValue::new(schema);
    if let Some(message) = message {
        out.set("message", message.clone());
    }
    out
}

fn message_from_struct(value: &StructValue) -> Option<String> {
    value
        .get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
