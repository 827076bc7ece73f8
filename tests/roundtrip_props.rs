//! Property-based round-trip coverage: any combination of present fields,
//! any field contents, must survive encode/decode unchanged.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use thrift_binary::hadoopfs::{BLOCK_LOCATION, FILE_STATUS, PATHNAME};
use thrift_binary::{StructValue, Value, from_bytes, to_bytes};

fn set_opt(s: &mut StructValue, name: &'static str, value: Option<impl Into<Value>>) {
    if let Some(v) = value {
        s.set(name, v);
    }
}

fn string_list(items: Vec<String>) -> Vec<Value> {
    items.into_iter().map(Value::from).collect()
}

proptest! {
    #[test]
    fn pathname_roundtrips(pathname in option::of(".*")) {
        let mut p = StructValue::new(&PATHNAME);
        set_opt(&mut p, "pathname", pathname);
        let decoded = from_bytes(&to_bytes(&p).unwrap(), &PATHNAME).unwrap();
        prop_assert_eq!(p, decoded);
    }

    #[test]
    fn file_status_roundtrips(
        path in option::of(".*"),
        length in option::of(any::<i64>()),
        isdir in option::of(any::<bool>()),
        block_replication in option::of(any::<i16>()),
        blocksize in option::of(any::<i64>()),
        modification_time in option::of(any::<i64>()),
        permission in option::of("[0-7]{3}"),
        owner in option::of("[a-z]{0,12}"),
        group in option::of("[a-z]{0,12}"),
    ) {
        let mut s = StructValue::new(&FILE_STATUS);
        set_opt(&mut s, "path", path);
        set_opt(&mut s, "length", length);
        set_opt(&mut s, "isdir", isdir);
        set_opt(&mut s, "block_replication", block_replication);
        set_opt(&mut s, "blocksize", blocksize);
        set_opt(&mut s, "modification_time", modification_time);
        set_opt(&mut s, "permission", permission);
        set_opt(&mut s, "owner", owner);
        set_opt(&mut s, "group", group);

        let decoded = from_bytes(&to_bytes(&s).unwrap(), &FILE_STATUS).unwrap();
        prop_assert_eq!(s, decoded);
    }

    #[test]
    fn block_location_roundtrips(
        hosts in option::of(vec(".*", 0..5)),
        names in option::of(vec(".*", 0..5)),
        offset in option::of(any::<i64>()),
        length in option::of(any::<i64>()),
    ) {
        let mut b = StructValue::new(&BLOCK_LOCATION);
        set_opt(&mut b, "hosts", hosts.map(string_list));
        set_opt(&mut b, "names", names.map(string_list));
        set_opt(&mut b, "offset", offset);
        set_opt(&mut b, "length", length);

        let decoded = from_bytes(&to_bytes(&b).unwrap(), &BLOCK_LOCATION).unwrap();
        prop_assert_eq!(b, decoded);
    }

    #[test]
    fn decode_of_arbitrary_bytes_never_panics(input in vec(any::<u8>(), 0..256)) {
        let _ = from_bytes(&input, &FILE_STATUS);
    }
}
