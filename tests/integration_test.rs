use hlwire::field::FIELD_FILE_NAME_WITH_INFO;
use hlwire::files::FileNameWithInfo;
use hlwire::filetype::{FileTypeInfo, DEFAULT_FILE_TYPE};
use hlwire::user::{trailing_u16, FLAG_ADMIN, FLAG_AWAY};
use hlwire::{
    decode_path, encode_path, file_name_list, obfuscate, total_item_count, total_size,
    UserRecord, WireError,
};
use std::fs;
use tempfile::tempdir;

fn decode_by_name(fields: &[hlwire::Field], name: &str) -> FileNameWithInfo {
    fields
        .iter()
        .map(|f| FileNameWithInfo::decode(&f.data).unwrap())
        .find(|r| r.name == name.as_bytes())
        .unwrap_or_else(|| panic!("no record named {name}"))
}

#[test]
fn test_listing_three_entries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), [0u8; 10]).unwrap();
    fs::write(dir.path().join("b.jpg"), [0u8; 20]).unwrap();
    let sub = dir.path().join("c");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("one"), b"x").unwrap();
    fs::write(sub.join("two"), b"y").unwrap();

    let fields = file_name_list(dir.path()).unwrap();
    assert_eq!(fields.len(), 3);
    for field in &fields {
        assert_eq!(field.id, FIELD_FILE_NAME_WITH_INFO);
    }

    let a = decode_by_name(&fields, "a.txt");
    assert_eq!(&a.type_code, b"TEXT");
    assert_eq!(&a.creator_code, b"ttxt");
    assert_eq!(a.file_size, 10);

    let b = decode_by_name(&fields, "b.jpg");
    assert_eq!(&b.type_code, b"JPEG");
    assert_eq!(b.file_size, 20);

    // Directory entry: fldr sentinel, zeroed creator, child count in the
    // size slot.
    let c = decode_by_name(&fields, "c");
    assert_eq!(&c.type_code, b"fldr");
    assert_eq!(&c.creator_code, &[0u8; 4]);
    assert_eq!(c.file_size, 2);
}

#[test]
fn test_listing_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("does-not-exist");
    assert!(matches!(file_name_list(&gone), Err(WireError::Io(_))));
}

#[test]
fn test_record_layout_exact_bytes() {
    let record = FileNameWithInfo {
        type_code:    *b"JPEG",
        creator_code: *b"ogle",
        file_size:    20,
        name:         b"b.jpg".to_vec(),
    };
    let bytes = record.encode();
    assert_eq!(
        bytes,
        [
            b'J', b'P', b'E', b'G', // type
            b'o', b'g', b'l', b'e', // creator
            0, 0, 0, 20,            // fileSize, u32 BE
            0, 5,                   // nameSize, u16 BE
            b'b', b'.', b'j', b'p', b'g',
        ]
    );
    assert_eq!(FileNameWithInfo::decode(&bytes).unwrap(), record);
}

#[test]
fn test_record_decode_truncated() {
    assert!(matches!(
        FileNameWithInfo::decode(&[0u8; 13]),
        Err(WireError::InsufficientData { needed: 14, got: 13 })
    ));

    // Header claims a 5-byte name but only 2 bytes follow.
    let mut bytes = vec![0u8; 12];
    bytes.extend_from_slice(&[0, 5, b'a', b'b']);
    assert!(matches!(
        FileNameWithInfo::decode(&bytes),
        Err(WireError::InsufficientData { .. })
    ));
}

#[test]
fn test_total_size_and_item_count() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), [0u8; 10]).unwrap();
    fs::write(dir.path().join("b"), [0u8; 20]).unwrap();
    fs::write(dir.path().join("c"), [0u8; 30]).unwrap();

    assert_eq!(total_size(dir.path()).unwrap(), 60);
    // Three files; the root directory itself is excluded.
    assert_eq!(total_item_count(dir.path()).unwrap(), 3);
}

#[test]
fn test_totals_recurse() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top"), [0u8; 5]).unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("inner"), [0u8; 7]).unwrap();

    // Directories contribute 0 bytes but do count as items.
    assert_eq!(total_size(dir.path()).unwrap(), 12);
    assert_eq!(total_item_count(dir.path()).unwrap(), 3);
}

#[test]
fn test_totals_missing_dir_fail() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("gone");
    assert!(total_size(&gone).is_err());
    assert!(total_item_count(&gone).is_err());
}

#[test]
fn test_file_type_defaults() {
    assert_eq!(FileTypeInfo::lookup("unknownext"), DEFAULT_FILE_TYPE);
    assert_eq!(FileTypeInfo::lookup(""), DEFAULT_FILE_TYPE);
    assert_eq!(FileTypeInfo::for_filename("README"), DEFAULT_FILE_TYPE);
    assert_eq!(&FileTypeInfo::for_filename("photo.jpg").type_code, b"JPEG");
    assert_eq!(&FileTypeInfo::for_filename("archive.tar.tgz").type_code, b"Gzip");

    let incomplete = FileTypeInfo::incomplete_upload();
    assert_eq!(&incomplete.type_code, b"HTft");
    assert_eq!(&incomplete.creator_code, b"HTLC");
}

#[test]
fn test_encode_path_layout() {
    let bytes = encode_path("a/b/c").unwrap();
    assert_eq!(
        bytes,
        [
            0, 3,             // segmentCount
            0, 0, 1, b'a',    // reserved · len · bytes
            0, 0, 1, b'b',
            0, 0, 1, b'c',
        ]
    );
}

#[test]
fn test_encode_path_empty() {
    // An empty path is one zero-length segment, not zero segments.
    assert_eq!(encode_path("").unwrap(), [0, 1, 0, 0, 0]);
}

#[test]
fn test_encode_path_segment_too_long() {
    let long = "x".repeat(256);
    assert!(matches!(
        encode_path(&long),
        Err(WireError::SegmentTooLong { len: 256 })
    ));
    // 255 bytes is the last representable length.
    assert!(encode_path(&"x".repeat(255)).is_ok());
}

#[test]
fn test_decode_path() {
    let bytes = encode_path("uploads/incoming/file.sit").unwrap();
    assert_eq!(decode_path(&bytes).unwrap(), ["uploads", "incoming", "file.sit"]);

    // Declared two segments, delivered one.
    assert!(matches!(
        decode_path(&[0, 2, 0, 0, 1, b'a']),
        Err(WireError::InsufficientData { .. })
    ));
}

#[test]
fn test_user_record_layout() {
    let record = UserRecord {
        id:    3,
        icon:  0x91,
        flags: FLAG_AWAY | FLAG_ADMIN,
        name:  "guest".to_string(),
    };
    let bytes = record.encode();
    assert_eq!(bytes.len(), 8 + 5);
    assert_eq!(
        bytes,
        [0, 3, 0, 0x91, 0, 3, 0, 5, b'g', b'u', b'e', b's', b't']
    );

    let decoded = UserRecord::decode(&bytes).unwrap();
    assert_eq!(decoded, record);
    assert!(decoded.is_away());
    assert!(decoded.is_admin());
    assert!(!decoded.refuses_private_messages());
}

#[test]
fn test_user_decode_ignores_length_prefix() {
    // The prefix at bytes 6..8 claims a 2-byte name; decode takes everything
    // from offset 8 regardless.
    let bytes = [0, 1, 0, 2, 0, 0, 0, 2, b'a', b'b', b'c', b'd'];
    assert_eq!(UserRecord::decode(&bytes).unwrap().name, "abcd");
}

#[test]
fn test_user_decode_short_buffer() {
    assert!(matches!(
        UserRecord::decode(&[1, 2, 3, 4, 5]),
        Err(WireError::InsufficientData { needed: 8, got: 5 })
    ));
}

#[test]
fn test_over_wide_field_normalization() {
    // 4-byte padded icon/flags fields: the trailing two bytes are the value.
    assert_eq!(trailing_u16(&[0, 0, 0, 0x91]).unwrap(), 0x91);
    assert_eq!(trailing_u16(&[0xde, 0xad, 0x12, 0x34]).unwrap(), 0x1234);
    assert_eq!(trailing_u16(&[0x12, 0x34]).unwrap(), 0x1234);
    assert!(trailing_u16(&[7]).is_err());

    let user =
        UserRecord::from_fields(&[0, 9], &[0, 0, 0, 2], &[0, 0, 0, 1], "abc".into()).unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.icon, 2);
    assert_eq!(user.flags, 1);
}

#[test]
fn test_obfuscate_known_vector() {
    // e.g. 98 8a 9a 8c 8b => "guest"
    assert_eq!(obfuscate::obfuscate(b"guest"), [0x98, 0x8a, 0x9a, 0x8c, 0x8b]);
    assert_eq!(
        obfuscate::deobfuscate_string(&[0x98, 0x8a, 0x9a, 0x8c, 0x8b]),
        "guest"
    );
}

#[test]
fn test_field_envelope_layout() {
    let field = hlwire::Field::new(FIELD_FILE_NAME_WITH_INFO, vec![0xab, 0xcd]);
    assert_eq!(field.to_bytes(), [0, 200, 0, 2, 0xab, 0xcd]);
    assert_eq!(field.id.name(), "file-name-with-info");
}
