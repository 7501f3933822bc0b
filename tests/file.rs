use std::{fs, path::PathBuf};

use heapbuf::{file, ByteBuffer, Error};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heapbuf_it_{}_{name}", std::process::id()))
}

#[test]
fn store_and_load_random_access() {
    let path = temp_path("records.bin");

    let mut buffer = ByteBuffer::allocate_with(8);
    buffer
        .write_int(3)
        .write_long(-7)
        .write_double(2.5)
        .write_chars(&[0x48, 0x69]);
    // cursor position must not matter when storing
    buffer.seek_set(1);
    file::write_file(&path, &buffer).unwrap();

    let mut loaded = file::read_file(&path).unwrap();
    assert_eq!(loaded.index(), 0);
    assert_eq!(loaded.size(), 4 + 8 + 8 + 4);
    assert_eq!(loaded, buffer);

    loaded.seek_set(12);
    assert_eq!(loaded.read_double(), Some(2.5));
    loaded.seek_set(4);
    assert_eq!(loaded.read_long(), Some(-7));
    loaded.seek_end(4);
    assert_eq!(loaded.read_chars(2), Some(vec![0x48, 0x69]));
    assert_eq!(loaded.read_byte(), None);

    fs::remove_file(&path).unwrap();
}

#[test]
fn append_and_store_again() {
    let path = temp_path("append.bin");
    fs::write(&path, [0x00, 0x00, 0x00, 0x01]).unwrap();

    let mut buffer = file::read_file(&path).unwrap();
    buffer.seek_end(0).write_int(2);
    file::write_file(&path, &buffer).unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![0, 0, 0, 1, 0, 0, 0, 2]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn copy_file_round_trip() {
    let src = temp_path("copy_src.bin");
    let dst = temp_path("copy_dst.bin");
    let data: Vec<u8> = (0..50_000_u32).map(|i| (i * 31 % 251) as u8).collect();
    fs::write(&src, &data).unwrap();

    assert_eq!(file::copy_file(&src, &dst).unwrap(), 50_000);
    assert_eq!(fs::read(&dst).unwrap(), data);

    fs::remove_file(&src).unwrap();
    fs::remove_file(&dst).unwrap();
}

#[test]
fn stream_into_buffer() {
    let data = b"\x00\x00\x00\x2Arest of the stream".to_vec();
    let mut buffer = file::read_stream(data.as_slice()).unwrap();

    assert_eq!(buffer.read_int(), Some(42));
    assert_eq!(buffer.read_bytes(4), Some(b"rest".to_vec()));
}

#[test]
fn copy_buffer_to_buffer() {
    let mut source = ByteBuffer::wrap(&[5; 9000]);
    source.rewind();
    let mut target = ByteBuffer::allocate_with(1);

    assert_eq!(file::copy(&mut source, &mut target).unwrap(), 9000);
    assert_eq!(target.size(), 9000);
    assert_eq!(source.readable_bytes(), 0);
}

#[test]
fn missing_file() {
    match file::read_file(temp_path("does_not_exist.bin")) {
        Err(Error::FileError(error)) => assert_eq!(error.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected FileError, got {:?}", other.map(|b| b.size())),
    }

    assert!(file::copy_file(temp_path("also_missing.bin"), temp_path("unused.bin")).is_err());
}
