#![no_main]

use heapbuf::{BufferConfig, ByteBuffer, GrowthPolicy};
use libfuzzer_sys::fuzz_target;

// Replays the input as a sequence of buffer operations and checks every step against a plain
// `Vec<u8>` model with its own cursor.
fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };

    let growth = match first % 3 {
        0 => GrowthPolicy::Stepped,
        1 => GrowthPolicy::Doubling,
        _ => GrowthPolicy::Exact,
    };
    let mut buffer = ByteBuffer::with_config(BufferConfig {
        initial_size: usize::from(first >> 2),
        growth,
    });
    let mut model: Vec<u8> = Vec::new();
    let mut cursor = 0_usize;
    let mut mark = 0_usize;

    for chunk in ops.chunks(3) {
        let [op, a, b] = match *chunk {
            [op, a, b] => [op, a, b],
            _ => return,
        };

        match op % 8 {
            0 => {
                let bytes = [a, b];
                buffer.write_bytes(&bytes);
                let end = cursor + bytes.len();
                if model.len() < end {
                    model.resize(end, 0);
                }
                model[cursor..end].copy_from_slice(&bytes);
                cursor = end;
            }
            1 => {
                let value = i32::from_be_bytes([a, b, a, b]);
                buffer.write_int(value);
                let end = cursor + 4;
                if model.len() < end {
                    model.resize(end, 0);
                }
                model[cursor..end].copy_from_slice(&value.to_be_bytes());
                cursor = end;
            }
            2 => {
                let want = usize::from(a);
                let got = buffer.read_bytes(want);
                let remaining = model.len().saturating_sub(cursor);
                if remaining == 0 {
                    assert_eq!(got, None);
                } else {
                    let len = want.min(remaining);
                    assert_eq!(got.as_deref(), Some(&model[cursor..cursor + len]));
                    cursor += len;
                }
            }
            3 => {
                let got = buffer.read_int();
                if model.len().saturating_sub(cursor) >= 4 {
                    let mut bytes = [0u8; 4];
                    bytes.copy_from_slice(&model[cursor..cursor + 4]);
                    assert_eq!(got, Some(i32::from_be_bytes(bytes)));
                    cursor += 4;
                } else {
                    assert_eq!(got, None);
                }
            }
            4 => {
                let offset = usize::from(a) % (model.len() + 8);
                buffer.seek_set(offset);
                cursor = offset;
            }
            5 => {
                let offset = isize::from(a as i8);
                buffer.seek_end(offset);
                cursor = if offset >= 0 {
                    model.len().saturating_sub(offset.unsigned_abs())
                } else {
                    model.len() + offset.unsigned_abs()
                };
            }
            6 => {
                buffer.mark_index();
                mark = cursor;
            }
            _ => {
                buffer.reset();
                cursor = mark;
            }
        }

        assert_eq!(buffer.index(), cursor);
        assert_eq!(buffer.size(), model.len());
        assert!(buffer.allocated() >= buffer.size());
        assert_eq!(buffer.as_bytes(), model.as_slice());
    }
});
