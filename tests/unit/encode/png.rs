use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wireframe_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn checker(width: u32, height: u32) -> Frame {
    let mut rgb8 = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            rgb8.extend_from_slice(&[v, 128, 255 - v]);
        }
    }
    Frame {
        width,
        height,
        rgb8,
    }
}

#[test]
fn encoded_png_decodes_to_the_same_pixels() {
    let frame = checker(5, 3);
    let bytes = encode_png(&frame).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!(decoded.into_rgb8().into_raw(), frame.rgb8);
}

#[test]
fn short_buffer_is_an_encode_error() {
    let mut frame = checker(4, 4);
    frame.rgb8.pop();
    assert!(matches!(encode_png(&frame), Err(WireframeError::Encode(_))));
}

#[test]
fn write_replaces_existing_file_and_leaves_no_temp() {
    let tmp = temp_dir("png_replace");
    std::fs::create_dir_all(&tmp).unwrap();
    let out = tmp.join("out.png");
    std::fs::write(&out, b"stale").unwrap();

    write_png(&out, &checker(2, 2)).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(bytes, encode_png(&checker(2, 2)).unwrap());
    let leftovers: Vec<_> = std::fs::read_dir(&tmp)
        .unwrap()
        .flatten()
        .filter(|e| e.file_name() != "out.png")
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_directory_is_not_created() {
    let tmp = temp_dir("png_missing_dir");
    let out = tmp.join("nested").join("out.png");
    let err = write_png(&out, &checker(2, 2)).unwrap_err();
    assert!(matches!(err, WireframeError::Encode(_)));
    assert!(!tmp.exists());
}
