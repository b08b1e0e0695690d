//! From DICOM attributes to display-ready images.
use dcmkit_core::VR;
use dcmkit_dictionary_std::tags;
use dcmkit_object::{InMemDicomObject, InMemElement, Value};
use dcmkit_pixeldata::{
    processing, Image, ImageInformation, IntegerPixelAccessor, PixelFormat, Windowing,
};
use rstest::rstest;

fn rgb_object(width: u16, height: u16, planar: u16) -> InMemDicomObject {
    InMemDicomObject::from_element_iter(vec![
        InMemElement::new(tags::SAMPLES_PER_PIXEL, VR::US, Value::from_u16(3)),
        InMemElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "RGB"),
        InMemElement::new(tags::PLANAR_CONFIGURATION, VR::US, Value::from_u16(planar)),
        InMemElement::new(tags::ROWS, VR::US, Value::from_u16(height)),
        InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(width)),
        InMemElement::new(tags::BITS_ALLOCATED, VR::US, Value::from_u16(16)),
        InMemElement::new(tags::BITS_STORED, VR::US, Value::from_u16(16)),
        InMemElement::new(tags::HIGH_BIT, VR::US, Value::from_u16(15)),
        InMemElement::new(tags::PIXEL_REPRESENTATION, VR::US, Value::from_u16(0)),
    ])
}

/// A synthetic RGB sample, distinct for every pixel and channel.
fn rgb_sample(x: u32, y: u32, c: u32) -> u16 {
    (1000 * c + 10 * y + x) as u16
}

#[rstest]
#[case(1, 1)]
#[case(5, 3)]
#[case(4, 4)]
fn planar_and_interleaved_frames_agree(#[case] width: u16, #[case] height: u16) {
    let (w, h) = (u32::from(width), u32::from(height));

    let mut interleaved = Vec::new();
    for y in 0..h {
        for x in 0..w {
            for c in 0..3 {
                interleaved.extend_from_slice(&rgb_sample(x, y, c).to_le_bytes());
            }
        }
    }
    let mut planar = Vec::new();
    for c in 0..3 {
        for y in 0..h {
            for x in 0..w {
                planar.extend_from_slice(&rgb_sample(x, y, c).to_le_bytes());
            }
        }
    }

    let info_interleaved = ImageInformation::from_object(&rgb_object(width, height, 0)).unwrap();
    let info_planar = ImageInformation::from_object(&rgb_object(width, height, 1)).unwrap();
    assert!(!info_interleaved.is_planar());
    assert!(info_planar.is_planar());
    assert_eq!(info_planar.frame_size().unwrap(), interleaved.len());

    let a = IntegerPixelAccessor::new(info_interleaved, &interleaved).unwrap();
    let b = IntegerPixelAccessor::new(info_planar, &planar).unwrap();
    for y in 0..h {
        for x in 0..w {
            for c in 0..3 {
                let expected = i32::from(rgb_sample(x, y, c));
                assert_eq!(a.value(x, y, c), expected);
                assert_eq!(b.value(x, y, c), expected);
            }
        }
    }
    assert_eq!(a.extreme_values(), b.extreme_values());
    assert_eq!(a.decode_frame().unwrap(), b.decode_frame().unwrap());
}

#[test]
fn one_bit_frame() {
    let obj = InMemDicomObject::from_element_iter(vec![
        InMemElement::new(tags::SAMPLES_PER_PIXEL, VR::US, Value::from_u16(1)),
        InMemElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2"),
        InMemElement::new(tags::ROWS, VR::US, Value::from_u16(1)),
        InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(8)),
        InMemElement::new(tags::BITS_ALLOCATED, VR::US, Value::from_u16(1)),
    ]);
    let info = ImageInformation::from_object(&obj).unwrap();
    let data = [0b1000_0001u8];
    let accessor = IntegerPixelAccessor::new(info, &data).unwrap();

    assert_eq!(accessor.value(0, 0, 0), 255);
    assert_eq!(accessor.value(1, 0, 0), 0);
    assert_eq!(accessor.value(7, 0, 0), 255);

    let frame = accessor.decode_frame().unwrap();
    assert_eq!(frame.format(), PixelFormat::Grayscale8);
    assert_eq!(frame.to_samples::<u8>(), vec![255, 0, 0, 0, 0, 0, 0, 255]);
}

#[test]
fn signed_frame_through_inverted_window() {
    let obj = InMemDicomObject::from_element_iter(vec![
        InMemElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME1"),
        InMemElement::new(tags::ROWS, VR::US, Value::from_u16(2)),
        InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(3)),
        InMemElement::new(tags::BITS_ALLOCATED, VR::US, Value::from_u16(16)),
        InMemElement::new(tags::PIXEL_REPRESENTATION, VR::US, Value::from_u16(1)),
    ]);
    let info = ImageInformation::from_object(&obj).unwrap();

    let samples: [i16; 6] = [-5, 0, 5, 10, 1000, 2];
    let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    let accessor = IntegerPixelAccessor::new(info, &data).unwrap();
    assert_eq!(accessor.extreme_values(), (-5, 1000));

    let frame = accessor.decode_frame().unwrap();
    assert_eq!(frame.format(), PixelFormat::SignedGrayscale16);

    let mut display = Image::new(PixelFormat::Grayscale8, 3, 2);
    let windowing = Windowing::new(5., 10.).rescale(1., 0.).invert(true);
    processing::apply_windowing(&mut display, &frame, &windowing).unwrap();
    assert_eq!(display.to_samples::<u8>(), vec![255, 255, 127, 0, 0, 204]);
}

#[test]
fn multi_frame_access() {
    let obj = InMemDicomObject::from_element_iter(vec![
        InMemElement::new(tags::NUMBER_OF_FRAMES, VR::IS, "3"),
        InMemElement::new(tags::ROWS, VR::US, Value::from_u16(1)),
        InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(2)),
        InMemElement::new(tags::BITS_ALLOCATED, VR::US, Value::from_u16(8)),
    ]);
    let info = ImageInformation::from_object(&obj).unwrap();
    let data = [1, 2, 3, 4, 5, 6];
    let mut accessor = IntegerPixelAccessor::new(info, &data).unwrap();

    let mut frames = Vec::new();
    for frame in 0..3 {
        accessor.set_current_frame(frame).unwrap();
        frames.push(accessor.extreme_values());
    }
    assert_eq!(frames, vec![(1, 2), (3, 4), (5, 6)]);
    assert!(accessor.set_current_frame(3).is_err());
}
