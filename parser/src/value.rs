//! Primitive value helpers shared by the readers and writers.
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmkit_core::{Tag, VR};

/// Strip the padding of a string value.
///
/// Values of string VRs are padded to an even length
/// with a single trailing space or NUL character.
/// This removes at most one such byte, and only for string VRs.
pub fn normalize(value: &[u8], vr: VR) -> &[u8] {
    match value.last() {
        Some(b' ') | Some(b'\0') if vr.is_string() => &value[..value.len() - 1],
        _ => value,
    }
}

/// Read an unsigned 16-bit integer in the given byte order.
pub fn read_u16(bytes: &[u8], little_endian: bool) -> u16 {
    if little_endian {
        LittleEndian::read_u16(bytes)
    } else {
        BigEndian::read_u16(bytes)
    }
}

/// Read an unsigned 32-bit integer in the given byte order.
pub fn read_u32(bytes: &[u8], little_endian: bool) -> u32 {
    if little_endian {
        LittleEndian::read_u32(bytes)
    } else {
        BigEndian::read_u32(bytes)
    }
}

/// Read a tag (group, then element) in the given byte order.
pub fn read_tag(bytes: &[u8], little_endian: bool) -> Tag {
    Tag(
        read_u16(&bytes[0..2], little_endian),
        read_u16(&bytes[2..4], little_endian),
    )
}

/// The size in bytes of a single numeric value of the given VR,
/// or 1 if values of this VR are not subject to byte swapping.
pub fn swap_unit(vr: VR) -> usize {
    match vr {
        VR::AT | VR::OW | VR::SS | VR::US => 2,
        VR::FL | VR::OF | VR::OL | VR::SL | VR::UL => 4,
        VR::FD | VR::OD | VR::OV | VR::SV | VR::UV => 8,
        _ => 1,
    }
}

/// Reverse the byte order of every numeric value in place,
/// converting between little and big endian.
///
/// Attribute tags (AT) are swapped per 16-bit component,
/// and any incomplete trailing unit is left untouched.
pub fn swap_bytes(value: &mut [u8], vr: VR) {
    let unit = swap_unit(vr);
    if unit > 1 {
        for chunk in value.chunks_exact_mut(unit) {
            chunk.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_pad_byte_of_strings() {
        assert_eq!(normalize(b"ABC ", VR::CS), b"ABC");
        assert_eq!(normalize(b"1.2.3\0", VR::UI), b"1.2.3");
        assert_eq!(normalize(b"19800101", VR::DA), b"19800101");
        assert_eq!(normalize(b"", VR::LO), b"");
        // only a single byte is removed
        assert_eq!(normalize(b"AB  ", VR::SH), b"AB ");
    }

    #[test]
    fn binary_values_are_untouched() {
        assert_eq!(normalize(&[1u8, 0], VR::US), &[1u8, 0][..]);
        assert_eq!(normalize(b"ABC ", VR::OB), b"ABC ");
        assert_eq!(normalize(b"ABC ", VR::UN), b"ABC ");
    }

    #[test]
    fn normalization_is_idempotent_on_padded_values() {
        let vrs = [
            VR::AE,
            VR::AS,
            VR::CS,
            VR::DA,
            VR::DS,
            VR::DT,
            VR::IS,
            VR::LO,
            VR::LT,
            VR::PN,
            VR::SH,
            VR::ST,
            VR::TM,
            VR::UC,
            VR::UI,
            VR::UR,
            VR::UT,
        ];
        let samples: [&[u8]; 5] = [b"ORIGINAL ", b"1.2.840\0", b"X", b"", b"A\\B "];
        for vr in vrs {
            for sample in samples {
                let once = normalize(sample, vr);
                assert_eq!(normalize(once, vr), once, "{} {:?}", vr, sample);
            }
        }
    }

    #[test]
    fn read_integers_in_both_orders() {
        assert_eq!(read_u16(&[0x10, 0x00], true), 0x0010);
        assert_eq!(read_u16(&[0x00, 0x10], false), 0x0010);
        assert_eq!(read_u32(&[0xFF, 0xFF, 0xFF, 0xFF], true), 0xFFFF_FFFF);
        assert_eq!(read_u32(&[0, 0, 1, 0], false), 0x100);
        assert_eq!(read_tag(&[0xE0, 0x7F, 0x10, 0x00], true), Tag(0x7FE0, 0x0010));
        assert_eq!(read_tag(&[0x7F, 0xE0, 0x00, 0x10], false), Tag(0x7FE0, 0x0010));
    }

    #[test]
    fn swap_numeric_values() {
        let mut words = vec![0x01, 0x02, 0x03, 0x04];
        swap_bytes(&mut words, VR::US);
        assert_eq!(words, vec![0x02, 0x01, 0x04, 0x03]);

        let mut longs = vec![0x01, 0x02, 0x03, 0x04];
        swap_bytes(&mut longs, VR::UL);
        assert_eq!(longs, vec![0x04, 0x03, 0x02, 0x01]);

        let mut text = b"AB".to_vec();
        swap_bytes(&mut text, VR::CS);
        assert_eq!(text, b"AB".to_vec());
    }
}
