use std::mem;

use bytes::{Buf, BufMut};

use crate::protocol::packet::{BedrockEncodable, DecodeError};

/// An unsigned 32-bit varint, 7 payload bits per byte, low group first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarU32(pub u32);

impl VarU32 {
    /// Maximum encoded width in bytes.
    pub const MAX_BYTES: usize = 5;
}

/// An unsigned 64-bit varint, 7 payload bits per byte, low group first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarU64(pub u64);

impl VarU64 {
    /// Maximum encoded width in bytes.
    pub const MAX_BYTES: usize = 10;
}

impl BedrockEncodable for VarU32 {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        let mut v = self.0;
        while v >= 0x80 {
            dst.put_u8(((v & 0x7f) | 0x80) as u8);
            v >>= 7;
        }
        dst.put_u8(v as u8);
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let mut result: u32 = 0;
        for i in 0..Self::MAX_BYTES {
            if !src.has_remaining() {
                return Err(DecodeError::UnexpectedEof);
            }
            let b = src.get_u8();
            // Surplus high bits of the final group fall off the shift.
            result |= ((b & 0x7f) as u32) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(VarU32(result));
            }
        }
        Err(DecodeError::VarIntTooLarge)
    }
}

impl BedrockEncodable for VarU64 {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        let mut v = self.0;
        while v >= 0x80 {
            dst.put_u8(((v & 0x7f) | 0x80) as u8);
            v >>= 7;
        }
        dst.put_u8(v as u8);
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let mut result: u64 = 0;
        for i in 0..Self::MAX_BYTES {
            if !src.has_remaining() {
                return Err(DecodeError::UnexpectedEof);
            }
            let b = src.get_u8();
            result |= ((b & 0x7f) as u64) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(VarU64(result));
            }
        }
        Err(DecodeError::VarIntTooLarge)
    }
}

macro_rules! impl_bedrock_int {
    ($ty:ty, $put:ident, $get:ident) => {
        impl BedrockEncodable for $ty {
            fn encode_bedrock(&self, dst: &mut impl BufMut) {
                dst.$put(*self);
            }

            fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
                let size = mem::size_of::<$ty>();
                if src.remaining() < size {
                    return Err(DecodeError::UnexpectedEof);
                }
                Ok(src.$get())
            }
        }
    };
}

// Fixed-width fields are little-endian on the game layer, unlike the
// big-endian RakNet transport underneath.
impl_bedrock_int!(u16, put_u16_le, get_u16_le);
impl_bedrock_int!(u32, put_u32_le, get_u32_le);
impl_bedrock_int!(u64, put_u64_le, get_u64_le);
impl_bedrock_int!(i16, put_i16_le, get_i16_le);
impl_bedrock_int!(i32, put_i32_le, get_i32_le);
impl_bedrock_int!(i64, put_i64_le, get_i64_le);
impl_bedrock_int!(f32, put_f32_le, get_f32_le);

impl BedrockEncodable for u8 {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        dst.put_u8(*self);
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        if !src.has_remaining() {
            return Err(DecodeError::UnexpectedEof);
        }
        Ok(src.get_u8())
    }
}

impl BedrockEncodable for i8 {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        dst.put_i8(*self);
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        if !src.has_remaining() {
            return Err(DecodeError::UnexpectedEof);
        }
        Ok(src.get_i8())
    }
}

impl BedrockEncodable for bool {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        dst.put_u8(if *self { 1 } else { 0 });
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        if !src.has_remaining() {
            return Err(DecodeError::UnexpectedEof);
        }
        Ok(src.get_u8() == 1)
    }
}

/// Strings are a varint byte-length prefix followed by raw UTF-8 bytes,
/// with no terminator and no fixed width.
impl BedrockEncodable for String {
    fn encode_bedrock(&self, dst: &mut impl BufMut) {
        VarU32(self.len() as u32).encode_bedrock(dst);
        dst.put_slice(self.as_bytes());
    }

    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let len = VarU32::decode_bedrock(src)?.0 as usize;
        if src.remaining() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        let raw = src.copy_to_bytes(len);
        Ok(String::from_utf8(raw.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn var_u32_roundtrip() {
        for &v in &[0u32, 1, 0x7f, 0x80, 0x3fff, 0x4000, u32::MAX] {
            let mut buf = BytesMut::new();
            VarU32(v).encode_bedrock(&mut buf);
            let mut slice = buf.freeze();
            let decoded = VarU32::decode_bedrock(&mut slice).unwrap();
            assert_eq!(decoded.0, v);
            assert!(!slice.has_remaining());
        }
    }

    #[test]
    fn var_u32_boundary_widths() {
        let mut buf = BytesMut::new();
        VarU32(0x7f).encode_bedrock(&mut buf);
        assert_eq!(buf.len(), 1);

        let mut buf = BytesMut::new();
        VarU32(0x80).encode_bedrock(&mut buf);
        assert_eq!(buf.len(), 2);

        let mut buf = BytesMut::new();
        VarU32(u32::MAX).encode_bedrock(&mut buf);
        assert_eq!(buf.len(), VarU32::MAX_BYTES);
    }

    #[test]
    fn var_u32_unterminated_is_rejected() {
        let mut slice = &[0x80u8, 0x80, 0x80, 0x80, 0x80][..];
        assert!(matches!(
            VarU32::decode_bedrock(&mut slice),
            Err(DecodeError::VarIntTooLarge)
        ));
    }

    #[test]
    fn var_u32_truncated_is_eof() {
        let mut slice = &[0x80u8, 0x80][..];
        assert!(matches!(
            VarU32::decode_bedrock(&mut slice),
            Err(DecodeError::UnexpectedEof)
        ));
    }

    #[test]
    fn var_u64_roundtrip() {
        for &v in &[0u64, 1, 0x7f, 0x80, (-1i64) as u64, u64::MAX] {
            let mut buf = BytesMut::new();
            VarU64(v).encode_bedrock(&mut buf);
            let mut slice = buf.freeze();
            assert_eq!(VarU64::decode_bedrock(&mut slice).unwrap().0, v);
        }
    }

    #[test]
    fn var_u64_max_is_ten_bytes() {
        let mut buf = BytesMut::new();
        VarU64(u64::MAX).encode_bedrock(&mut buf);
        assert_eq!(buf.len(), VarU64::MAX_BYTES);
    }

    #[test]
    fn fixed_ints_are_little_endian() {
        let mut buf = BytesMut::new();
        (-2i32).encode_bedrock(&mut buf);
        assert_eq!(&buf[..], &[0xfe, 0xff, 0xff, 0xff]);

        let mut slice = buf.freeze();
        assert_eq!(i32::decode_bedrock(&mut slice).unwrap(), -2);
    }

    #[test]
    fn f32_roundtrip() {
        for &v in &[0.0f32, -1.5, 0.25, f32::MAX] {
            let mut buf = BytesMut::new();
            v.encode_bedrock(&mut buf);
            let mut slice = buf.freeze();
            assert_eq!(f32::decode_bedrock(&mut slice).unwrap(), v);
        }
    }

    #[test]
    fn string_roundtrip() {
        for s in ["", "hello", "sphäre", "日本語"] {
            let mut buf = BytesMut::new();
            s.to_owned().encode_bedrock(&mut buf);
            let mut slice = buf.freeze();
            assert_eq!(String::decode_bedrock(&mut slice).unwrap(), s);
            assert!(!slice.has_remaining());
        }
    }

    #[test]
    fn empty_string_is_a_single_zero_byte() {
        let mut buf = BytesMut::new();
        String::new().encode_bedrock(&mut buf);
        assert_eq!(&buf[..], &[0x00]);
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let mut slice = &[0x02u8, 0xff, 0xfe][..];
        assert!(matches!(
            String::decode_bedrock(&mut slice),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn string_length_past_buffer_is_eof() {
        let mut slice = &[0x05u8, b'a', b'b'][..];
        assert!(matches!(
            String::decode_bedrock(&mut slice),
            Err(DecodeError::UnexpectedEof)
        ));
    }
}
