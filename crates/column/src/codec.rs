// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Leaf codecs for the primitive column types
//!
//! Numbers are little-endian; a boolean is one byte where any non-zero byte
//! reads as `true`; strings are UTF-8.

use std::{fmt::Debug, str::Utf8Error};

use crate::{Encoded, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("expected {expected} bytes, got {actual}")]
	Length {
		expected: usize,
		actual: usize,
	},

	#[error("invalid UTF-8: {0}")]
	Utf8(#[from] Utf8Error),
}

/// A Rust type that can live in a column
pub trait Primitive: Debug + Clone + PartialEq {
	/// Encoded size in bytes, or 0 for variable length
	const SIZE: usize;

	fn encode(&self) -> Encoded<'_>;

	fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;

	fn to_value(&self) -> Value;
}

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], DecodeError> {
	bytes.try_into().map_err(|_| DecodeError::Length {
		expected: N,
		actual: bytes.len(),
	})
}

macro_rules! impl_numeric {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Primitive for $ty {
				const SIZE: usize = size_of::<$ty>();

				fn encode(&self) -> Encoded<'_> {
					Encoded::inline(&self.to_le_bytes())
				}

				fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
					Ok(<$ty>::from_le_bytes(fixed(bytes)?))
				}

				fn to_value(&self) -> Value {
					Value::$variant(*self)
				}
			}
		)*
	};
}

impl_numeric! {
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	f32 => Float4,
	f64 => Float8,
}

impl Primitive for bool {
	const SIZE: usize = 1;

	fn encode(&self) -> Encoded<'_> {
		Encoded::inline(&[*self as u8])
	}

	fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
		let [byte] = fixed::<1>(bytes)?;
		Ok(byte != 0)
	}

	fn to_value(&self) -> Value {
		Value::Boolean(*self)
	}
}

impl<const N: usize> Primitive for [u8; N] {
	const SIZE: usize = N;

	fn encode(&self) -> Encoded<'_> {
		Encoded::Borrowed(self.as_slice())
	}

	fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
		fixed(bytes)
	}

	fn to_value(&self) -> Value {
		Value::Blob(self.to_vec())
	}
}

impl Primitive for String {
	const SIZE: usize = 0;

	fn encode(&self) -> Encoded<'_> {
		Encoded::Borrowed(self.as_bytes())
	}

	fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
		Ok(std::str::from_utf8(bytes)?.to_owned())
	}

	fn to_value(&self) -> Value {
		Value::Utf8(self.clone())
	}
}

impl Primitive for Vec<u8> {
	const SIZE: usize = 0;

	fn encode(&self) -> Encoded<'_> {
		Encoded::Borrowed(self.as_slice())
	}

	fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
		Ok(bytes.to_vec())
	}

	fn to_value(&self) -> Value {
		Value::Blob(self.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_sizes() {
		assert_eq!(<i32 as Primitive>::SIZE, 4);
		assert_eq!(<u64 as Primitive>::SIZE, 8);
		assert_eq!(<bool as Primitive>::SIZE, 1);
		assert_eq!(<[u8; 16] as Primitive>::SIZE, 16);
		assert_eq!(<String as Primitive>::SIZE, 0);
		assert_eq!(<Vec<u8> as Primitive>::SIZE, 0);
	}

	#[test]
	fn test_integer_is_little_endian() {
		let encoded = 0x0102_0304i32.encode();
		assert_eq!(encoded.as_bytes(), Some(&[4u8, 3, 2, 1][..]));
		assert_eq!(i32::decode(&[4, 3, 2, 1]), Ok(0x0102_0304));
	}

	#[test]
	fn test_wrong_length_is_rejected() {
		assert_eq!(
			i64::decode(&[1, 2, 3]),
			Err(DecodeError::Length {
				expected: 8,
				actual: 3
			})
		);
	}

	#[test]
	fn test_any_non_zero_byte_is_true() {
		assert_eq!(bool::decode(&[0]), Ok(false));
		assert_eq!(bool::decode(&[0xff]), Ok(true));
		assert_eq!(true.encode().as_bytes(), Some(&[1u8][..]));
	}

	#[test]
	fn test_invalid_utf8_is_rejected() {
		assert!(matches!(String::decode(&[0xff, 0xfe]), Err(DecodeError::Utf8(_))));
		assert_eq!(String::decode("héllo".as_bytes()), Ok("héllo".to_string()));
	}

	#[test]
	fn test_fixed_binary_borrows() {
		let guid = [7u8; 16];
		match guid.encode() {
			Encoded::Borrowed(bytes) => assert_eq!(bytes, &guid),
			other => panic!("unexpected encoding {other:?}"),
		}
	}
}
