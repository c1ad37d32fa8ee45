//! Big-endian primitives shared by every payload codec.

use std::io::{Read, Write};

use crate::nbt::{NbtError, Result, TypeId};

/// Big-endian read helpers for any byte source.
pub trait ReadNbt: Read {
	/// Read exactly `N` bytes.
	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	/// Read a one-byte type identifier.
	fn read_type_id(&mut self) -> Result<TypeId> {
		let [raw] = self.read_array::<1>()?;
		Ok(TypeId(raw))
	}

	/// Read an `i8`.
	fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i16`.
	fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u16`.
	fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `f32`.
	fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `f64`.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}

	/// Read a `u16`-length-prefixed UTF-8 string.
	fn read_string(&mut self) -> Result<String> {
		let len = usize::from(self.read_u16()?);
		let mut buf = vec![0_u8; len];
		self.read_exact(&mut buf)?;
		Ok(String::from_utf8(buf)?)
	}
}

impl<R: Read + ?Sized> ReadNbt for R {}

/// Big-endian write helpers for any byte sink.
pub trait WriteNbt: Write {
	/// Write a one-byte type identifier.
	fn write_type_id(&mut self, id: TypeId) -> Result<()> {
		self.write_all(&[id.0])?;
		Ok(())
	}

	/// Write an `i8`.
	fn write_i8(&mut self, value: i8) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `i16`.
	fn write_i16(&mut self, value: i16) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `u16`.
	fn write_u16(&mut self, value: u16) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `i32`.
	fn write_i32(&mut self, value: i32) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `i64`.
	fn write_i64(&mut self, value: i64) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `f32`.
	fn write_f32(&mut self, value: f32) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `f64`.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		self.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a `u16`-length-prefixed UTF-8 string.
	fn write_string(&mut self, value: &str) -> Result<()> {
		let len = u16::try_from(value.len()).map_err(|_| NbtError::StringTooLong { len: value.len() })?;
		self.write_u16(len)?;
		self.write_all(value.as_bytes())?;
		Ok(())
	}
}

impl<W: Write + ?Sized> WriteNbt for W {}

#[cfg(test)]
mod tests;
