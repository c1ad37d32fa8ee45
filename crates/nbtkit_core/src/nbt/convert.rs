//! Lenient numeric coercion shared by the `as_*` readers.

use crate::nbt::Value;

/// Numeric view of a value, narrowed the way Java primitive casts narrow.
///
/// Float to integer conversions saturate (NaN becomes zero); integer
/// narrowing wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Integral source.
	Int(i64),
	/// Floating-point source.
	Float(f64),
}

impl Default for Number {
	fn default() -> Self {
		Self::Int(0)
	}
}

impl Number {
	/// Narrow to `i8`, going through `i32` for floats.
	pub fn to_i8(self) -> i8 {
		match self {
			Self::Int(value) => value as i8,
			Self::Float(value) => (value as i32) as i8,
		}
	}

	/// Narrow to `i16`, going through `i32` for floats.
	pub fn to_i16(self) -> i16 {
		match self {
			Self::Int(value) => value as i16,
			Self::Float(value) => (value as i32) as i16,
		}
	}

	/// Narrow to `i32`.
	pub fn to_i32(self) -> i32 {
		match self {
			Self::Int(value) => value as i32,
			Self::Float(value) => value as i32,
		}
	}

	/// Widen or truncate to `i64`.
	pub fn to_i64(self) -> i64 {
		match self {
			Self::Int(value) => value,
			Self::Float(value) => value as i64,
		}
	}

	/// Convert to `f32`.
	pub fn to_f32(self) -> f32 {
		match self {
			Self::Int(value) => value as f32,
			Self::Float(value) => value as f32,
		}
	}

	/// Convert to `f64`.
	pub fn to_f64(self) -> f64 {
		match self {
			Self::Int(value) => value as f64,
			Self::Float(value) => value,
		}
	}
}

impl Value {
	/// Numeric view of numeric variants and of strings holding a number.
	pub fn to_number(&self) -> Option<Number> {
		let number = match self {
			Self::Byte(value) => Number::Int(i64::from(*value)),
			Self::Short(value) => Number::Int(i64::from(*value)),
			Self::Int(value) => Number::Int(i64::from(*value)),
			Self::Long(value) => Number::Int(*value),
			Self::Float(value) => Number::Float(f64::from(*value)),
			Self::Double(value) => Number::Float(*value),
			Self::String(text) => {
				let text = text.trim();
				match text.parse::<i64>() {
					Ok(value) => Number::Int(value),
					Err(_) => Number::Float(text.parse::<f64>().ok()?),
				}
			}
			_ => return None,
		};
		Some(number)
	}

	/// Boolean view: a number whose byte narrowing is positive.
	pub fn to_boolean(&self) -> bool {
		self.to_number().is_some_and(|number| number.to_i8() > 0)
	}
}

#[cfg(test)]
mod tests;
