use thiserror::Error;

use crate::nbt::TypeId;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while registering, encoding, and decoding tags.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Registration of an identifier that already has a factory.
	#[error("type id {id} is already registered")]
	DuplicateTypeId {
		/// Offending identifier.
		id: TypeId,
	},
	/// Registration of the terminator or an identifier in the reserved range.
	#[error("type id {id} is reserved and cannot be registered")]
	ReservedTypeId {
		/// Offending identifier.
		id: TypeId,
	},
	/// Factory produced an instance reporting another identifier.
	#[error("factory for type id {id} produced an instance of type id {produced}")]
	FactoryTypeMismatch {
		/// Identifier being registered.
		id: TypeId,
		/// Identifier reported by the produced instance.
		produced: TypeId,
	},
	/// Decode encountered an identifier with no bound factory.
	#[error("unknown type id {id}")]
	UnknownTypeId {
		/// Unbound identifier.
		id: TypeId,
	},
	/// Container nesting exceeded the configured ceiling.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Terminator found inside a fixed-count struct sequence.
	#[error("terminator tag not permitted in a struct (element {index})")]
	InvalidStructure {
		/// Element position of the terminator.
		index: usize,
	},
	/// Root of a stream was a bare terminator.
	#[error("unexpected terminator tag at root")]
	UnexpectedEnd,
	/// Value replacement would change a tag's identity.
	#[error("type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		/// Identity of the tag being updated.
		expected: TypeId,
		/// Identity of the replacement value.
		got: TypeId,
	},
	/// List element does not match the list's element type.
	#[error("list element type mismatch: list holds {expected}, got {got}")]
	ListTypeMismatch {
		/// Element type of the list.
		expected: TypeId,
		/// Identity of the rejected element.
		got: TypeId,
	},
	/// List header carries an element type that cannot hold elements.
	#[error("invalid list element type {id} for {count} elements")]
	InvalidListType {
		/// Declared element type.
		id: TypeId,
		/// Declared element count.
		count: usize,
	},
	/// Length prefix was negative.
	#[error("negative length {len} for {kind}")]
	NegativeLength {
		/// Payload kind being decoded.
		kind: &'static str,
		/// Parsed signed length.
		len: i32,
	},
	/// Length prefix or in-memory length exceeded the configured ceiling.
	#[error("{kind} length {len} exceeds limit {max}")]
	LengthTooLarge {
		/// Payload kind being encoded or decoded.
		kind: &'static str,
		/// Offending length.
		len: usize,
		/// Maximum permitted length.
		max: usize,
	},
	/// String does not fit a two-byte length prefix.
	#[error("string of {len} bytes exceeds the u16 length prefix")]
	StringTooLong {
		/// Encoded byte length.
		len: usize,
	},
	/// String payload is not valid UTF-8.
	#[error("string payload is not valid UTF-8")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
	/// Decompression output exceeded the safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
