use crate::codec::array::element_count;
use crate::codec::{CharArray, CodecError, NumericArray, Result, Scalar};

/// Canonical wire value: the only shapes the recursive codec understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Homogeneous numeric array.
	Numeric(NumericArray),
	/// Array of text bytes.
	Char(CharArray),
	/// Single named-field record.
	Record(Record),
	/// N-dimensional array of arbitrary values.
	Collection(Collection),
}

impl Value {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Numeric(_) => "numeric",
			Self::Char(_) => "char",
			Self::Record(_) => "record",
			Self::Collection(_) => "collection",
		}
	}
}

/// Ordered named fields of one heterogeneous tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: Vec<(String, Value)>,
}

impl Record {
	/// Empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a field. Names must be unique within a record.
	pub fn push(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
		let name = name.into();
		if self.get(&name).is_some() {
			return Err(CodecError::UnsupportedType {
				detail: format!("duplicate record field {name:?}"),
			});
		}
		self.fields.push((name, value));
		Ok(())
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value)
	}

	/// Fields in insertion order.
	pub fn fields(&self) -> &[(String, Value)] {
		&self.fields
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Consume into ordered fields.
	pub fn into_fields(self) -> Vec<(String, Value)> {
		self.fields
	}
}

/// N-dimensional array whose elements are arbitrary values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
	shape: Vec<usize>,
	items: Vec<Value>,
}

impl Collection {
	/// Build a collection, checking that `shape` holds exactly `items.len()` elements.
	pub fn new(shape: Vec<usize>, items: Vec<Value>) -> Result<Self> {
		let expected = element_count(&shape).unwrap_or(usize::MAX);
		if expected != items.len() {
			return Err(CodecError::ShapeMismatch {
				shape,
				expected,
				actual: items.len(),
			});
		}
		Ok(Self { shape, items })
	}

	/// One-dimensional collection.
	pub fn list(items: Vec<Value>) -> Self {
		Self {
			shape: vec![items.len()],
			items,
		}
	}

	/// Dimensions.
	pub fn shape(&self) -> &[usize] {
		&self.shape
	}

	/// Elements in row-major order.
	pub fn items(&self) -> &[Value] {
		&self.items
	}

	/// Split into shape and elements.
	pub fn into_parts(self) -> (Vec<usize>, Vec<Value>) {
		(self.shape, self.items)
	}
}

/// Caller-facing dynamic data, before normalization and after collapse.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
	/// Bare number or boolean.
	Scalar(Scalar),
	/// Text string.
	Text(String),
	/// Numeric array (never a single element after decode).
	Array(NumericArray),
	/// Char matrix with more than one row.
	Chars(CharArray),
	/// Ordered key/value mapping.
	Map(Vec<(String, Native)>),
	/// Sequence, nested once per collection dimension.
	List(Vec<Native>),
}

impl Native {
	/// Build a map from ordered entries.
	pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Native)>) -> Self {
		Self::Map(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}

	/// Look up a map entry by key.
	pub fn get(&self, key: &str) -> Option<&Native> {
		match self {
			Self::Map(entries) => entries.iter().find(|(name, _)| name == key).map(|(_, value)| value),
			_ => None,
		}
	}

	/// Scalar value, if this is a bare scalar.
	pub fn as_scalar(&self) -> Option<Scalar> {
		match self {
			Self::Scalar(value) => Some(*value),
			_ => None,
		}
	}

	/// Scalar widened to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		self.as_scalar().map(Scalar::as_f64)
	}

	/// Text content.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Sequence items.
	pub fn as_list(&self) -> Option<&[Native]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Text(_) => "text",
			Self::Array(_) => "array",
			Self::Chars(_) => "chars",
			Self::Map(_) => "map",
			Self::List(_) => "list",
		}
	}
}

impl From<Scalar> for Native {
	fn from(value: Scalar) -> Self {
		Self::Scalar(value)
	}
}

impl From<f64> for Native {
	fn from(value: f64) -> Self {
		Self::Scalar(Scalar::F64(value))
	}
}

impl From<f32> for Native {
	fn from(value: f32) -> Self {
		Self::Scalar(Scalar::F32(value))
	}
}

impl From<bool> for Native {
	fn from(value: bool) -> Self {
		Self::Scalar(Scalar::Bool(value))
	}
}

impl From<i32> for Native {
	fn from(value: i32) -> Self {
		Self::Scalar(Scalar::I32(value))
	}
}

impl From<i64> for Native {
	fn from(value: i64) -> Self {
		Self::Scalar(Scalar::I64(value))
	}
}

impl From<u64> for Native {
	fn from(value: u64) -> Self {
		Self::Scalar(Scalar::U64(value))
	}
}

impl From<&str> for Native {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<String> for Native {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<NumericArray> for Native {
	fn from(value: NumericArray) -> Self {
		Self::Array(value)
	}
}

impl From<CharArray> for Native {
	fn from(value: CharArray) -> Self {
		Self::Chars(value)
	}
}

impl From<Vec<Native>> for Native {
	fn from(value: Vec<Native>) -> Self {
		Self::List(value)
	}
}
