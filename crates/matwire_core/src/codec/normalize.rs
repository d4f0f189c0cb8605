use tracing::trace;

use crate::codec::pack::MAX_LIST_ENTRIES;
use crate::codec::{CharArray, CodecError, CodecOptions, Collection, Native, NumericArray, Record, Result, Value};

/// Map caller data onto the four canonical wire variants.
///
/// Scalars become 1x1 numeric arrays, text becomes a 1xN char array under the
/// declared encoding, maps become records, and lists become collections.
pub fn normalize(native: &Native, opt: &CodecOptions) -> Result<Value> {
	normalize_impl(native, opt, 0)
}

fn normalize_impl(native: &Native, opt: &CodecOptions, depth: u32) -> Result<Value> {
	match native {
		Native::Scalar(scalar) => Ok(Value::Numeric(NumericArray::from_scalar(*scalar))),
		Native::Text(text) => {
			let bytes = opt.encoding.encode(text).ok_or_else(|| CodecError::UnsupportedType {
				detail: format!("text is not representable as {}", opt.encoding),
			})?;
			Ok(Value::Char(CharArray::row(bytes)))
		}
		Native::Array(array) => Ok(Value::Numeric(array.clone())),
		Native::Chars(chars) => Ok(Value::Char(chars.clone())),
		Native::Map(entries) => {
			check_depth(depth, opt)?;
			if entries.len() > MAX_LIST_ENTRIES {
				return Err(CodecError::EncodingLimitExceeded {
					what: "field names",
					count: entries.len() as u64,
					max: MAX_LIST_ENTRIES as u64,
				});
			}

			let mut record = Record::new();
			for (name, value) in entries {
				record.push(name.clone(), normalize_impl(value, opt, depth + 1)?)?;
			}
			Ok(Value::Record(record))
		}
		Native::List(items) => {
			let (shape, leaves) = fold_list(items);
			trace!(?shape, "folded list into collection");
			let levels = list_levels(&shape);
			check_depth(depth.saturating_add(levels - 1), opt)?;
			let items = leaves
				.into_iter()
				.map(|leaf| normalize_impl(leaf, opt, depth + levels))
				.collect::<Result<Vec<_>>>()?;
			Collection::new(shape, items).map(Value::Collection)
		}
	}
}

/// Fold lists of equal-length lists into extra dimensions.
///
/// Mirrors how the reference client builds object arrays, so `[[a, b], [c, d]]`
/// travels as a 2x2 collection. Ragged lists stay one-dimensional.
fn fold_list(items: &[Native]) -> (Vec<usize>, Vec<&Native>) {
	let mut shape = vec![items.len()];
	let mut level: Vec<&Native> = items.iter().collect();

	while shape.len() < MAX_LIST_ENTRIES {
		let Some(Native::List(first)) = level.first() else {
			break;
		};
		let len = first.len();
		if !level.iter().all(|item| matches!(item, Native::List(inner) if inner.len() == len)) {
			break;
		}
		shape.push(len);
		level = level.into_iter().flat_map(|item| item.as_list().unwrap_or_default()).collect();
	}

	(shape, level)
}

/// Turn a decoded wire value back into caller data.
///
/// Single-element numeric arrays become bare scalars, single-row char arrays
/// become text, records become maps, and collections become nested lists.
pub fn collapse(value: Value, opt: &CodecOptions) -> Result<Native> {
	collapse_impl(value, opt, 0)
}

fn collapse_impl(value: Value, opt: &CodecOptions, depth: u32) -> Result<Native> {
	match value {
		Value::Numeric(array) => {
			if array.len() == 1
				&& let Some(scalar) = array.data().get(0)
			{
				return Ok(Native::Scalar(scalar));
			}
			Ok(Native::Array(array))
		}
		Value::Char(chars) => {
			if chars.row_count() != 1 {
				return Ok(Native::Chars(chars));
			}
			let text = opt.encoding.decode(chars.bytes()).ok_or(CodecError::InvalidText {
				encoding: opt.encoding,
				what: "char array",
			})?;
			Ok(Native::Text(text))
		}
		Value::Record(record) => {
			check_depth(depth, opt)?;
			let entries = record
				.into_fields()
				.into_iter()
				.map(|(name, value)| Ok((name, collapse_impl(value, opt, depth + 1)?)))
				.collect::<Result<Vec<_>>>()?;
			Ok(Native::Map(entries))
		}
		Value::Collection(collection) => {
			let (shape, items) = collection.into_parts();
			let levels = list_levels(&shape);
			check_depth(depth.saturating_add(levels - 1), opt)?;
			check_nested_nodes(&shape, opt)?;
			let mut leaves = items.into_iter().map(|item| collapse_impl(item, opt, depth + levels));
			nest(&shape, &mut leaves)
		}
	}
}

fn nest(shape: &[usize], leaves: &mut impl Iterator<Item = Result<Native>>) -> Result<Native> {
	let Some((dim, rest)) = shape.split_first() else {
		return leaves.next().unwrap_or_else(|| {
			Err(CodecError::ShapeMismatch {
				shape: shape.to_vec(),
				expected: 1,
				actual: 0,
			})
		});
	};

	let mut items = Vec::new();
	for _ in 0..*dim {
		items.push(nest(rest, leaves)?);
	}
	Ok(Native::List(items))
}

/// Nesting levels a collection of `shape` occupies once rendered as lists.
///
/// Every dimension is one list level; a zero-dimensional collection still
/// counts as one composite. Shapes never exceed 255 dimensions.
fn list_levels(shape: &[usize]) -> u32 {
	u32::try_from(shape.len().max(1)).unwrap_or(u32::MAX)
}

/// Number of nodes a nested rendering of `shape` creates, saturating.
pub fn nested_nodes(shape: &[usize]) -> usize {
	let mut prefix = 1_usize;
	let mut nodes = 0_usize;
	for dim in shape {
		prefix = prefix.saturating_mul(*dim);
		nodes = nodes.saturating_add(prefix);
	}
	nodes
}

/// Bound the number of nodes a nested rendering of `shape` would create.
///
/// A shape such as `[u32::MAX, 0]` holds no elements but would still expand
/// into billions of empty lists.
pub fn check_nested_nodes(shape: &[usize], opt: &CodecOptions) -> Result<()> {
	let nodes = nested_nodes(shape);
	if nodes > opt.max_elements {
		return Err(CodecError::EncodingLimitExceeded {
			what: "list nodes",
			count: nodes as u64,
			max: opt.max_elements as u64,
		});
	}
	Ok(())
}

pub(crate) fn check_depth(depth: u32, opt: &CodecOptions) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(CodecError::EncodingLimitExceeded {
			what: "nesting depth",
			count: u64::from(depth) + 1,
			max: u64::from(opt.max_depth),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests;
