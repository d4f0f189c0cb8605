use std::path::PathBuf;

use matwire::codec::{Native, decode_with, validate};
use tracing::warn;

use crate::cmd::input::read_payload;
use crate::cmd::json::{native_to_json, scalar_to_json};
use crate::cmd::util::CodecArgs;

#[derive(clap::Args)]
pub struct Args {
	/// Payload file (framed unless `--raw`; zstd input is detected).
	pub path: PathBuf,
	/// Input has no leading digest.
	#[arg(long)]
	pub raw: bool,
	/// Print the decoded value as JSON.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub codec: CodecArgs,
}

/// Output truncation limits for the text rendering.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single map.
	pub max_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of items printed for lists and array previews.
	pub max_list_items: usize,
	/// Maximum recursive print depth.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries: 80,
			max_string_len: 200,
			max_list_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Decode a payload file and print it.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let opt = args.codec.options()?;
	let (compression, bytes) = read_payload(&args.path)?;
	let payload = if args.raw { bytes.as_slice() } else { validate(&bytes)? };
	let (value, end) = decode_with(payload, 0, &opt)?;
	if end != payload.len() {
		warn!(trailing = payload.len() - end, "payload has trailing bytes after the first value");
	}

	if args.json {
		println!("{}", serde_json::to_string_pretty(&native_to_json(&value, &opt)?)?);
		return Ok(());
	}

	println!("path: {}", args.path.display());
	println!("compression: {}", compression.as_str());
	println!("framed: {}", !args.raw);
	println!("payload_len: {}", payload.len());
	println!("decoded:");
	print_value(&value, 0, 0, PrintOptions::default());
	Ok(())
}

fn print_value(value: &Native, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Native::Scalar(v) => println!("{pad}{}", scalar_to_json(*v)),
		Native::Text(v) => println!("{pad}\"{}\"", truncate(v, options.max_string_len)),
		Native::Array(array) => {
			let preview: Vec<String> = (0..array.len().min(options.max_list_items))
				.filter_map(|index| array.data().get(index))
				.map(|scalar| scalar_to_json(scalar).to_string())
				.collect();
			let more = if array.len() > options.max_list_items { ", ..." } else { "" };
			println!("{pad}{}{:?} [{}{more}]", array.element_type().as_str(), array.shape(), preview.join(", "));
		}
		Native::Chars(chars) => {
			println!("{pad}char{:?}", chars.shape());
			for row in chars.rows().take(options.max_list_items) {
				println!("{pad}  \"{}\"", truncate(&String::from_utf8_lossy(row), options.max_string_len));
			}
		}
		Native::List(items) => {
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_list_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_list_items {
				println!("{pad}  ... {} more", items.len() - options.max_list_items);
			}
			println!("{pad}]");
		}
		Native::Map(entries) => {
			if depth >= options.max_print_depth {
				println!("{pad}{{ ... {} entries }}", entries.len());
				return;
			}
			println!("{pad}{{");
			for (key, item) in entries.iter().take(options.max_entries) {
				print!("{pad}  {key} = ");
				if matches!(item, Native::Map(_) | Native::List(_) | Native::Chars(_)) {
					println!();
					print_value(item, indent + 4, depth + 1, options);
				} else {
					print_value(item, 0, depth + 1, options);
				}
			}
			if entries.len() > options.max_entries {
				println!("{pad}  ... {} more entries", entries.len() - options.max_entries);
			}
			println!("{pad}}}");
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests {
	use super::truncate;
	use crate::cmd::test_support::{run_matwire, write_scratch};

	#[test]
	fn truncate_marks_cut_strings() {
		assert_eq!(truncate("abcdef", 3), "abc...");
		assert_eq!(truncate("abc", 3), "abc");
	}

	#[test]
	fn text_output_lists_map_entries() {
		let json = write_scratch("text_output_lists_map_entries", "in.json", br#"{"gain": 2.5, "name": "pa"}"#);
		let out = json.with_extension("dat");
		let status = run_matwire(&["encode", json.to_str().expect("utf8 path"), "-o", out.to_str().expect("utf8 path")]);
		assert!(status.status.success());

		let output = run_matwire(&["decode", out.to_str().expect("utf8 path")]);
		assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
		let stdout = String::from_utf8_lossy(&output.stdout);
		assert!(stdout.contains("framed: true"));
		assert!(stdout.contains("gain = 2.5"));
		assert!(stdout.contains("name = \"pa\""));
	}
}
