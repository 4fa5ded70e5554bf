//! Subset traversal and text rendering for decoded SYNOP messages.
//!
//! Uncompressed and compressed messages expose the same declared keys
//! in two different physical shapes. Uncompressed data repeats each key
//! once per subset, with `#N#` replication prefixes and explicit subset
//! boundary keys in between. Compressed data declares every key once
//! and stores one array element per subset, so the key stream is walked
//! again for every subset position.

use std::io::Write;

use crate::catalog;
use crate::codec::{BufrMessage, BufrSource, MessageRead};
use crate::error::BufrError;
use crate::keys;
use crate::renderer::ParameterLine;

/// Decode settings, passed in explicitly instead of living in globals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Print header keys only; no subset decoding.
    pub header_only: bool,
    /// Report skipped keys and undefined parameters on stderr.
    pub debug: bool,
}

/// Pulls every message out of `source` and renders it to `out`.
///
/// A message that fails to decode is reported on stderr and skipped;
/// the stream continues. Returns the number of messages obtained, so
/// the caller can tell an empty stream apart from a rendered one and
/// report `Failed to read bufr from: <path>` itself.
pub fn render_stream<S, W>(
    source: &mut S,
    config: &DecodeConfig,
    out: &mut W,
) -> Result<usize, BufrError>
where
    S: BufrSource,
    W: Write,
{
    let mut count = 0;
    loop {
        let mut message = match source.next_message() {
            MessageRead::End => break,
            MessageRead::DecodeError(e) => {
                eprintln!("Error reading BUFR: \n{e}");
                continue;
            }
            MessageRead::Message(message) => message,
        };
        count += 1;

        if config.header_only {
            writeln!(out, "***Message {count}")?;
            print_header(&message, out)?;
            continue;
        }

        // Header keys are readable before unpacking the data section.
        let subset_count = message
            .scalar("numberOfSubsets")
            .and_then(|v| v.as_long())
            .unwrap_or(1);
        let compressed = message.scalar("compressedData").and_then(|v| v.as_long()) == Some(1);

        if let Err(e) = message.set_unpack() {
            eprintln!("Error reading BUFR: \n{e}");
            continue;
        }
        writeln!(out, "\nMessage {count}")?;

        if compressed {
            walk_compressed(&message, subset_count, config, out)?;
        } else {
            walk_uncompressed(&message, subset_count, config, out)?;
        }
    }
    Ok(count)
}

/// Prints each header key with its array-form value, one `#`-prefixed
/// line per key.
fn print_header<M, W>(message: &M, out: &mut W) -> Result<(), BufrError>
where
    M: BufrMessage,
    W: Write,
{
    for key in catalog::HEADER_KEYS {
        match message.array(key) {
            Some(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                writeln!(out, "#{key}--> [{}]", values.join(", "))?;
            }
            None => writeln!(out, "#{key}--> missing")?,
        }
    }
    Ok(())
}

/// Single pass over the declared keys; a boundary key opens each subset.
fn walk_uncompressed<M, W>(
    message: &M,
    subset_count: i64,
    config: &DecodeConfig,
    out: &mut W,
) -> Result<(), BufrError>
where
    M: BufrMessage,
    W: Write,
{
    let mut subset = 1i64;
    // Initialized up front: WIGOS-only messages may carry parameters
    // before the first boundary marker.
    let mut index = 0u32;
    for key in message.keys() {
        if catalog::is_header_key(&key) {
            continue;
        }
        let Some(value) = message.scalar(&key) else {
            if config.debug {
                eprintln!("WARN: failed to fetch {key}");
            }
            continue;
        };
        let name = keys::strip_replication(&key);
        if keys::is_subset_boundary(name) {
            let number = if subset_count == 1 { 1 } else { subset };
            writeln!(out, "\nSubset {number}\n")?;
            subset += 1;
            index = 0;
            continue;
        }
        let Some(entry) = catalog::lookup(name) else {
            if config.debug {
                report_undefined(message, &key, name);
            }
            continue;
        };
        index += 1;
        let line = ParameterLine {
            index,
            label: entry.mnemonic,
            value: &value,
            description: entry.description,
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Re-walks the shared key stream once per subset position, selecting
/// that subset's element from each key's value array.
fn walk_compressed<M, W>(
    message: &M,
    subset_count: i64,
    config: &DecodeConfig,
    out: &mut W,
) -> Result<(), BufrError>
where
    M: BufrMessage,
    W: Write,
{
    for position in 0..subset_count.max(0) as usize {
        let mut index = 0u32;
        writeln!(out, "\nSubset {}\n", position + 1)?;
        for key in message.keys() {
            if catalog::is_header_key(&key) {
                continue;
            }
            let Some(values) = message.array(&key) else {
                if config.debug {
                    eprintln!("WARN: failed to fetch {key}");
                }
                continue;
            };
            let name = keys::strip_replication(&key);
            if keys::is_subset_boundary(name) {
                continue;
            }
            let Some(entry) = catalog::lookup(name) else {
                if config.debug {
                    report_undefined(message, &key, name);
                }
                continue;
            };
            // A single element is shared by all subsets; otherwise the
            // array must carry one element per subset.
            let value = match values.len() {
                1 => values[0].clone(),
                n if n == subset_count as usize => values[position].clone(),
                n => {
                    eprintln!("WARN: {name}: {n} values for {subset_count} subsets, skipping");
                    continue;
                }
            };
            let value = value.trimmed();
            index += 1;
            let line = ParameterLine {
                index,
                label: entry.mnemonic,
                value: &value,
                description: entry.description,
            };
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn report_undefined<M: BufrMessage>(message: &M, key: &str, name: &str) {
    match message.descriptor_code(key) {
        Some(code) => eprintln!("Missing definition of {name} (descriptor {code:06})"),
        None => eprintln!("Missing definition of {name}"),
    }
}
