//! Dump tool for extracting the decompressed save body
//!
//! Usage: cargo run --bin sav-dump <save.sav> [output.bin]

use std::env;
use std::fs;
use std::process::ExitCode;
use sav_stats::{decompress_body, Result, SaveHeader};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        let program = args.first().map_or("sav-dump", String::as_str);
        eprintln!("Usage: {program} <save.sav> [output.bin]");
        eprintln!("  If output.bin is not specified, writes to body.bin");
        return ExitCode::FAILURE;
    }

    let input_path = &args[1];
    let output_path = args.get(2).map_or("body.bin", String::as_str);

    match dump(input_path, output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dump(input_path: &str, output_path: &str) -> Result<()> {
    eprintln!("Reading: {input_path}");
    let data = fs::read(input_path)?;
    eprintln!("File size: {} bytes", data.len());

    // A damaged header does not prevent dumping the body
    match SaveHeader::parse(&data) {
        Ok(header) => {
            eprintln!("Session: {}", header.session_name);
            eprintln!("Save version: {}", header.save_version);
            eprintln!("Build version: {}", header.build_version);
        }
        Err(e) => eprintln!("Header not decoded: {e}"),
    }

    eprintln!("Decompressing...");
    let reassembly = decompress_body(&data)?;
    eprintln!("Chunk stream offset: 0x{:X}", reassembly.stream_offset);
    eprintln!("Chunks: {} ({})", reassembly.chunk_count, reassembly.end);
    eprintln!("Decompressed size: {} bytes", reassembly.body.len());

    fs::write(output_path, &reassembly.body)?;
    eprintln!("Wrote to: {output_path}");
    Ok(())
}
