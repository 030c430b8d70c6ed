use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use huffpack::{compress, decompress, CompressStats, DecompressStats};

#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(about = "Compress and decompress files with Huffman coding")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let is_stdin = args.input.to_str() == Some("-");
    let is_stdout = args.output.to_str() == Some("-");

    let output: Box<dyn Write> = if is_stdout {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(File::create(&args.output)?))
    };

    let start = std::time::Instant::now();

    if args.decompress {
        let input: Box<dyn Read> = if is_stdin {
            Box::new(io::stdin().lock())
        } else {
            Box::new(BufReader::new(File::open(&args.input)?))
        };

        let stats = decompress(input, output)?;
        if args.verbose {
            print_decompress_stats(&stats, start.elapsed());
        }
    } else {
        // The frequency scan needs a rewindable source: files are seekable
        // as-is, stdin is buffered to memory first.
        let stats = if is_stdin {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            compress(Cursor::new(data), output)?
        } else {
            compress(BufReader::new(File::open(&args.input)?), output)?
        };

        if args.verbose {
            print_compress_stats(&stats, start.elapsed());
        }
    }

    Ok(())
}

fn print_compress_stats(stats: &CompressStats, elapsed: std::time::Duration) {
    eprintln!("Compression complete:");
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Distinct symbols: {}", stats.distinct_symbols);
    if stats.input_bytes > 0 {
        eprintln!(
            "  Ratio:            {:.3}",
            stats.output_bytes as f64 / stats.input_bytes as f64
        );
    }
    eprintln!("  Time:             {:.2?}", elapsed);
    eprintln!(
        "  Throughput:       {:.1} MB/s",
        stats.input_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
    );
}

fn print_decompress_stats(stats: &DecompressStats, elapsed: std::time::Duration) {
    eprintln!("Decompression complete:");
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Time:             {:.2?}", elapsed);
    eprintln!(
        "  Throughput:       {:.1} MB/s",
        stats.output_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
    );
}
