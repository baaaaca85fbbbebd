//! This is the command line tool that loads an input file and either packs
//! or unpacks it. Unpacking can be limited to a window of the decoded stream.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use packbits::{unpack_window_to_vec, PackBitsDecoder, PackBitsEncoder};
use packbits::{Decoder, Encoder};

use std::process::ExitCode;
use std::{fs, time::Instant};
use std::{fs::File, io::Write};

const FILE_EXTENSION: &str = ".pb";

fn save_file(data: &[u8], path: &str) -> bool {
    let res = File::create(path).and_then(|mut f| f.write_all(data));
    match res {
        Ok(()) => {
            log::info!("Wrote {}.", &path);
            true
        }
        Err(err) => {
            log::error!("Unable to write {}: {}", &path, err);
            false
        }
    }
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// Pack or unpack 'input' into 'output'. Returns the number of bytes read
/// and written.
fn handle_buffers(
    is_compress: bool,
    window: Option<(usize, usize)>,
    input: &[u8],
    output: &mut Vec<u8>,
) -> (usize, usize) {
    if is_compress {
        log::info!("Packing {} bytes", input.len());
        let mut encoder = PackBitsEncoder::new(input, output);
        let written = encoder.encode();
        return (input.len(), written);
    }

    if let Some((offset, length)) = window {
        log::info!("Unpacking bytes {}..{}", offset, offset + length);
        output.extend(unpack_window_to_vec(input, offset, length));
        return (input.len(), output.len());
    }

    log::info!("Unpacking {} bytes", input.len());
    let mut decoder = PackBitsDecoder::new(input, output);
    decoder.decode().unwrap_or((0, 0))
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Unpack the packed output and compare it to the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Unpack the input")
                .action(ArgAction::SetTrue)
                .conflicts_with("compress"),
        )
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Pack the input")
                .conflicts_with("decompress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file")
                .num_args(1),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_name("N")
                .help("First byte of the unpacked window")
                .value_parser(value_parser!(usize))
                .requires("length")
                .num_args(1),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .value_name("N")
                .help("Number of bytes in the unpacked window")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let mut cli_compress = matches.get_flag("compress");
    let cli_decompress = matches.get_flag("decompress");
    let cli_checked_mode = matches.get_flag("checked");
    let mut cli_output_path = matches.get_one::<String>("output").cloned();
    let cli_window = matches.get_one::<usize>("length").map(|length| {
        let offset = matches.get_one::<usize>("offset").copied();
        (offset.unwrap_or(0), *length)
    });

    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path.clone(),
        None => return ExitCode::FAILURE,
    };
    let input = match fs::read(&input_path) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Can't open the input file {}: {}", input_path, err);
            return ExitCode::FAILURE;
        }
    };

    // The user did not specify if this is compress or decompress. Try to
    // figure out using the extension and the window flags.
    let ends_with_ext = input_path.ends_with(FILE_EXTENSION);
    let has_window = cli_window.is_some();
    if !cli_compress && !cli_decompress && !ends_with_ext && !has_window {
        cli_compress = true;
    }
    if cli_compress && has_window {
        log::error!("A window can only be used when unpacking");
        return ExitCode::FAILURE;
    }

    // Come up with a file name.
    if cli_output_path.is_none() {
        if input_path.ends_with(FILE_EXTENSION) {
            // remove the extension.
            let end = input_path.len() - FILE_EXTENSION.len();
            cli_output_path = Some(String::from(&input_path[0..end]));
        } else if cli_compress {
            // Add the extension.
            cli_output_path = Some(input_path.clone() + FILE_EXTENSION);
        } else {
            cli_output_path = Some(input_path.clone() + ".out");
        }
    }

    let out = cli_output_path.unwrap_or_default();
    let mut dest = Vec::new();
    let _timer = Timer::new();

    if cli_compress {
        let (from, to) = handle_buffers(true, None, &input, &mut dest);
        log::info!("Packed from {} to {} bytes.", from, to);
        if to > 0 {
            let ratio = from as f64 / to as f64;
            log::info!("Compression ratio is {:.4}x.", ratio);
        }
        if !save_file(&dest, &out) {
            return ExitCode::FAILURE;
        }

        if cli_checked_mode {
            let mut decoded = Vec::new();
            let (from, to) = handle_buffers(false, None, &dest, &mut decoded);
            log::info!("Unpacked from {} to {} bytes.", from, to);
            if input != decoded {
                log::error!("Incorrect!");
                return ExitCode::FAILURE;
            }
            log::info!("Correct!");
        }
        return ExitCode::SUCCESS;
    }

    let (from, to) = handle_buffers(false, cli_window, &input, &mut dest);
    log::info!("Unpacked from {} to {} bytes.", from, to);
    if !save_file(&dest, &out) {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
