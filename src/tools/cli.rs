use clap::Parser;
use log::{debug, info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

/// Extension added to compressed files unless --suffix says otherwise
pub const DEFAULT_SUFFIX: &str = "comp";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Log level matching this verbosity. Errors are always reported.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct HzOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Extension of compressed files, without the dot
    pub suffix: String,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Zip,
            output: Output::File,
            suffix: DEFAULT_SUFFIX.to_string(),
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    huffzip compresses each file with a Huffman code built from the byte counts of that file.
    The tree is stored ahead of the data, so every file can be restored on its own.

    By default <file> is compressed to <file>.comp. Input files are never removed."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Compress the input files (the default)
    #[clap(short = 'z', long = "compress", conflicts_with_all = &["decompress", "test"])]
    compress: bool,

    /// Decompress the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "test")]
    decompress: bool,

    /// Test compressed file integrity without writing anything
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Only report errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,

    /// Extension used for compressed files
    #[clap(long = "suffix", default_value = "comp")]
    suffix: String,
}

impl From<Args> for HzOpts {
    fn from(args: Args) -> Self {
        let op_mode = match (args.compress, args.decompress, args.test) {
            (_, _, true) => Mode::Test,
            (_, true, _) => Mode::Unzip,
            _ => Mode::Zip,
        };
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        Self {
            files: args.files,
            force_overwrite: args.force,
            op_mode,
            output: if args.stdout {
                Output::Stdout
            } else {
                Output::File
            },
            suffix: args.suffix,
            verbose,
        }
    }
}

/// Parse the command line and set the log level to match.
pub fn hzopts_init() -> HzOpts {
    let opts = HzOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    debug!("---- huffzip initialization start ----");
    info!("Operational mode set to {}", opts.op_mode);
    debug!("Verbosity set to {}", log::max_level());
    debug!("Sending output to {}", opts.output);
    debug!("Compressed file suffix is .{}", opts.suffix);
    if opts.force_overwrite {
        debug!("Forcing file overwriting")
    };
    debug!("---- huffzip initialization end ----");
    opts
}
