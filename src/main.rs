use clap::{Parser, Subcommand};
use unit_formatter::{
    bit_format, byte_format, format_memory_peak_usage, format_memory_usage, DEFAULT_FORMAT_CODE,
};

#[derive(Parser)]
#[command(name = "unitfmt")]
#[command(about = "Format bit and byte quantities as human-readable strings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a byte count (powers of 1024)
    Bytes {
        /// Number of bytes
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Format code: BF, DF, S, B, D (lowercase s/b/d for lowercase units)
        #[arg(short, long, default_value = DEFAULT_FORMAT_CODE)]
        code: String,
    },

    /// Format a bit count (powers of 1000)
    Bits {
        /// Number of bits
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Format code: BF, DF, S, B, D (lowercase s/b/d for lowercase units)
        #[arg(short, long, default_value = DEFAULT_FORMAT_CODE)]
        code: String,
    },

    /// Show this process's own allocation usage
    Usage {
        /// Count allocator block sizes instead of requested sizes
        #[arg(short, long)]
        real: bool,

        /// Show the peak instead of the current usage
        #[arg(short, long)]
        peak: bool,

        /// Format code
        #[arg(short, long, default_value = DEFAULT_FORMAT_CODE)]
        code: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bytes { value, code } => byte_format(value, &code),
        Commands::Bits { value, code } => bit_format(value, &code),
        Commands::Usage { real, peak, code } => {
            if peak {
                format_memory_peak_usage(real, &code)
            } else {
                format_memory_usage(real, &code)
            }
        }
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
