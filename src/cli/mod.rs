mod flags;
mod help;
mod parse;
mod prompts;

pub use flags::CliFlags;
pub use parse::parse;

use crate::pass::{self, CharsetConfig, PasswordRequest};
use crate::rand::DevUrandom;

/// Parse arguments, generate, and exit non-zero on any failure.
pub fn run(args: Vec<String>) {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => prompts::fatal(&e.to_string()),
    };

    if flags.help {
        help::print();
        return;
    }
    if flags.version {
        println!("bytepass {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = CharsetConfig {
        lower: flags.lower,
        upper: flags.upper,
        digit: flags.digit,
        ascii: flags.ascii,
        extra: flags.charset.map(String::into_bytes).unwrap_or_default(),
    };
    let request = PasswordRequest {
        length: flags.length.unwrap_or(pass::DEFAULT_LENGTH),
        repeat: flags.repeat.unwrap_or(1),
    };

    // Surface a bad charset before touching the random device.
    if let Err(e) = config.validate() {
        prompts::fatal(&e.to_string());
    }

    let mut source = match DevUrandom::open() {
        Ok(source) => source,
        Err(e) => prompts::fatal(&e.to_string()),
    };

    let stdout = std::io::stdout();
    if let Err(e) = pass::generate_batch(&config, &request, &mut source, stdout.lock()) {
        prompts::fatal(&e.to_string());
    }
}
