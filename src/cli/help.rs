//! CLI help text.

pub fn print() {
    println!("Bytepass - password generator with unbiased charset filtering");
    println!();
    println!("Draws bytes from /dev/urandom and keeps only those matching the");
    println!("selected classes, so every character is uniformly likely.");
    println!();
    println!("USAGE:");
    println!("  bytepass [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!(" Charset (at least one required; they combine):");
    println!("  -l, --lower            Lowercase letters (a-z)");
    println!("  -u, --upper            Uppercase letters (A-Z)");
    println!("  -d, --digit            Digits (0-9)");
    println!("  -a, --ascii            All printable ASCII except space");
    println!("  -c, --charset <CHARS>  Extra allowed characters");
    println!();
    println!(" Output:");
    println!("  -n, --length <N>       Characters per password (default: 20)");
    println!("  -r, --repeat <N>       How many passwords to generate (default: 1)");
    println!();
    println!(" Info:");
    println!("  -h, --help             Display this help message");
    println!("  -v, --version          Display version");
    println!();
    println!("Short flags combine: `bytepass -lud` allows letters and digits.");
    println!();
    println!("EXAMPLES:");
    println!("  bytepass -a                  One password, full printable ASCII");
    println!("  bytepass -lud -n 32          32 characters, letters and digits");
    println!("  bytepass -d -c 'abcdef'      Hex-style charset");
    println!("  bytepass -l -r 5             Five lowercase passwords");
}
