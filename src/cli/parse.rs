use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unexpected parameter '{0}'")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--lower" => flags.lower = true,
            "--upper" => flags.upper = true,
            "--digit" => flags.digit = true,
            "--ascii" => flags.ascii = true,
            "--length" => {
                i += 1;
                flags.length = Some(parse_length(take_value(args, i, "--length")?)?);
            }
            "--repeat" => {
                i += 1;
                flags.repeat = Some(parse_repeat(take_value(args, i, "--repeat")?)?);
            }
            "--charset" => {
                i += 1;
                flags.charset = Some(take_value(args, i, "--charset")?.to_string());
            }
            arg if arg.len() > 1 && arg.starts_with('-') && !arg.starts_with("--") => {
                // Short options cluster: -lud. Value-taking options must
                // come last in a cluster.
                let cluster = &arg[1..];
                for (pos, opt) in cluster.char_indices() {
                    match opt {
                        'l' => flags.lower = true,
                        'u' => flags.upper = true,
                        'd' => flags.digit = true,
                        'a' => flags.ascii = true,
                        'h' => flags.help = true,
                        'v' => flags.version = true,
                        'n' | 'r' | 'c' => {
                            if pos + opt.len_utf8() != cluster.len() {
                                return Err(ParseError::MissingValue(format!("-{opt}")));
                            }
                            i += 1;
                            let value = take_value(args, i, &format!("-{opt}"))?;
                            match opt {
                                'n' => flags.length = Some(parse_length(value)?),
                                'r' => flags.repeat = Some(parse_repeat(value)?),
                                _ => flags.charset = Some(value.to_string()),
                            }
                        }
                        _ => return Err(ParseError::UnknownArg(format!("-{opt}"))),
                    }
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ParseError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn parse_length(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

// Repeat must be positive; zero would silently produce nothing.
fn parse_repeat(value: &str) -> Result<usize, ParseError> {
    match value.parse() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber(value.to_string())),
    }
}
