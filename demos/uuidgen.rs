//! Simple command that prints one UUID of a chosen version, e.g. `uuidgen -v4` or
//! `uuidgen -v5 example.com -ns url`

use std::{env, process::ExitCode};

const USAGE: &str = "Usage: uuidgen -v<version> [options]

Versions:
  -v1             Time-based (RFC 4122)
  -v2             DCE Security (uses current UID)
  -v3 <name>      Name-based MD5 (default namespace: dns)
  -v4             Random (RFC 4122)
  -v5 <name>      Name-based SHA1 (default namespace: dns)
  -v6             Reordered time-based (RFC 9562)
  -v7             Unix epoch time-based (RFC 9562)

Options for v3/v5:
  -ns <namespace>  Namespace: dns, url, oid, x500 (default: dns)";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("-h") || args.first().map(String::as_str) == Some("--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(uuid) => {
            println!("{}", uuid);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<uuidgen::Uuid, String> {
    let Some(version_arg) = args.first() else {
        return Err("missing version argument".to_owned());
    };
    let Some(version_str) = version_arg.strip_prefix("-v") else {
        return Err(format!("unrecognized argument '{}'", version_arg));
    };
    let Ok(version) = version_str.parse::<u8>() else {
        return Err(format!("invalid version: {}", version_str));
    };

    let (name, namespace) = parse_name_args(&args[1..])?;
    uuidgen::generate(version, name.map(str::as_bytes), namespace).map_err(|err| err.to_string())
}

fn parse_name_args(args: &[String]) -> Result<(Option<&str>, Option<uuidgen::Uuid>), String> {
    let mut name = None;
    let mut namespace = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-ns" {
            let Some(token) = iter.next() else {
                return Err("argument to option 'ns' missing".to_owned());
            };
            namespace = Some(uuidgen::ns::resolve(token).map_err(|err| err.to_string())?);
        } else if !arg.starts_with('-') {
            name = Some(arg.as_str());
        } else {
            return Err(format!("unrecognized argument '{}'", arg));
        }
    }

    Ok((name, namespace))
}
