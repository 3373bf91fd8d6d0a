use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process::ExitCode;

use md5sum::{Md5, Md5Digest};

fn digest_reader<R: Read>(mut reader: R) -> io::Result<Md5Digest> {
    let mut hasher = Md5::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize())
}

fn digest_path(name: &str) -> io::Result<Md5Digest> {
    if name == "-" {
        digest_reader(io::stdin().lock())
    } else {
        digest_reader(BufReader::new(File::open(name)?))
    }
}

fn main() -> ExitCode {
    let mut args = env::args();
    let me = args.next().unwrap_or_else(|| "md5sum".to_string());
    let mut names: Vec<String> = args.collect();
    if names.is_empty() {
        names.push("-".to_string());
    }

    let mut status = ExitCode::SUCCESS;
    for name in &names {
        match digest_path(name) {
            Ok(digest) => println!("{digest}  {name}"),
            Err(e) => {
                eprintln!("{me}: {name}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
