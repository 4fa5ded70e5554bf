use std::io::Write;
use std::path::{Path, PathBuf};

use bufr_synop::{BufrError, DecodeConfig};
use clap::{Command, arg, crate_version};

fn app() -> Command {
    Command::new("synopdump")
        .version(crate_version!())
        .about("Renders BUFR land SYNOP observation files as readable text")
        .arg(
            arg!(-f --file <FILE> "BUFR file to decode")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--header "Print the header info instead of decoding subsets"))
        .arg(arg!(-d --debug "Report skipped and undefined keys on stderr"))
}

fn real_main() -> anyhow::Result<()> {
    let matches = app().get_matches();

    let Some(path) = matches.get_one::<PathBuf>("file") else {
        anyhow::bail!("--file option not specified (see --help for usage)");
    };
    let config = DecodeConfig {
        header_only: matches.get_flag("header"),
        debug: matches.get_flag("debug"),
    };

    let mut stdout = std::io::stdout().lock();
    let count = decode_file(path, &config, &mut stdout)?;
    if count == 0 {
        // Not a crash: the file just held nothing decodable.
        writeln!(
            stdout,
            "{}",
            BufrError::NoMessagesDecoded(path.display().to_string())
        )?;
    }
    Ok(())
}

#[cfg(feature = "eccodes")]
fn decode_file<W: Write>(path: &Path, config: &DecodeConfig, out: &mut W) -> anyhow::Result<usize> {
    let mut source = match bufr_synop::EccodesSource::open(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading BUFR: \n{e}");
            return Ok(0);
        }
    };
    Ok(bufr_synop::render_stream(&mut source, config, out)?)
}

#[cfg(not(feature = "eccodes"))]
fn decode_file<W: Write>(
    _path: &Path,
    _config: &DecodeConfig,
    _out: &mut W,
) -> anyhow::Result<usize> {
    anyhow::bail!("no BUFR codec backend compiled in; rebuild with `--features eccodes`")
}

fn main() {
    if let Err(ref e) = real_main() {
        let red = console::Style::new().red();
        eprintln!("{}: {}", red.apply_to("error"), e);
        std::process::exit(1);
    }
}
