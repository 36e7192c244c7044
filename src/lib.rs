#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

//! Padding that records its own length.
//!
//! A padding block of N bytes encodes the number N, and can be read from
//! either end: forward from its first byte, or backward from its last. See
//! [`Varpad`] for the block codec and [`envelope`] for padding whole messages
//! to a modulus.

use {
  self::{
    arguments::Arguments,
    settings::Settings,
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  clap::Parser,
  rvlq::{DecodeState, Decoded, Encoding},
  serde::{Deserialize, Serialize},
  std::{
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io::{self, BufRead, BufReader, Read, Write},
    path::{Path, PathBuf},
    process,
    str::FromStr,
  },
  thiserror::Error,
};

pub use self::{
  options::Options,
  position::Position,
  varpad::{fill_with_padding, Progress, Varpad},
};

pub mod arguments;
pub mod envelope;
pub mod options;
mod position;
pub mod settings;
pub mod subcommand;
pub mod varpad;

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let minify = args.options.minify;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print_json(minify);
      }
    }
  }
}
