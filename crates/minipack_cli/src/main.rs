mod args;
mod types;

use std::{io::Write, process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{InputArgs, LogArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minipack::{Bundler, BundlerOptions, OutputAsset};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  log: LogArgs,
}

fn print_output_assets(outputs: &[OutputAsset]) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content.len() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len()
    }

    assets.push((&output.filename, size, output.module_count));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size, module_count) in assets {
    let filename_len = filename.len();

    eprintln!(
      "{}{:left$} {}{}{:right$}{} kB",
      color.paint(filename.as_str()),
      "",
      dim.paint(format!("{module_count} modules")),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    )
  }
}

fn init_tracing() {
  // e.g. `MINIPACK_LOG=minipack=debug`
  let filter = EnvFilter::try_from_env("MINIPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
  init_tracing();

  let args = Commands::parse();
  let InputArgs { cwd, input, platform } = args.input;

  let bundler = match Bundler::new(BundlerOptions {
    input: input.map(Into::into),
    cwd,
    platform: platform.map(Into::into),
    entry_filenames: args.output.entry_filenames,
    dir: args.output.dir,
    file: args.output.file,
  }) {
    Ok(bundler) => bundler,
    Err(errors) => return report_errors(&errors),
  };

  let start = Instant::now();
  let result = if args.output.stdout { bundler.generate() } else { bundler.write() };

  match result {
    Ok(output) => {
      if !args.log.silent {
        for warning in &output.warnings {
          eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }
      }

      if args.output.stdout {
        let mut stdout = std::io::stdout().lock();
        for asset in &output.assets {
          if let Err(err) = stdout.write_all(asset.content_as_bytes()) {
            eprintln!("{} {}", Colour::Red.paint("Error:"), err);
            return ExitCode::FAILURE;
          }
        }
        return ExitCode::SUCCESS;
      }

      if !args.log.silent {
        print_output_assets(&output.assets);
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        eprintln!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }

      ExitCode::SUCCESS
    }
    Err(errors) => report_errors(&errors),
  }
}

fn report_errors(errors: &minipack::BuildError) -> ExitCode {
  for error in errors.iter() {
    eprintln!("{} {}", Colour::Red.paint("Error:"), error);
  }
  ExitCode::FAILURE
}
