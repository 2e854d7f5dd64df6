mod commands;
mod core;
mod release;
mod ui;
mod utils;

use clap::Parser;
use core::error::{BundleError, print_error};
use core::layout::ReleaseLayout;

/// Build PersonalityVectorExample and bundle the release output into a versioned zip
///
/// Run from the project root. The previous release directory is removed, the
/// project is built with `dotnet build --configuration Release`, LICENSE.md and
/// README.md are copied next to the output, and everything is zipped into
/// dist/PersonalityVectorExample_{version}.zip.
#[derive(Parser)]
#[command(name = "bundle-release")]
#[command(version, about)]
#[command(styles = get_styles())]
struct Cli {}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let Cli {} = Cli::parse();

  let project_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let layout = ReleaseLayout::from_anchor(&project_root);

  if let Err(err) = commands::run_bundle(&layout) {
    handle_error(err);
  }
}

fn handle_error(err: BundleError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
