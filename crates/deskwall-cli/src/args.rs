//! Command-line grammar and decoding.
//!
//! The accepted shapes:
//!
//! ```text
//! deskwall [position flag] [--color=<hex>] <wallpaper>
//! deskwall (--interval=<s> | --login | --wake) [--random] [position flag] [--color=<hex>] <directory>
//! deskwall --color=<hex>
//! ```
//!
//! Mutual exclusion (one position flag, one schedule option) is enforced
//! here, before resolution; the resolver owns payload validation, so
//! `--interval` and `--color` stay raw strings.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use deskwall_core::Arg;

#[derive(Debug, Parser)]
#[command(name = "deskwall")]
#[command(version)]
#[command(
    about = "Sets wallpaper to a picture, a directory of pictures or a solid color.\nFills the screen by default."
)]
#[command(group(
    ArgGroup::new("target")
        .args(["path", "color"])
        .multiple(true)
        .required(true)
))]
pub struct Cli {
    /// Wallpaper image, or directory of wallpapers with a schedule option
    pub path: Option<String>,

    /// Color to fill the screen with, as an RGB hex code
    #[arg(short = 'C', long, value_name = "hex")]
    pub color: Option<String>,

    /// Scale wallpaper to fill screen [default]
    #[arg(short = 'F', long, group = "position")]
    pub fill: bool,

    /// Fit wallpaper to screen
    #[arg(short = 'f', long, group = "position")]
    pub fit: bool,

    /// Stretch wallpaper to fill screen
    #[arg(short = 's', long, group = "position")]
    pub stretch: bool,

    /// Center wallpaper, scaling it down if it is too large
    #[arg(short = 'c', long, group = "position")]
    pub center: bool,

    /// Tile wallpaper
    #[arg(short = 't', long, group = "position")]
    pub tile: bool,

    /// Interval at which to change wallpaper, in seconds
    #[arg(
        short = 'i',
        long,
        value_name = "s",
        group = "schedule",
        requires = "path"
    )]
    pub interval: Option<String>,

    /// Change wallpaper when logging in
    #[arg(short = 'l', long, group = "schedule", requires = "path")]
    pub login: bool,

    /// Change wallpaper when waking from sleep
    #[arg(short = 'w', long, group = "schedule", requires = "path")]
    pub wake: bool,

    /// Randomize wallpaper selection
    #[arg(short = 'r', long, requires = "schedule")]
    pub random: bool,

    /// Preference store to write (defaults to the Dock's desktoppicture.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Whether the positional path names a directory of wallpapers.
    ///
    /// The schedule options only make sense for a rotating directory, so
    /// any of them switches the positional argument to directory mode.
    fn directory_mode(&self) -> bool {
        self.interval.is_some() || self.login || self.wake
    }

    /// Decode the parsed options into the resolver's input.
    ///
    /// `--fill` contributes nothing: fill is already the default placement.
    pub fn decode(self) -> Vec<Arg> {
        let directory_mode = self.directory_mode();
        let mut args = Vec::new();
        if self.fit {
            args.push(Arg::Fit);
        }
        if self.stretch {
            args.push(Arg::Stretch);
        }
        if self.center {
            args.push(Arg::Center);
        }
        if self.tile {
            args.push(Arg::Tile);
        }
        if let Some(color) = self.color {
            args.push(Arg::Color(color));
        }
        if let Some(interval) = self.interval {
            args.push(Arg::Interval(interval));
        }
        if self.login {
            args.push(Arg::Login);
        }
        if self.wake {
            args.push(Arg::Wake);
        }
        if self.random {
            args.push(Arg::Random);
        }
        if let Some(path) = self.path {
            if directory_mode {
                args.push(Arg::Directory(path));
            } else {
                args.push(Arg::Wallpaper(path));
            }
        }
        args
    }
}
