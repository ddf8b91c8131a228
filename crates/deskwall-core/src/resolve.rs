//! Resolution of decoded command options into a canonical preference set.
//!
//! Each decoded option contributes an ordered list of key/value write
//! intents; resolution folds those lists onto the defaults, later writes
//! winning per key. Distinct options touch distinct keys (the CLI grammar
//! forbids the genuinely conflicting combinations), so the outcome does not
//! depend on the order the options were supplied.

use std::fs;
use std::path::PathBuf;

use crate::color::Rgb;
use crate::errors::{ResolveError, Result};
use crate::event::ChangeEvent;
use crate::position::Position;
use crate::pref::{PrefKey, PrefSet, PrefValue};

/// A decoded command-line option.
///
/// The CLI grammar has already enforced mutual exclusion (at most one
/// position flag, at most one schedule option) and decided whether the
/// positional argument names a wallpaper or a directory. `--fill` never
/// reaches the resolver: fill is already the default placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Fit,
    Stretch,
    Center,
    Tile,
    /// 6-hex-digit background color payload
    Color(String),
    /// Raw interval payload in seconds
    Interval(String),
    Login,
    Wake,
    Random,
    /// Positional wallpaper path
    Wallpaper(String),
    /// Positional wallpaper directory path
    Directory(String),
}

/// Ordered key/value write intents contributed by one option.
type Writes = Vec<(PrefKey, PrefValue)>;

impl Arg {
    /// Validate this option's payload and compute the writes it contributes.
    ///
    /// A failing payload contributes nothing; there are no partial writes.
    fn writes(&self) -> Result<Writes> {
        match self {
            Arg::Fit => Ok(vec![(PrefKey::Position, PrefValue::Position(Position::Fit))]),
            Arg::Stretch => Ok(vec![(
                PrefKey::Position,
                PrefValue::Position(Position::Stretch),
            )]),
            Arg::Center => Ok(vec![(
                PrefKey::Position,
                PrefValue::Position(Position::Center),
            )]),
            Arg::Tile => Ok(vec![(
                PrefKey::Position,
                PrefValue::Position(Position::Tile),
            )]),
            Arg::Color(input) => {
                let color = Rgb::from_hex(input)?;
                Ok(vec![
                    (PrefKey::Red, PrefValue::Channel(color.red)),
                    (PrefKey::Green, PrefValue::Channel(color.green)),
                    (PrefKey::Blue, PrefValue::Channel(color.blue)),
                ])
            }
            Arg::Interval(input) => {
                let seconds: u64 =
                    input
                        .parse()
                        .map_err(|_| ResolveError::InvalidInterval {
                            input: input.clone(),
                        })?;
                Ok(vec![
                    (
                        PrefKey::ChangeEvent,
                        PrefValue::Event(ChangeEvent::Interval),
                    ),
                    (PrefKey::Interval, PrefValue::Seconds(seconds)),
                ])
            }
            Arg::Login => Ok(vec![(
                PrefKey::ChangeEvent,
                PrefValue::Event(ChangeEvent::Login),
            )]),
            Arg::Wake => Ok(vec![(
                PrefKey::ChangeEvent,
                PrefValue::Event(ChangeEvent::Wake),
            )]),
            Arg::Random => Ok(vec![(PrefKey::Random, PrefValue::Flag(true))]),
            Arg::Wallpaper(raw) => wallpaper_writes(raw),
            Arg::Directory(raw) => directory_writes(raw),
        }
    }
}

/// Resolve decoded options into the canonical preference set.
///
/// Starts from the defaults and folds each option's writes in order,
/// aborting on the first validation failure. No partial set escapes: the
/// caller either gets the complete mapping or an error.
///
/// # Errors
///
/// - `InvalidColor` / `InvalidInterval` — malformed option payload
/// - `InvalidPath` — a path payload could not be made absolute
/// - `WallpaperNotFound` / `WallpaperIsDirectory` — wallpaper payload is
///   missing or names a directory
/// - `DirectoryNotFound` / `NotADirectory` — directory payload is missing
///   or names something else
pub fn resolve(args: &[Arg]) -> Result<PrefSet> {
    let mut prefs = PrefSet::defaults();
    for arg in args {
        for (key, value) in arg.writes()? {
            prefs.put(key, value);
        }
    }
    tracing::debug!(options = args.len(), entries = prefs.len(), "resolved preferences");
    Ok(prefs)
}

fn absolute(raw: &str) -> Result<PathBuf> {
    std::path::absolute(raw).map_err(|source| ResolveError::InvalidPath {
        path: raw.to_string(),
        source,
    })
}

fn wallpaper_writes(raw: &str) -> Result<Writes> {
    let path = absolute(raw)?;
    let meta = fs::metadata(&path).map_err(|_| ResolveError::WallpaperNotFound {
        path: path.clone(),
    })?;
    if meta.is_dir() {
        return Err(ResolveError::WallpaperIsDirectory { path });
    }
    Ok(vec![
        (PrefKey::Wallpaper, PrefValue::Path(path)),
        (PrefKey::SolidColor, PrefValue::Flag(false)),
    ])
}

fn directory_writes(raw: &str) -> Result<Writes> {
    let path = absolute(raw)?;
    let meta = fs::metadata(&path).map_err(|_| ResolveError::DirectoryNotFound {
        path: path.clone(),
    })?;
    if !meta.is_dir() {
        return Err(ResolveError::NotADirectory { path });
    }
    // The Dock does not reselect from a directory on its own; writing the
    // directory as the current item keeps it from showing a stale image.
    Ok(vec![
        (PrefKey::Directory, PrefValue::Path(path.clone())),
        (PrefKey::Current, PrefValue::Path(path)),
        (PrefKey::SolidColor, PrefValue::Flag(false)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use std::sync::OnceLock;

    fn scratch() -> &'static tempfile::TempDir {
        static DIR: OnceLock<tempfile::TempDir> = OnceLock::new();
        DIR.get_or_init(|| tempfile::tempdir().unwrap())
    }

    fn image_file() -> String {
        let path = scratch().path().join("a.png");
        if !path.exists() {
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(b"png").unwrap();
        }
        path.to_string_lossy().into_owned()
    }

    fn wallpaper_dir() -> String {
        scratch().path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_no_options_yields_defaults() {
        let prefs = resolve(&[]).unwrap();
        assert_eq!(prefs, PrefSet::defaults());
    }

    #[test]
    fn test_wallpaper_mode() {
        let file = image_file();
        let prefs = resolve(&[Arg::Wallpaper(file.clone())]).unwrap();

        assert_eq!(
            prefs.get(PrefKey::Wallpaper),
            Some(&PrefValue::Path(PathBuf::from(&file)))
        );
        assert_eq!(prefs.get(PrefKey::SolidColor), Some(&PrefValue::Flag(false)));
        assert_eq!(
            prefs.get(PrefKey::Position),
            Some(&PrefValue::Position(Position::Fill))
        );
        // directory-only keys never appear in wallpaper mode
        for key in [
            PrefKey::Directory,
            PrefKey::Current,
            PrefKey::ChangeEvent,
            PrefKey::Interval,
            PrefKey::Random,
        ] {
            assert!(!prefs.contains(key), "{:?} set in wallpaper mode", key);
        }
    }

    #[test]
    fn test_relative_directory_resolves_to_absolute() {
        let prefs = resolve(&[Arg::Login, Arg::Directory(".".to_string())]).unwrap();
        match prefs.get(PrefKey::Directory) {
            Some(PrefValue::Path(path)) => assert!(path.is_absolute()),
            other => panic!("unexpected directory value: {:?}", other),
        }
    }

    #[test]
    fn test_directory_mode() {
        let dir = wallpaper_dir();
        let prefs = resolve(&[
            Arg::Interval("300".to_string()),
            Arg::Random,
            Arg::Directory(dir.clone()),
        ])
        .unwrap();

        let dir_path = PrefValue::Path(PathBuf::from(&dir));
        assert_eq!(prefs.get(PrefKey::Directory), Some(&dir_path));
        assert_eq!(prefs.get(PrefKey::Current), Some(&dir_path));
        assert_eq!(
            prefs.get(PrefKey::ChangeEvent),
            Some(&PrefValue::Event(ChangeEvent::Interval))
        );
        assert_eq!(prefs.get(PrefKey::Interval), Some(&PrefValue::Seconds(300)));
        assert_eq!(prefs.get(PrefKey::Random), Some(&PrefValue::Flag(true)));
        assert_eq!(prefs.get(PrefKey::SolidColor), Some(&PrefValue::Flag(false)));
        assert_eq!(
            prefs.get(PrefKey::Position),
            Some(&PrefValue::Position(Position::Fill))
        );
        assert!(!prefs.contains(PrefKey::Wallpaper));
        assert!(!prefs.contains(PrefKey::Red));
    }

    #[test]
    fn test_color_only_keeps_solid_color_mode() {
        let prefs = resolve(&[Arg::Color("ff8000".to_string())]).unwrap();

        assert_eq!(prefs.get(PrefKey::SolidColor), Some(&PrefValue::Flag(true)));
        assert_eq!(prefs.get(PrefKey::Red), Some(&PrefValue::Channel(1.0)));
        assert_eq!(
            prefs.get(PrefKey::Green),
            Some(&PrefValue::Channel(128.0 / 255.0))
        );
        assert_eq!(prefs.get(PrefKey::Blue), Some(&PrefValue::Channel(0.0)));
        assert!(!prefs.contains(PrefKey::Wallpaper));
        assert!(!prefs.contains(PrefKey::Directory));
    }

    #[test]
    fn test_position_flag_overrides_default() {
        let file = image_file();
        let prefs = resolve(&[Arg::Center, Arg::Wallpaper(file)]).unwrap();
        assert_eq!(
            prefs.get(PrefKey::Position),
            Some(&PrefValue::Position(Position::Center))
        );
    }

    #[test]
    fn test_invalid_color_aborts_resolution() {
        let result = resolve(&[Arg::Color("zzzzzz".to_string())]);
        assert!(matches!(result, Err(ResolveError::InvalidColor { .. })));

        let result = resolve(&[Arg::Color("12345".to_string())]);
        assert!(matches!(result, Err(ResolveError::InvalidColor { .. })));
    }

    #[test]
    fn test_invalid_interval_aborts_resolution() {
        let dir = wallpaper_dir();
        let result = resolve(&[Arg::Interval("abc".to_string()), Arg::Directory(dir)]);
        assert!(matches!(result, Err(ResolveError::InvalidInterval { .. })));
    }

    #[test]
    fn test_missing_wallpaper_is_not_found() {
        let missing = scratch().path().join("missing.png");
        let result = resolve(&[Arg::Wallpaper(missing.to_string_lossy().into_owned())]);
        assert!(matches!(result, Err(ResolveError::WallpaperNotFound { .. })));
    }

    #[test]
    fn test_wallpaper_rejects_directory() {
        let dir = wallpaper_dir();
        let result = resolve(&[Arg::Wallpaper(dir)]);
        assert!(matches!(
            result,
            Err(ResolveError::WallpaperIsDirectory { .. })
        ));
    }

    #[test]
    fn test_directory_rejects_file() {
        let file = image_file();
        let result = resolve(&[
            Arg::Login,
            Arg::Directory(file),
        ]);
        assert!(matches!(result, Err(ResolveError::NotADirectory { .. })));
    }

    #[test]
    fn test_login_and_wake_set_change_event() {
        let dir = wallpaper_dir();
        let prefs = resolve(&[Arg::Login, Arg::Directory(dir.clone())]).unwrap();
        assert_eq!(
            prefs.get(PrefKey::ChangeEvent),
            Some(&PrefValue::Event(ChangeEvent::Login))
        );

        let prefs = resolve(&[Arg::Wake, Arg::Directory(dir)]).unwrap();
        assert_eq!(
            prefs.get(PrefKey::ChangeEvent),
            Some(&PrefValue::Event(ChangeEvent::Wake))
        );
    }

    #[test]
    fn test_explicit_permutations_resolve_identically() {
        let dir = wallpaper_dir();
        let a = resolve(&[
            Arg::Tile,
            Arg::Interval("60".to_string()),
            Arg::Directory(dir.clone()),
        ])
        .unwrap();
        let b = resolve(&[
            Arg::Directory(dir.clone()),
            Arg::Tile,
            Arg::Interval("60".to_string()),
        ])
        .unwrap();
        let c = resolve(&[
            Arg::Interval("60".to_string()),
            Arg::Directory(dir),
            Arg::Tile,
        ])
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_order_independent(
            shuffled in Just(vec![
                Arg::Tile,
                Arg::Color("336699".to_string()),
                Arg::Interval("300".to_string()),
                Arg::Random,
                Arg::Directory(wallpaper_dir()),
            ])
            .prop_shuffle()
        ) {
            let canonical = resolve(&[
                Arg::Tile,
                Arg::Color("336699".to_string()),
                Arg::Interval("300".to_string()),
                Arg::Random,
                Arg::Directory(wallpaper_dir()),
            ])
            .unwrap();
            let permuted = resolve(&shuffled).unwrap();
            prop_assert_eq!(permuted, canonical);
        }
    }
}
