//! Dock refresh notification.

use std::process::Command;

/// Ask the Dock to restart so the new preferences take effect.
///
/// The store is already committed when this runs, so failure only means
/// the wallpaper shows up at the next login; it is never fatal and never
/// rolls anything back.
pub fn refresh_dock() {
    match Command::new("killall").arg("Dock").status() {
        Ok(status) if status.success() => {}
        _ => tracing::warn!("error applying wallpaper, it will be applied on your next login"),
    }
}
