//! `presets` command: print the preset paths of this process.

use anyhow::Result;
use presetenv::PathPreset;

pub fn run() -> Result<()> {
    let presets = presetenv::presets()?;
    for preset in [PathPreset::Default, PathPreset::Portable, PathPreset::UserProfile] {
        println!("{}\t{}", preset.name(), presets.path(preset).display());
    }
    Ok(())
}
