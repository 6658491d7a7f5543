use std::path::Path;

use anyhow::Context;
use romdeck::app::App;
use romdeck::display::TermDisplay;
use romdeck::input::TermInput;
use romdeck::launcher::EmulatorLauncher;
use romdeck::library;

// Specific configuration for SNES9x (at snes9x>preferences
// in ~/.snes9x/snes9x.xml):
//   <option name="full_screen_on_open" value="1"/>
//   <option name="default_esc_behavior" value="2"/>
const EMULATOR_PATH: &str = "snes9x-gtk";

const ROMS_DIR: &str = "roms";
const COVERS_DIR: &str = "covers";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let library = library::scan(Path::new(ROMS_DIR), Path::new(COVERS_DIR))
        .context("scanning ROM library")?;
    if library.len() == 1 {
        tracing::info!("1 ROM ready");
    } else {
        tracing::info!("{} ROMs ready", library.len());
    }

    let mut display = TermDisplay::new()?;
    let mut input = TermInput::new()?;
    let mut launcher = EmulatorLauncher::new(EMULATOR_PATH);

    App::new(library, &mut display, &mut input, &mut launcher).run()?;

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..4 {
        println!();
    }
    Ok(())
}
