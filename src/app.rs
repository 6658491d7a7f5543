use crate::display::Display;
use crate::input::{Command, Input};
use crate::launcher::Launcher;
use crate::library::Library;
use crate::selection::Selection;
use std::io;
use std::time::Duration;

/// how long to sleep when no key is pending
const IDLE_POLL: Duration = Duration::from_millis(10);

/// ties input, selection, display and the emulator together in one
/// single-threaded cooperative loop. owns the selection; everything
/// else is reached through its trait
pub struct App<'a> {
    library: Library,
    selection: Selection,
    display: &'a mut dyn Display,
    input: &'a mut dyn Input,
    launcher: &'a mut dyn Launcher,
}

impl<'a> App<'a> {
    pub fn new(
        library: Library,
        display: &'a mut dyn Display,
        input: &'a mut dyn Input,
        launcher: &'a mut dyn Launcher,
    ) -> App<'a> {
        let selection = Selection::new(library.len());
        App {
            library,
            selection,
            display,
            input,
            launcher,
        }
    }

    /// run until the player quits
    pub fn run(&mut self) -> Result<(), io::Error> {
        self.redraw()?;
        loop {
            let command = match self.input.poll_command()? {
                Some(command) => command,
                None => {
                    spin_sleep::sleep(IDLE_POLL);
                    continue;
                }
            };
            match command {
                Command::PrevGame => {
                    self.selection.prev();
                    self.redraw()?;
                }
                Command::NextGame => {
                    self.selection.next();
                    self.redraw()?;
                }
                Command::Launch => self.launch_current()?,
                Command::Quit => break,
            }
        }
        Ok(())
    }

    /// hand the highlighted game to the emulator and wait for it to
    /// finish. the loop is suspended here, so no command can reach the
    /// selection while a session is running
    fn launch_current(&mut self) -> Result<(), io::Error> {
        let entry = self.library.get(self.selection.index());
        match self.launcher.launch(&entry.rom_path) {
            Ok(status) if !status.success() => {
                tracing::warn!(rom = %entry.rom_path.display(), %status, "emulator exited abnormally");
                self.display
                    .notice(&format!("emulator exited abnormally ({})", status));
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "launch failed");
                self.display.notice(&err.to_string());
            }
        }
        // the emulator owned the keyboard while it ran; drop whatever
        // presses piled up so they don't replay into the carousel
        self.input.flush()?;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), io::Error> {
        let entry = self.library.get(self.selection.index());
        self.display
            .draw(entry, self.selection.index(), self.library.len())
    }
}
