use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// one discrete player command, decoded from a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PrevGame,
    NextGame,
    Launch,
    Quit,
}

/// reads player commands
pub trait Input {
    /// the next pending command, if a mapped key has been pressed.
    /// one command per call: a held key repeats as separate presses and
    /// each one should move the carousel exactly one step
    fn poll_command(&mut self) -> Result<Option<Command>, io::Error>;

    /// drop any presses buffered while the loop wasn't listening
    /// (e.g. while the emulator owned the keyboard)
    fn flush(&mut self) -> Result<(), io::Error>;
}

/// simple implementation of Input over the terminal; owns raw mode for
/// its lifetime
pub struct TermInput;

impl TermInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput)
    }

    fn map_key(code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Left => Some(Command::PrevGame),
            KeyCode::Right => Some(Command::NextGame),
            KeyCode::Enter => Some(Command::Launch),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            // anything else is ignored without touching the selection
            _ => None,
        }
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for TermInput {
    fn poll_command(&mut self) -> Result<Option<Command>, io::Error> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(evt) = read()? {
                if let Some(command) = Self::map_key(evt.code) {
                    return Ok(Some(command));
                }
            }
        }
        Ok(None)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0))? {
            let _ = read()?;
        }
        Ok(())
    }
}

/// scripted Input implementation for testing
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: &[Command]) -> Self {
        ScriptedInput {
            commands: commands.iter().copied().collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn poll_command(&mut self) -> Result<Option<Command>, io::Error> {
        Ok(self.commands.pop_front())
    }

    /// the script stands in for the player, not the OS key buffer, so
    /// flushing discards nothing
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_navigation() {
        assert_eq!(TermInput::map_key(KeyCode::Left), Some(Command::PrevGame));
        assert_eq!(TermInput::map_key(KeyCode::Right), Some(Command::NextGame));
    }

    #[test]
    fn test_enter_maps_to_launch() {
        assert_eq!(TermInput::map_key(KeyCode::Enter), Some(Command::Launch));
    }

    #[test]
    fn test_escape_and_q_map_to_quit() {
        assert_eq!(TermInput::map_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(TermInput::map_key(KeyCode::Char('q')), Some(Command::Quit));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(TermInput::map_key(KeyCode::Char('x')), None);
        assert_eq!(TermInput::map_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new(&[Command::NextGame, Command::Quit]);
        assert_eq!(input.poll_command().unwrap(), Some(Command::NextGame));
        assert_eq!(input.poll_command().unwrap(), Some(Command::Quit));
        assert_eq!(input.poll_command().unwrap(), None);
    }
}
