///
/// ## Design
///
/// * full-screen carousel over a fixed SNES ROM library, one game in
///   focus at a time, driven by single key presses
/// * the library is built once at startup from roms/ and covers/ and
///   never changes; an empty library is fatal before the loop starts
/// * abstract display, input and launcher behind traits so the loop can
///   be driven by scripted doubles in tests; starting with TUI
///   in-console for the screen
/// * one thread: poll a command, update the selection, redraw. the only
///   suspension point is the blocking wait on the emulator process, so
///   exactly one session can exist and no command races the selection
///   while it runs
/// * launch failures are recoverable; they surface as an on-screen
///   notice and browsing carries on
///
/// Model
///
/// main
///  |-- library::scan(roms/, covers/)    -- fatal on error, nonzero exit
///  |-- display, input, launcher
///  `-- app::App::run()
///       |-- poll_command()              -- none? sleep briefly, re-poll
///       |-- PrevGame/NextGame           -- selection wraps, redraw
///       |-- Launch                      -- block on the emulator, flush
///       |                                  buffered presses, redraw
///       `-- Quit                        -- loop returns, exit 0
pub mod app;
pub mod display;
pub mod input;
pub mod launcher;
pub mod library;
pub mod selection;
