use crate::library::GameEntry;
use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::{Alignment, Constraint, Direction, Layout};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;

/// Display is used by the event loop to put the highlighted game on
/// screen. It should abstract the implementation details, so a variety
/// of kinds of screen would work.
pub trait Display {
    /// render the carousel focused on `entry`, at position `index` of
    /// `total`
    fn draw(&mut self, entry: &GameEntry, index: usize, total: usize) -> Result<(), io::Error>;

    /// queue a transient message for the next frame only (launch
    /// failures and the like)
    fn notice(&mut self, message: &str);
}

/// full-screen carousel in a terminal, rendered using TUI over crossterm
pub struct TermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    notice: Option<String>,
}

impl TermDisplay {
    pub fn new() -> Result<TermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(TermDisplay {
            terminal,
            notice: None,
        })
    }
}

impl Display for TermDisplay {
    fn draw(&mut self, entry: &GameEntry, index: usize, total: usize) -> Result<(), io::Error> {
        let notice = self.notice.take();
        self.terminal.draw(|f| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Length(2),
                        Constraint::Min(8),
                        Constraint::Length(1),
                    ]
                    .as_ref(),
                )
                .split(f.size());

            let header = Paragraph::new(vec![
                Spans::from(Span::styled(
                    "romdeck ROM launcher",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Spans::from(Span::raw(found_line(total))),
            ]);
            f.render_widget(header, rows[0]);

            // cover decoding is somebody else's job; we show where the
            // art lives, or a placeholder when there is none
            let art = match &entry.cover_path {
                Some(path) => format!("cover: {}", path.display()),
                None => String::from("(no cover art)"),
            };
            let card = Paragraph::new(vec![
                Spans::from(Span::raw("")),
                Spans::from(Span::styled(
                    entry.title.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Spans::from(Span::raw(art)),
                Spans::from(Span::raw(format!("{}", entry.rom_path.display()))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {} / {} ", index + 1, total))
                    .borders(Borders::ALL)
                    .style(Style::default().bg(Color::Black)),
            );
            f.render_widget(card, rows[1]);

            let footer = match notice {
                Some(message) => Spans::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )),
                None => Spans::from(Span::raw(
                    "left/right: browse   enter: play   esc: quit",
                )),
            };
            f.render_widget(Paragraph::new(vec![footer]), rows[2]);
        })?;
        Ok(())
    }

    fn notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

fn found_line(total: usize) -> String {
    if total == 1 {
        String::from("1 ROM found")
    } else {
        format!("{} ROMs found", total)
    }
}

/// records frames instead of drawing them; useful for testing the loop
pub struct DummyDisplay {
    pub frames: Vec<(String, usize, usize)>,
    pub notices: Vec<String>,
}

impl DummyDisplay {
    pub fn new() -> DummyDisplay {
        DummyDisplay {
            frames: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, entry: &GameEntry, index: usize, total: usize) -> Result<(), io::Error> {
        self.frames.push((entry.title.clone(), index, total));
        Ok(())
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
