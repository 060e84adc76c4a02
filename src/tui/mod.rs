//! Interactive terminal form.

mod form;
mod input;
mod render;

use crossterm::event::{self, Event};
use log::{LevelFilter, info};

use crate::error::Result;
use crate::pass::output::Clipboard;
use crate::pass::{Catalog, GenerationRequest, PasswordGenerator};
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, draw};

use form::{Actions, Flow, Form};

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let catalog = Catalog::standard();
    let mut generator = PasswordGenerator::new(settings.source.rng());
    let mut clipboard: Option<Clipboard> = None;

    let mut actions = Actions {
        generate: Box::new(|req: &GenerationRequest| generator.generate(req)),
        copy: Box::new(|text: &str| -> Result<()> {
            if clipboard.is_none() {
                clipboard = Some(Clipboard::open()?);
            }
            match clipboard.as_mut() {
                Some(ctx) => ctx.copy(text),
                None => Ok(()),
            }
        }),
    };

    info!("starting interactive form ({})", settings.source.name());
    let mut form = Form::new(&catalog, settings);
    let _quiet = LogPause::new();
    let mut guard = RawModeGuard::new()?;
    event_loop(&mut form, &mut actions)?;
    guard.release();
    clear();
    Ok(())
}

/// Silences the logger while the form owns the screen. Log lines go to
/// stderr, which shares the terminal with the form.
struct LogPause {
    previous: LevelFilter,
}

impl LogPause {
    fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Drop for LogPause {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Draw, read one key, apply it. Repeat until `Flow::Quit`.
fn event_loop(form: &mut Form<'_>, actions: &mut Actions<'_>) -> Result<()> {
    loop {
        draw(&render::render_lines(form))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(intent) = input::map_key(key, form.editing().is_some()) else {
            continue;
        };
        if form.handle(intent, actions) == Flow::Quit {
            return Ok(());
        }
    }
}
