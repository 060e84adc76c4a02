//! Interactive form state.
//!
//! One value per catalog control, the focused control, the last password and
//! the message line. All changes go through [`Form::handle`].

use crate::error::{ConfigurationError, Result};
use crate::pass::catalog::{MAX_LENGTH, length_options};
use crate::pass::{Catalog, CharacterClass, ControlKind, GenerationRequest, Password};
use crate::settings::Settings;

use super::input::FormKey;

/// Current value of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Length(i64),
    Checked(bool),
}

/// Message line under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

type GenerateResult = std::result::Result<Password, ConfigurationError>;

/// Callbacks the form invokes for its two actions.
pub struct Actions<'a> {
    pub generate: Box<dyn FnMut(&GenerationRequest) -> GenerateResult + 'a>,
    pub copy: Box<dyn FnMut(&str) -> Result<()> + 'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Form<'c> {
    catalog: &'c Catalog,
    values: Vec<Value>,
    focus: usize,
    password: Option<Password>,
    notice: Option<Notice>,
    /// Digits typed while entering a custom length.
    editing: Option<String>,
}

impl<'c> Form<'c> {
    /// Build the form with each control set from `settings`.
    pub fn new(catalog: &'c Catalog, settings: &Settings) -> Self {
        let values = catalog
            .controls
            .iter()
            .map(|control| match control.kind {
                ControlKind::Select { .. } => Value::Length(settings.pass_length),
                ControlKind::Checkbox { class, .. } => Value::Checked(settings.is_enabled(class)),
            })
            .collect();
        Self {
            catalog,
            values,
            focus: 0,
            password: None,
            notice: None,
            editing: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Read the controls into a fresh request.
    pub fn request(&self) -> GenerationRequest {
        let mut length = 0;
        let mut classes: Vec<CharacterClass> = Vec::new();
        for (control, value) in self.catalog.controls.iter().zip(&self.values) {
            match (&control.kind, value) {
                (ControlKind::Select { .. }, Value::Length(n)) => length = *n,
                (ControlKind::Checkbox { class, .. }, Value::Checked(true)) => classes.push(*class),
                _ => {}
            }
        }
        GenerationRequest::new(length, classes)
    }

    pub fn handle(&mut self, key: FormKey, actions: &mut Actions<'_>) -> Flow {
        match key {
            FormKey::Quit => return Flow::Quit,
            FormKey::Up => self.move_focus(-1),
            FormKey::Down => self.move_focus(1),
            FormKey::Left => self.cycle_length(-1),
            FormKey::Right => self.cycle_length(1),
            FormKey::Toggle => self.toggle(),
            FormKey::Activate => match self.values.get(self.focus) {
                Some(Value::Checked(_)) => self.toggle(),
                _ => self.generate(actions),
            },
            FormKey::Generate => self.generate(actions),
            FormKey::Copy => self.copy(actions),
            FormKey::EditLength => {
                self.focus_length();
                self.editing = Some(String::new());
            }
            FormKey::Digit(d) => self.push_digit(d),
            FormKey::Backspace => {
                if let Some(buf) = self.editing.as_mut() {
                    buf.pop();
                }
            }
            FormKey::Commit => self.commit_length(),
            FormKey::Cancel => self.editing = None,
        }
        Flow::Continue
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.values.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    fn focus_length(&mut self) {
        if let Some(i) = self.length_index() {
            self.focus = i;
        }
    }

    fn length_index(&self) -> Option<usize> {
        self.catalog
            .controls
            .iter()
            .position(|c| matches!(c.kind, ControlKind::Select { .. }))
    }

    /// Step the focused select to the neighbouring catalog length. A custom
    /// length snaps to the nearest catalog value in the chosen direction.
    fn cycle_length(&mut self, delta: i64) {
        let Some(Value::Length(current)) = self.values.get_mut(self.focus) else {
            return;
        };
        let options = length_options();
        let next = if delta > 0 {
            options.iter().map(|&n| n as i64).find(|&n| n > *current)
        } else {
            options.iter().rev().map(|&n| n as i64).find(|&n| n < *current)
        };
        if let Some(n) = next {
            *current = n;
        }
    }

    fn toggle(&mut self) {
        if let Some(Value::Checked(on)) = self.values.get_mut(self.focus) {
            *on = !*on;
        }
    }

    /// Append a typed digit unless the entry would pass `MAX_LENGTH`.
    fn push_digit(&mut self, digit: char) {
        let Some(buf) = self.editing.as_mut() else {
            return;
        };
        buf.push(digit);
        if !matches!(buf.parse::<usize>(), Ok(n) if n <= MAX_LENGTH) {
            buf.pop();
        }
    }

    fn commit_length(&mut self) {
        let Some(buf) = self.editing.take() else {
            return;
        };
        let length = buf.parse::<i64>().unwrap_or(0);
        if let Some(i) = self.length_index() {
            self.values[i] = Value::Length(length);
        }
    }

    fn generate(&mut self, actions: &mut Actions<'_>) {
        self.notice = None;
        match (actions.generate)(&self.request()) {
            Ok(password) => self.password = Some(password),
            Err(e) => self.notice = Some(Notice::Error(e.to_string())),
        }
    }

    fn copy(&mut self, actions: &mut Actions<'_>) {
        let Some(password) = self.password.as_ref() else {
            self.notice = Some(Notice::Error("Nothing to copy yet.".to_string()));
            return;
        };
        self.notice = Some(match (actions.copy)(password.as_str()) {
            Ok(()) => Notice::Info("Copied to clipboard.".to_string()),
            Err(e) => Notice::Error(e.to_string()),
        });
    }
}
