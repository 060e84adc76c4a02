//! Screen layout for the interactive form.

use crate::entropy;
use crate::pass::catalog::tier_of;
use crate::pass::{Control, ControlKind};
use crate::terminal::{
    BOX_INNER, GREEN, GREY, RED, RESET, REVERSE, box_bottom, box_line, box_line_center, box_rule,
    box_top, console_width, format_number, wrap,
};

use super::form::{Form, Notice, Value};

const LABEL_COL: usize = 26;

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(console_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn show_length(n: i64) -> String {
    match usize::try_from(n) {
        Ok(n) => format_number(n),
        Err(_) => n.to_string(),
    }
}

/// Render one control. The only place that looks at `ControlKind`.
pub fn render_control(control: &Control, value: Value, editing: Option<&str>) -> String {
    let label = pad(control.label, LABEL_COL);
    match (&control.kind, value) {
        (ControlKind::Select { tiers, .. }, Value::Length(n)) => {
            let shown = match editing {
                Some(buf) => format!("{buf}_"),
                None => format!("\u{2039} {} \u{203A}", show_length(n)),
            };
            let tier = usize::try_from(n)
                .ok()
                .and_then(tier_of)
                .filter(|t| tiers.contains(t))
                .map_or("Custom", |t| t.name());
            format!("{label}{} {GREY}{tier}{RESET}", pad(&shown, 12))
        }
        (ControlKind::Checkbox { .. }, Value::Checked(on)) => {
            format!("{label}[{}]", if on { 'x' } else { ' ' })
        }
        _ => label,
    }
}

/// Full screen as lines, top to bottom.
pub fn render_lines(form: &Form<'_>) -> Vec<String> {
    let mut lines = vec![
        box_top("Password Generator"),
        box_line_center("\u{2191}\u{2193} move | \u{2190}\u{2192} length | n type length | Space/Enter toggle"),
        box_line_center("g generate | c copy | q quit"),
        box_line(""),
    ];

    for (i, (control, value)) in form.catalog().controls.iter().zip(form.values()).enumerate() {
        let focused = i == form.focus();
        let editing = form.editing().filter(|_| focused);
        let row = render_control(control, *value, editing);
        lines.push(if focused {
            box_line(&format!("{REVERSE}\u{203A}{RESET} {row}"))
        } else {
            box_line(&format!("  {row}"))
        });
    }

    let request = form.request();
    let pool = request.pool_size();
    let bits = entropy::estimate_bits(usize::try_from(request.length).unwrap_or(0), pool);
    lines.push(box_line(""));
    lines.push(box_rule());
    lines.push(box_line(&format!(
        "Pool: {} code points \u{2022} Entropy: {:.1} bits ({})",
        format_number(pool),
        bits,
        entropy::strength(bits)
    )));
    lines.push(box_bottom());
    lines.push(String::new());

    lines.push(box_top("Password"));
    match form.password() {
        Some(password) => {
            for chunk in wrap(password.as_str(), BOX_INNER) {
                lines.push(box_line(&chunk));
            }
        }
        None => lines.push(box_line(&format!("{GREY}(press g to generate){RESET}"))),
    }
    lines.push(box_bottom());

    lines.push(match form.notice() {
        Some(Notice::Error(msg)) => format!("{RED}{msg}{RESET}"),
        Some(Notice::Info(msg)) => format!("{GREEN}{msg}{RESET}"),
        None => String::new(),
    });
    lines
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::Result;
    use crate::pass::{Catalog, CharacterClass, GenerationRequest, PasswordGenerator};
    use crate::settings::Settings;
    use crate::terminal::BOX_WIDTH;
    use crate::tui::form::Actions;
    use crate::tui::input::FormKey;

    #[test]
    fn select_shows_value_and_tier() {
        let catalog = Catalog::standard();
        let length = &catalog.controls[0];
        assert!(render_control(length, Value::Length(16), None).contains("\u{2039} 16 \u{203A}"));
        assert!(render_control(length, Value::Length(16), None).contains("Strong"));
        assert!(render_control(length, Value::Length(2048), None).contains("2,048"));
        assert!(render_control(length, Value::Length(2048), None).contains("Unbelievable"));
        assert!(render_control(length, Value::Length(300), None).contains("Custom"));
        assert!(render_control(length, Value::Length(-1), None).contains("-1"));
        assert!(render_control(length, Value::Length(16), Some("4")).contains("4_"));
    }

    #[test]
    fn checkbox_shows_state() {
        let catalog = Catalog::standard();
        let emoji = catalog.get(CharacterClass::Emoji.key()).unwrap();
        assert!(render_control(emoji, Value::Checked(true), None).ends_with("[x]"));
        assert!(render_control(emoji, Value::Checked(false), None).ends_with("[ ]"));
    }

    #[test]
    fn labels_line_up() {
        let catalog = Catalog::standard();
        let columns: Vec<usize> = catalog
            .controls
            .iter()
            .skip(1)
            .map(|c| console_width(&render_control(c, Value::Checked(true), None)))
            .collect();
        assert!(columns.iter().all(|&w| w == LABEL_COL + 3));
    }

    #[test]
    fn screen_shows_controls_password_and_notice() {
        let catalog = Catalog::standard();
        let mut settings = Settings::default();
        settings.pass_length = 200;
        let mut form = Form::new(&catalog, &settings);

        let lines = render_lines(&form);
        assert!(lines.iter().any(|l| l.contains("(press g to generate)")));
        assert!(lines.iter().any(|l| l.contains("Pool: 84 code points")));

        let copied = RefCell::new(Vec::<String>::new());
        let mut generator = PasswordGenerator::new(StdRng::seed_from_u64(2));
        let mut actions = Actions {
            generate: Box::new(move |req: &GenerationRequest| generator.generate(req)),
            copy: Box::new(|text: &str| -> Result<()> {
                copied.borrow_mut().push(text.into());
                Ok(())
            }),
        };
        form.handle(FormKey::Generate, &mut actions);
        let lines = render_lines(&form);
        let password = form.password().unwrap().as_str();
        let body: String = lines
            .iter()
            .skip_while(|l| !l.contains("Password \u{2500}"))
            .skip(1)
            .take_while(|l| !l.starts_with('\u{2514}'))
            .map(|l| l.trim_start_matches("\u{2502} ").trim_end_matches(" \u{2502}").trim_end())
            .collect();
        assert_eq!(body, password);
        assert!(
            lines
                .iter()
                .filter(|l| l.starts_with('\u{250C}') || l.starts_with('\u{2502}'))
                .all(|l| console_width(l) == BOX_WIDTH)
        );

        form.handle(FormKey::Copy, &mut actions);
        let lines = render_lines(&form);
        assert!(lines.last().unwrap().contains("Copied to clipboard."));
    }
}
