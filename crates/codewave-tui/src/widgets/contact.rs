//! Contact section: the form, its submit button and the contact channels

use codewave_core::catalog::CONTACT_CHANNELS;
use codewave_core::{ContactFlow, FieldKind, FormField, SubmissionPhase};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::{pad, truncate};
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

const LABEL_COLUMN: usize = 12;

/// Rows reserved for the message body, so typing never shifts the page.
const MESSAGE_ROWS: usize = 4;

pub struct Contact<'a> {
    flow: &'a ContactFlow,
    focused: FormField,
    editing: bool,
    active: bool,
}

impl<'a> Contact<'a> {
    pub fn new(flow: &'a ContactFlow, focused: FormField) -> Self {
        Self {
            flow,
            focused,
            editing: false,
            active: false,
        }
    }

    /// Show the focus marker and cursor
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn label(&self, field: FormField) -> Vec<Span<'static>> {
        let focused = self.editing && field == self.focused;
        let marker = if focused { "› " } else { "  " };
        let mut label = field.label().to_string();
        if field.is_required() {
            label.push_str(" *");
        }
        let style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        vec![
            Span::styled(marker, styles::accent()),
            Span::styled(pad(&label, LABEL_COLUMN), style),
        ]
    }

    fn field_lines(&self, field: FormField, inner: usize) -> Vec<Line<'static>> {
        let focused = self.editing && field == self.focused;
        let value_width = inner.saturating_sub(LABEL_COLUMN + 4);
        let form = self.flow.form();
        let mut lines = Vec::new();

        match field.kind() {
            FieldKind::Text => {
                let mut spans = self.label(field);
                spans.push(Span::styled(
                    truncate(form.get(field), value_width),
                    styles::text_primary(),
                ));
                if focused {
                    spans.push(Span::styled("▏", styles::accent()));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::Select => {
                let mut spans = self.label(field);
                let shown = form.display_value(field);
                let (text, style) = if shown.is_empty() {
                    (format!("Select {}...", field.label().to_lowercase()), styles::text_muted())
                } else {
                    (shown.to_string(), styles::text_primary())
                };
                if focused {
                    spans.push(Span::styled("‹ ", styles::accent()));
                }
                spans.push(Span::styled(truncate(&text, value_width), style));
                if focused {
                    spans.push(Span::styled(" ›", styles::accent()));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::MultiLine => {
                lines.push(Line::from(self.label(field)));
                let body: Vec<&str> = form.get(field).split('\n').collect();
                let start = body.len().saturating_sub(MESSAGE_ROWS);
                for row in 0..MESSAGE_ROWS {
                    let mut text = body
                        .get(start + row)
                        .map(|l| truncate(l, value_width))
                        .unwrap_or_default();
                    if focused && start + row + 1 == body.len() {
                        text.push('▏');
                    }
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(LABEL_COLUMN + 2)),
                        Span::styled(text, styles::text_primary()),
                    ]));
                }
            }
        }

        if let Some(error) = self.flow.error_for(field) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_COLUMN + 2)),
                Span::styled(format!("⚠ {}", error), styles::status_red()),
            ]));
        }
        lines
    }

    fn submit_line(&self) -> Line<'static> {
        let (label, style): (&str, Style) = match self.flow.phase() {
            SubmissionPhase::Idle if self.flow.can_submit() => {
                ("[ Send Message ]", styles::accent_bold())
            }
            // Disabled until name, email and message are filled in
            SubmissionPhase::Idle => ("[ Send Message ]", styles::text_muted()),
            SubmissionPhase::Submitting => ("[ Sending... ]", styles::text_muted()),
            SubmissionPhase::Submitted => ("[ Message Sent! ]", styles::status_green()),
        };
        let mut spans = vec![Span::styled(label, style)];
        if self.flow.phase() == SubmissionPhase::Idle {
            let hint = match (self.editing, self.flow.can_submit()) {
                (false, _) => Span::styled("  f to fill in", styles::keybinding()),
                (true, true) => Span::styled("  Ctrl+S", styles::keybinding()),
                (true, false) => {
                    Span::styled("  name, email and message required", styles::text_muted())
                }
            };
            spans.push(hint);
        }
        Line::from(spans)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let mut lines = vec![
            Line::styled("Let's Build Something Amazing Together", styles::heading()),
            Line::from(""),
        ];
        for field in FormField::ALL {
            lines.extend(self.field_lines(field, inner));
        }
        lines.push(Line::from(""));
        lines.push(self.submit_line());

        if let Some(receipt) = self.flow.receipt() {
            lines.push(Line::styled(
                truncate(
                    "Thank you for reaching out. We'll get back to you within 24 hours.",
                    inner,
                ),
                styles::status_green(),
            ));
            lines.push(Line::styled(
                format!("Reference {}", receipt.reference),
                styles::text_muted(),
            ));
        }

        lines.push(Line::from(""));
        for channel in CONTACT_CHANNELS {
            lines.push(Line::from(vec![
                Span::styled(pad(channel.label, 16), styles::text_secondary()),
                Span::styled(channel.value, styles::text_primary()),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }
}

impl Widget for Contact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.active || self.editing;
        let lines = self.lines(area.width);
        render_section("Contact", focused, lines, area, buf);
    }
}

impl PageSection for Contact<'_> {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codewave_core::Receipt;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    fn render(flow: &ContactFlow, focused: FormField, editing: bool) -> TestTerminal {
        let widget = Contact::new(flow, focused).editing(editing);
        let height = widget.height(80);
        let mut term = TestTerminal::with_size(80, height);
        term.render_widget(widget, term.area());
        term
    }

    /// Style of the "S" in the submit button label.
    fn submit_style(term: &TestTerminal) -> Style {
        let buf = term.buffer();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width.saturating_sub(2) {
                if buf[(x, y)].symbol() == "["
                    && buf[(x + 1, y)].symbol() == " "
                    && buf[(x + 2, y)].symbol() == "S"
                {
                    return buf[(x + 2, y)].style();
                }
            }
        }
        panic!("submit button not rendered:\n{}", term.content());
    }

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.set_field(FormField::Name, "Ada");
        flow.set_field(FormField::Email, "ada@example.com");
        flow.set_field(FormField::Message, "Hello\nthere");
        flow
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let term = render(&ContactFlow::new(), FormField::Name, false);
        assert!(term.buffer_contains("Name *"));
        assert!(term.buffer_contains("Select budget..."));
        assert!(term.buffer_contains("Send Message"));
        assert!(term.buffer_contains("codewave@gmail.com"));
    }

    #[test]
    fn test_select_shows_option_label() {
        let mut flow = ContactFlow::new();
        flow.cycle_option(FormField::Budget, true);
        let term = render(&flow, FormField::Budget, true);
        assert!(term.buffer_contains("$5,000 - $10,000"));
        assert!(term.buffer_contains("› Budget"));
    }

    #[test]
    fn test_validation_errors_render_inline() {
        let mut flow = ContactFlow::new();
        assert!(flow.begin_submit().is_err());
        let term = render(&flow, FormField::Name, true);
        assert!(term.buffer_contains("Name is required"));
        assert!(term.buffer_contains("Message is required"));
    }

    #[test]
    fn test_submission_phases_relabel_button() {
        let mut flow = filled();
        flow.begin_submit().expect("valid form");
        let term = render(&flow, FormField::Name, false);
        assert!(term.buffer_contains("Sending..."));

        flow.complete(Receipt::new("CW-20250101-0001"));
        let term = render(&flow, FormField::Name, false);
        assert!(term.buffer_contains("Message Sent!"));
        assert!(term.buffer_contains("CW-20250101-0001"));
        assert!(term.buffer_contains("Thank you for reaching out."));
    }

    #[test]
    fn test_submit_disabled_until_required_fields_filled() {
        let mut flow = ContactFlow::new();
        flow.set_field(FormField::Name, "Ada");
        flow.set_field(FormField::Email, "ada@example.com");
        let term = render(&flow, FormField::Message, true);
        assert_eq!(submit_style(&term).fg, styles::text_muted().fg);
        assert!(term.buffer_contains("name, email and message required"));
        assert!(!term.buffer_contains("Ctrl+S"));

        // Whitespace does not count as filled in
        flow.set_field(FormField::Message, "   ");
        let term = render(&flow, FormField::Message, true);
        assert_eq!(submit_style(&term).fg, styles::text_muted().fg);
    }

    #[test]
    fn test_submit_enabled_once_required_fields_filled() {
        let term = render(&filled(), FormField::Message, true);
        let style = submit_style(&term);
        assert_eq!(style.fg, styles::accent_bold().fg);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(term.buffer_contains("Ctrl+S"));
        assert!(!term.buffer_contains("required"));
    }

    #[test]
    fn test_multiline_message_keeps_height() {
        let empty = Contact::new(&ContactFlow::new(), FormField::Message).height(80);
        let flow = filled();
        let with_text = Contact::new(&flow, FormField::Message).height(80);
        assert_eq!(empty, with_text);
    }
}
