//! Ride search form with "From" and "To" location fields.
//!
//! Run with `cargo run --example ride_search`. Type two letters of an Indian
//! city, move through the suggestions with ↓/↑, pick one with enter or a
//! click. Tab switches fields, enter on a closed list searches, ctrl+c quits.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, MouseMotion, MouseMsg, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use lipgloss_extras::prelude::*;
use location_autocomplete::prelude::*;
use std::sync::mpsc::{channel, Receiver};

struct Field {
    input: Autocomplete,
    changes: Receiver<String>,
}

impl Field {
    fn new(placeholder: &str) -> Self {
        let (tx, rx) = channel();
        let mut input = autocomplete_new().with_on_change(move |v| {
            let _ = tx.send(v);
        });
        input.set_placeholder(placeholder);
        input.field.width = 24;
        Self { input, changes: rx }
    }

    // The form owns the text; apply whatever the widget proposed.
    fn sync(&mut self) {
        while let Ok(next) = self.changes.try_recv() {
            self.input.set_value(&next);
        }
    }
}

struct App {
    fields: [Field; 2],
    active: usize,
    searched: Option<String>,
}

impl App {
    fn switch_focus(&mut self) {
        self.fields[self.active].input.blur();
        self.active = (self.active + 1) % self.fields.len();
        let _ = self.fields[self.active].input.focus();
    }

    fn layout(&mut self) {
        let from_height = self.fields[0].input.view().lines().count() as u16;
        self.fields[0].input.set_origin(0, 2);
        self.fields[1].input.set_origin(0, 2 + from_height + 1);
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut app = App {
            fields: [Field::new("Leaving from"), Field::new("Going to")],
            active: 0,
            searched: None,
        };
        let cmd = app.fields[0].input.focus();
        app.layout();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(quit());
            }

            let outcome = self.fields[self.active].input.handle_key(key);
            if !outcome.is_default_prevented() {
                match key.key {
                    KeyCode::Tab => self.switch_focus(),
                    KeyCode::Enter if outcome == KeyOutcome::Ignored => {
                        self.searched = Some(format!(
                            "{} → {}",
                            self.fields[0].input.value(),
                            self.fields[1].input.value()
                        ));
                    }
                    _ => {}
                }
            }
        } else if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            // Every field sees the press so each can tell whether it landed
            // outside it.
            if let MouseEventKind::Down(button) = mouse.button {
                for i in 0..self.fields.len() {
                    let outcome = self.fields[i].input.handle_press(mouse.x, mouse.y, button);
                    if outcome == PointerOutcome::Focused && i != self.active {
                        self.fields[self.active].input.blur();
                        self.active = i;
                    }
                }
            }
        }

        for field in &mut self.fields {
            field.sync();
        }
        self.layout();
        None
    }

    fn view(&self) -> String {
        let title = Style::new().bold(true).render("Find a ride");
        let hint = Style::new()
            .foreground(Color::from("240"))
            .render("tab: switch field • enter: search • ctrl+c: quit");

        let mut out = format!("{}\n\n", title);
        out.push_str(&self.fields[0].input.view());
        out.push_str("\n\n");
        out.push_str(&self.fields[1].input.view());
        out.push_str("\n\n");
        if let Some(route) = &self.searched {
            out.push_str(&format!("Searching rides: {}\n\n", route));
        }
        out.push_str(&hint);
        out
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggestion rows are picked with the mouse, so cell-level reporting
    // has to be on.
    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}
