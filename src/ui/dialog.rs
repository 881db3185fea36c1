//! Modal aim dialog
//!
//! Collects angle and velocity for the next shot and shows the current wind.

use glam::Vec2;

use super::button::Button;
use crate::error::{GameError, ParseError, RenderError};
use crate::renderer::{InputEvent, Shape, ShapeId, Style, Surface, WindowSpec, WindowSystem, colors};

/// Width of the entry fields, in characters
const ENTRY_WIDTH: u32 = 5;
const BUTTON_WIDTH: f32 = 1.25;
const BUTTON_HEIGHT: f32 = 0.5;

/// Which button resolved the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Fire,
    Quit,
}

impl DialogChoice {
    /// Label of the button that produces this choice
    pub fn label(&self) -> &'static str {
        match self {
            DialogChoice::Fire => "Fire!",
            DialogChoice::Quit => "Quit",
        }
    }
}

/// A dedicated window asking for (angle, velocity)
#[derive(Debug)]
pub struct InputDialog<W: Surface> {
    window: W,
    angle: ShapeId,
    velocity: ShapeId,
    wind: ShapeId,
    fire: Button,
    quit: Button,
}

impl<W: Surface> InputDialog<W> {
    /// Open the dialog pre-filled with the previous aim
    pub fn open<S>(windows: &mut S, angle: f32, velocity: f32, wind: f32) -> Result<Self, RenderError>
    where
        S: WindowSystem<Window = W>,
    {
        let window = windows.open(&WindowSpec::dialog())?;
        Self::build(window, angle, velocity, wind)
    }

    fn build(mut window: W, angle: f32, velocity: f32, wind: f32) -> Result<Self, RenderError> {
        let angle = labeled_entry(&mut window, 1.0, "Angle", &angle.to_string())?;
        let velocity = labeled_entry(&mut window, 2.0, "Velocity", &velocity.to_string())?;

        label(&mut window, Vec2::new(1.0, 3.0), "Wind")?;
        let wind = label(&mut window, Vec2::new(3.0, 3.0), &format!("{wind:.2}"))?;

        let mut fire = Button::new(
            &mut window,
            Vec2::new(1.0, 4.0),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            DialogChoice::Fire.label(),
        )?;
        fire.activate(&mut window)?;
        let mut quit = Button::new(
            &mut window,
            Vec2::new(3.0, 4.0),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            DialogChoice::Quit.label(),
        )?;
        quit.activate(&mut window)?;

        Ok(Self {
            window,
            angle,
            velocity,
            wind,
            fire,
            quit,
        })
    }

    /// Wait until the user presses Fire! or Quit
    ///
    /// Clicks outside both buttons are ignored. A closed window counts as
    /// Quit.
    pub fn interact(&mut self) -> DialogChoice {
        loop {
            match self.window.wait_event() {
                InputEvent::Click(p) => {
                    if self.quit.clicked(p) {
                        return DialogChoice::Quit;
                    }
                    if self.fire.clicked(p) {
                        return DialogChoice::Fire;
                    }
                }
                InputEvent::Closed => {
                    log::info!("Aim dialog closed, treating as Quit");
                    return DialogChoice::Quit;
                }
            }
        }
    }

    /// Current (angle, velocity) as typed by the user
    pub fn values(&self) -> Result<(f32, f32), GameError> {
        let angle = parse_field("angle", &self.window.text(self.angle)?)?;
        let velocity = parse_field("velocity", &self.window.text(self.velocity)?)?;
        Ok((angle, velocity))
    }

    /// Text currently shown in the wind row
    pub fn wind_text(&self) -> Result<String, RenderError> {
        self.window.text(self.wind)
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Close the window and hand it back; nothing can be drawn into it
    /// afterwards
    pub fn close(mut self) -> W {
        self.window.close();
        self.window
    }
}

fn label<W: Surface>(window: &mut W, anchor: Vec2, text: &str) -> Result<ShapeId, RenderError> {
    window.draw(
        Shape::Text {
            anchor,
            text: text.to_owned(),
        },
        Style::filled(colors::BLACK),
    )
}

fn labeled_entry<W: Surface>(window: &mut W, row: f32, caption: &str, value: &str) -> Result<ShapeId, RenderError> {
    label(window, Vec2::new(1.0, row), caption)?;
    window.draw(
        Shape::Entry {
            anchor: Vec2::new(3.0, row),
            width: ENTRY_WIDTH,
            text: value.to_owned(),
        },
        Style::filled(colors::WHITE),
    )
}

fn parse_field(field: &'static str, text: &str) -> Result<f32, ParseError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError {
            field,
            text: text.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{HeadlessWindows, Scene, ScriptEvent};

    const FIRE_CENTER: Vec2 = Vec2::new(1.0, 4.0);
    const QUIT_CENTER: Vec2 = Vec2::new(3.0, 4.0);

    fn dialog(events: Vec<ScriptEvent>) -> InputDialog<Scene> {
        let mut windows = HeadlessWindows::new();
        windows.script("Fire", events);
        InputDialog::open(&mut windows, 45.0, 30.0, 2.5).unwrap()
    }

    #[test]
    fn test_layout() {
        let d = dialog(vec![]);
        let w = d.window();
        assert_eq!(w.spec().title, "Fire");
        assert_eq!((w.spec().width, w.spec().height), (200, 300));
        assert_eq!(d.wind_text().unwrap(), "2.50");
        for caption in ["Angle", "Velocity", "Wind", "Fire!", "Quit"] {
            assert!(w.find_text(caption).is_some(), "missing {caption}");
        }
        assert!(d.fire.is_active());
        assert!(d.quit.is_active());
    }

    #[test]
    fn test_prefilled_values() {
        let d = dialog(vec![]);
        assert_eq!(d.values().unwrap(), (45.0, 30.0));
    }

    #[test]
    fn test_quit_click() {
        let mut d = dialog(vec![ScriptEvent::Click(QUIT_CENTER)]);
        assert_eq!(d.interact(), DialogChoice::Quit);
    }

    #[test]
    fn test_fire_click_after_misses() {
        let mut d = dialog(vec![
            ScriptEvent::Click(Vec2::new(2.0, 1.5)),
            ScriptEvent::Click(Vec2::new(0.1, 0.6)),
            ScriptEvent::Click(FIRE_CENTER),
        ]);
        assert_eq!(d.interact(), DialogChoice::Fire);
    }

    #[test]
    fn test_closed_window_means_quit() {
        let mut d = dialog(vec![ScriptEvent::Click(Vec2::new(2.0, 2.0)), ScriptEvent::Close]);
        assert_eq!(d.interact(), DialogChoice::Quit);
    }

    #[test]
    fn test_typed_values() {
        let mut d = dialog(vec![
            ScriptEvent::Type {
                entry: 0,
                text: " 60.5".into(),
            },
            ScriptEvent::Type {
                entry: 1,
                text: "25".into(),
            },
            ScriptEvent::Click(FIRE_CENTER),
        ]);
        assert_eq!(d.interact(), DialogChoice::Fire);
        assert_eq!(d.values().unwrap(), (60.5, 25.0));
    }

    #[test]
    fn test_parse_error_names_field() {
        let mut d = dialog(vec![
            ScriptEvent::Type {
                entry: 1,
                text: "fast".into(),
            },
            ScriptEvent::Click(FIRE_CENTER),
        ]);
        d.interact();
        match d.values() {
            Err(GameError::Parse(e)) => {
                assert_eq!(e.field, "velocity");
                assert_eq!(e.text, "fast");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(parse_field("angle", "inf").is_err());
        assert!(parse_field("angle", "NaN").is_err());
        assert_eq!(parse_field("angle", "1e1"), Ok(10.0));
    }

    #[test]
    fn test_close_releases_window() {
        let mut windows = HeadlessWindows::new();
        let d: InputDialog<Scene> = InputDialog::open(&mut windows, 45.0, 30.0, 0.0).unwrap();
        assert!(!d.window().is_closed());
        let mut window = d.close();
        assert!(window.is_closed());
        assert_eq!(window.text(ShapeId(0)), Err(RenderError::WindowClosed));
        assert_eq!(window.present(), Err(RenderError::WindowClosed));
        assert_eq!(windows.opened(), ["Fire".to_string()]);
    }
}
