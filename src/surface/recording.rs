use bevy::math::{Rect, Vec2};

use super::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Clip(Option<Rect>),
    Clear(Rect),
    BeginPath,
    Circle(Vec2, f32),
    Line(Vec2, Vec2),
    EndPath,
    Stroke,
}

/// Surface that remembers every command it receives
#[derive(Debug)]
pub struct RecordingSurface {
    pub bounds: Rect,
    pub commands: Vec<Command>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            commands: Vec::new(),
        }
    }

    pub fn clears(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::Clear(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::Circle(center, radius) => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_clip(&mut self, region: Option<Rect>) {
        self.commands.push(Command::Clip(region));
    }

    fn clear_region(&mut self, region: Rect) {
        self.commands.push(Command::Clear(region));
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(Command::Circle(center, radius));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(Command::Line(from, to));
    }

    fn end_path(&mut self) {
        self.commands.push(Command::EndPath);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }
}
