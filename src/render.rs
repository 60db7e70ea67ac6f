//! Text rendering of query results for the terminal.

use ansi_term::{Colour, Style};

use crate::api::{DeskRecommendation, DeskStatus, Space, SpaceType};
use crate::view::ViewState;

pub const NO_RESULTS_MESSAGE: &str = "No available desks found matching your criteria.";
pub const PENDING_MESSAGE: &str = "Searching...";

/// Renders styled or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Green for available desks, yellow otherwise.
    fn status_style(status: DeskStatus) -> Style {
        if status.is_available() {
            Colour::Green.bold()
        } else {
            Colour::Yellow.bold()
        }
    }

    /// One desk as a block of lines: a title line followed by indented details.
    pub fn desk(&self, desk: &DeskRecommendation) -> String {
        let title = format!("{} - {} Desk", desk.id, desk.desk_type.label());
        let lines = vec![
            self.paint(Colour::Blue.bold(), &title),
            format!(
                "  Floor {}, Zone: {} ({})",
                desk.floor, desk.zone, desk.area_id
            ),
            format!("  Location: {}", desk.location_description),
            format!("  Features: {}", desk.features.join(", ")),
            format!(
                "  Status: {}",
                self.paint(Self::status_style(desk.status), desk.status.label())
            ),
        ];
        lines.join("\n")
    }

    /// A recommendation list, or the explicit "no results" message.
    pub fn recommendations(&self, desks: &[DeskRecommendation]) -> String {
        let mut out = self.paint(Style::new().bold(), "Recommendations:");
        out.push('\n');
        if desks.is_empty() {
            out.push_str(NO_RESULTS_MESSAGE);
        } else {
            let blocks: Vec<String> = desks.iter().map(|d| self.desk(d)).collect();
            out.push_str(&blocks.join("\n\n"));
        }
        out
    }

    pub fn alert(&self, message: &str) -> String {
        format!("{} {}", self.paint(Colour::Red.bold(), "Error!"), message)
    }

    pub fn space(&self, space: &Space) -> String {
        let kind = match space.space_type {
            SpaceType::Floor => "floor",
            SpaceType::Zone => "zone",
            SpaceType::Area => "area",
        };
        let mut line = format!(
            "{} - {} ({}, capacity {})",
            self.paint(Style::new().bold(), &space.id),
            space.name,
            kind,
            space.capacity
        );
        if let Some(parent) = &space.parent_id {
            line.push_str(&format!(" in {}", parent));
        }
        line
    }

    pub fn state(&self, state: &ViewState) -> String {
        match state {
            ViewState::Idle => String::new(),
            ViewState::Pending => PENDING_MESSAGE.to_string(),
            ViewState::Succeeded(desks) => self.recommendations(desks),
            ViewState::Failed(message) => self.alert(message),
        }
    }
}
