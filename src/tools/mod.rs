//! The static tool catalogue.
//!
//! Tools are plain descriptors; the behavior of the selection tool lives in
//! the interaction controller, shape tools carry a generator and util tools an
//! action.

use egui::Pos2;

use crate::error::ToolError;
use crate::shape::{Shape, ShapeKind};
use crate::style::Styles;

/// Utility tools that act on the scene without creating shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilTool {
    Eraser,
    Text,
    Brush,
}

impl UtilTool {
    /// Run the tool's own action.
    ///
    /// The eraser's effect is applied by the controller at the hit point, so
    /// its action only reports success. Text and brush are placeholders.
    pub fn action(&self) -> Result<(), ToolError> {
        match self {
            UtilTool::Eraser => Ok(()),
            UtilTool::Text => Err(ToolError::Unimplemented("text")),
            UtilTool::Brush => Err(ToolError::Unimplemented("brush")),
        }
    }
}

/// What a tool does, with its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolType {
    Selection,
    Shape(ShapeKind),
    Util(UtilTool),
}

/// Discriminant of [`ToolType`] without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Shape,
    Util,
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub title: &'static str,
    pub icon: &'static str,
    pub hotkey: Option<char>,
    pub tool_type: ToolType,
}

impl ToolDescriptor {
    pub fn category(&self) -> ToolCategory {
        match self.tool_type {
            ToolType::Selection => ToolCategory::Selection,
            ToolType::Shape(_) => ToolCategory::Shape,
            ToolType::Util(_) => ToolCategory::Util,
        }
    }

    pub fn is_selection(&self) -> bool {
        self.category() == ToolCategory::Selection
    }

    /// Create a new shape at `point` if this is a shape tool
    pub fn generate_shape(&self, point: Pos2, styles: Styles) -> Option<Shape> {
        match self.tool_type {
            ToolType::Shape(kind) => Some(kind.generate(point, styles)),
            _ => None,
        }
    }

    /// Tooltip text, with the hotkey when there is one
    pub fn hover_text(&self) -> String {
        match self.hotkey {
            Some(key) => format!("{} ({key})", self.title),
            None => self.title.to_owned(),
        }
    }
}

static TOOLS: [ToolDescriptor; 8] = [
    ToolDescriptor {
        title: "cursor",
        icon: "🖱",
        hotkey: Some('v'),
        tool_type: ToolType::Selection,
    },
    ToolDescriptor {
        title: "rectangle",
        icon: "⬜",
        hotkey: Some('r'),
        tool_type: ToolType::Shape(ShapeKind::Rectangle),
    },
    ToolDescriptor {
        title: "circle",
        icon: "⭕",
        hotkey: Some('c'),
        tool_type: ToolType::Shape(ShapeKind::Circle),
    },
    ToolDescriptor {
        title: "arrow",
        icon: "➡",
        hotkey: Some('a'),
        tool_type: ToolType::Shape(ShapeKind::Arrow),
    },
    ToolDescriptor {
        title: "line",
        icon: "╱",
        hotkey: Some('l'),
        tool_type: ToolType::Shape(ShapeKind::Line),
    },
    ToolDescriptor {
        title: "eraser",
        icon: "⌫",
        hotkey: Some('e'),
        tool_type: ToolType::Util(UtilTool::Eraser),
    },
    ToolDescriptor {
        title: "text",
        icon: "A",
        hotkey: Some('t'),
        tool_type: ToolType::Util(UtilTool::Text),
    },
    ToolDescriptor {
        title: "brush",
        icon: "🖌",
        hotkey: Some('b'),
        tool_type: ToolType::Util(UtilTool::Brush),
    },
];

/// Every tool, in toolbar order
pub fn tools() -> &'static [ToolDescriptor] {
    &TOOLS
}

pub fn find_tool(title: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.title == title)
}

/// The tool bound to a pressed character, if any
pub fn tool_for_hotkey(key: char) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.hotkey == Some(key))
}

/// The selection tool, which the controller falls back to after every gesture
pub fn selection_tool() -> &'static ToolDescriptor {
    &TOOLS[0]
}
