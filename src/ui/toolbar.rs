// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and tool selection UI.
//!
//! This module provides the toolbar interface for selecting drawing
//! tools and switching between the ceremony and banquet plans.

use crate::app::Tool;
use crate::models::plan::Tab;

pub enum ToolbarAction {
    None,
    SwitchTab(Tab),
}

/// Display the toolbar with tool selection buttons.
pub fn show(ui: &mut egui::Ui, current_tool: &mut Tool, tab: Tab) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Plan:");
        for candidate in [Tab::Ceremony, Tab::Banquet] {
            if ui.selectable_label(tab == candidate, candidate.label()).clicked() && tab != candidate {
                action = ToolbarAction::SwitchTab(candidate);
            }
        }

        ui.separator();
        ui.label("Tools:");

        let tools = [
            (Tool::Select, "⬆ Select"),
            (Tool::Freehand, "✏ Freehand"),
            (Tool::Line, "⟋ Line"),
            (Tool::Rectangle, "▭ Rectangle"),
            (Tool::Table, "◼ Table"),
            (Tool::Erase, "✖ Erase"),
        ];
        for (tool, label) in tools {
            if ui.selectable_label(*current_tool == tool, label).clicked() {
                *current_tool = tool;
            }
        }

        ui.separator();

        // Tool description
        let tool_text = match current_tool {
            Tool::Select => "Click to select, drag tables or area corners to move them",
            Tool::Freehand => "Drag to draw an area",
            Tool::Line => "Click to add corners, double-click or Escape to close the area",
            Tool::Rectangle => "Drag to draw a rectangular area",
            Tool::Table => "Click to place a table",
            Tool::Erase => "Click an area to erase it",
        };

        ui.label(egui::RichText::new(tool_text).italics().weak());
    });

    action
}
