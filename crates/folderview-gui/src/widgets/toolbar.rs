/// Top action bar -- tree controls, panel and theme toggles, and branding.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📁 FolderView")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let can_collapse = state.visible_rows.iter().any(|r| r.is_expanded);
        if ui
            .add_enabled(
                can_collapse,
                egui::Button::new("Collapse all").min_size(egui::vec2(90.0, 28.0)),
            )
            .on_hover_text("Close every open folder")
            .clicked()
        {
            state.collapse_all();
        }

        let has_selection = state.selected_node().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("📋 Copy Path"))
            .on_hover_text(if has_selection {
                "Copy the selected path to the clipboard"
            } else {
                "Select an item first"
            })
            .clicked()
        {
            if let Some(path) = state.selected_path() {
                ui.ctx().copy_text(path.to_string_lossy().into_owned());
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About FolderView").clicked() {
                state.show_about = true;
            }

            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            let details_tip = if state.show_details {
                "Hide details panel"
            } else {
                "Show details panel"
            };
            if ui
                .selectable_label(state.show_details, "🗒 Details")
                .on_hover_text(details_tip)
                .clicked()
            {
                state.show_details = !state.show_details;
            }
        });
    });
}
