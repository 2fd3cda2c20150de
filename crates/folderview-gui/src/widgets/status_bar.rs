/// Bottom status bar — tree statistics and the selected path.
use crate::state::AppState;
use folderview_core::model::size::format_count;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    let tree = state.tree();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} drives", tree.roots.len()))
                .size(12.0)
                .color(color_normal),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} folders opened",
                format_count(tree.loaded_dir_count() as u64)
            ))
            .size(12.0)
            .color(color_normal),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!("{} items", format_count(tree.len() as u64)))
                .size(12.0)
                .color(color_weak),
        );

        if let Some(path) = state.selected_path() {
            ui.separator();
            ui.label(
                egui::RichText::new(truncate_path(&path.to_string_lossy(), 80))
                    .size(12.0)
                    .color(color_accent),
            );
        }
    });
}

/// Truncate a path string to at most `max_chars` characters, replacing the
/// middle with "..." if needed.
fn truncate_path(path: &str, max_chars: usize) -> String {
    let len = path.chars().count();
    if len <= max_chars {
        return path.to_string();
    }
    let half = max_chars.saturating_sub(3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(len - half).collect();
    format!("{head}...{tail}")
}
