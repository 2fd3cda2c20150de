/// Main TreeView panel.
use crate::state::AppState;
use crate::widgets;
use egui::Ui;

/// Draw the tree panel (centre content area).
pub fn tree_panel(ui: &mut Ui, state: &mut AppState) {
    // Column header.
    let header_height = 20.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), header_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let header_bg = if ui.visuals().dark_mode {
        egui::Color32::from_rgb(0x22, 0x22, 0x34)
    } else {
        egui::Color32::from_rgb(0xe8, 0xe8, 0xf0)
    };
    painter.rect_filled(rect, 0.0, header_bg);
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        "Name",
        egui::FontId::proportional(12.0),
        ui.visuals().weak_text_color(),
    );

    ui.separator();

    widgets::tree_view::tree_view(ui, state);
}
