/// Details panel — shows information about the currently selected node.
use crate::state::AppState;
use folderview_core::model::size::{format_count, format_size};
use folderview_core::model::NodeKind;
use folderview_core::platform;
use egui::Ui;

/// Draw the details panel for the currently selected node.
///
/// Metadata comes from the snapshot taken when the node was selected.
pub fn details_panel(ui: &mut Ui, state: &AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    let Some(node) = state.selected() else {
        ui.label(
            egui::RichText::new("Select an item to see details")
                .color(color_muted)
                .italics(),
        );
        return;
    };

    let (icon, kind) = match node.kind {
        NodeKind::Drive => ("💽", "Drive"),
        NodeKind::Directory => ("📁", "Folder"),
        NodeKind::File => ("📄", "File"),
    };
    ui.heading(egui::RichText::new(icon).size(16.0));
    ui.add_space(2.0);

    ui.label(
        egui::RichText::new(node.name.as_str())
            .size(14.0)
            .strong()
            .color(color_normal),
    );
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(node.full_path.to_string_lossy())
            .size(11.0)
            .color(color_muted),
    );

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    let details = state.selected_details();

    egui::Grid::new("details_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Type:").color(color_muted));
            ui.label(egui::RichText::new(kind).color(color_normal));
            ui.end_row();

            if node.is_dir() {
                ui.label(egui::RichText::new("Contents:").color(color_muted));
                let contents = if node.is_expandable_hint() {
                    "not opened yet".to_owned()
                } else {
                    let dirs = node
                        .children
                        .iter()
                        .filter(|&&c| state.tree().node(c).is_dir())
                        .count();
                    let files = node.children.len() - dirs;
                    format!(
                        "{} folders, {} files",
                        format_count(dirs as u64),
                        format_count(files as u64)
                    )
                };
                ui.label(egui::RichText::new(contents).color(color_normal));
                ui.end_row();
            }

            match details {
                Some(d) => {
                    if !d.is_dir {
                        ui.label(egui::RichText::new("Size:").color(color_muted));
                        ui.label(
                            egui::RichText::new(format_size(d.size))
                                .color(color_accent)
                                .strong(),
                        );
                        ui.end_row();
                    }

                    ui.label(egui::RichText::new("Modified:").color(color_muted));
                    ui.label(egui::RichText::new(d.modified_display()).color(color_normal));
                    ui.end_row();

                    ui.label(egui::RichText::new("Created:").color(color_muted));
                    ui.label(egui::RichText::new(d.created_display()).color(color_normal));
                    ui.end_row();

                    if d.readonly {
                        ui.label(egui::RichText::new("Attributes:").color(color_muted));
                        ui.label(egui::RichText::new("read-only").color(color_normal));
                        ui.end_row();
                    }
                    if d.is_symlink {
                        ui.label(egui::RichText::new("Link:").color(color_muted));
                        ui.label(egui::RichText::new("symbolic link").color(color_normal));
                        ui.end_row();
                    }
                }
                None => {
                    ui.label(egui::RichText::new("Metadata:").color(color_muted));
                    ui.label(egui::RichText::new("unavailable").color(color_warning));
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("📂 Open in file manager").clicked() {
            if let Err(e) = platform::reveal_in_file_manager(&node.full_path, node.is_dir()) {
                tracing::warn!(
                    "Could not open {} in file manager: {}",
                    node.full_path.display(),
                    e
                );
            }
        }

        if ui.button("📋 Copy Path").clicked() {
            ui.ctx().copy_text(node.full_path.to_string_lossy().into_owned());
        }
    });
}
