/// Virtualised TreeView widget — the core UI component.
///
/// Only renders rows visible in the viewport, so drawing cost does not grow
/// with the number of opened folders. Uses the flat `visible_rows` list
/// maintained by `AppState`; opening a folder is routed back to
/// `AppState::toggle_expand`, which loads it on first use.
use crate::state::{AppState, ROW_HEIGHT};
use folderview_core::model::{FileNode, NodeKind};
use folderview_core::platform;
use egui::{Key, Rect, Response, Sense, Ui, Vec2};

/// Indentation per depth level in pixels.
const INDENT_PX: f32 = 20.0;

/// Something the user did to a row, applied after rendering.
enum RowAction {
    Select(usize),
    Toggle(usize),
    SelectAndToggle(usize),
}

/// Draw the virtualised tree view.
///
/// Returns the response for the tree background so callers can detect
/// interactions.
pub fn tree_view(ui: &mut Ui, state: &mut AppState) -> Response {
    if state.visible_rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No drives found.")
                    .color(ui.visuals().weak_text_color()),
            );
        });
        return ui.interact(ui.max_rect(), ui.id().with("empty_tree"), Sense::click());
    }

    handle_keyboard(ui, state);

    let scroll_to = state.scroll_to_row.take();
    let action = render_tree_rows(ui, state, scroll_to);

    // Apply deferred state mutations now that the tree is no longer borrowed.
    match action {
        Some(RowAction::Select(row)) => state.select_row(row),
        Some(RowAction::Toggle(row)) => state.toggle_expand(row),
        Some(RowAction::SelectAndToggle(row)) => {
            state.select_row(row);
            state.toggle_expand(row);
        }
        None => {}
    }

    ui.interact(ui.max_rect(), ui.id().with("tree_bg"), Sense::hover())
}

/// Arrow keys move and open/close the selection; Enter toggles it.
fn handle_keyboard(ui: &Ui, state: &mut AppState) {
    // Nothing in the window takes text input, so the tree owns the arrows.
    let (up, down, left, right, enter) = ui.input(|i| {
        (
            i.key_pressed(Key::ArrowUp),
            i.key_pressed(Key::ArrowDown),
            i.key_pressed(Key::ArrowLeft),
            i.key_pressed(Key::ArrowRight),
            i.key_pressed(Key::Enter),
        )
    });

    if up {
        state.move_selection(-1);
    }
    if down {
        state.move_selection(1);
    }
    if left {
        state.collapse_selected();
    }
    if right {
        state.expand_selected();
    }
    if enter {
        if let Some(row) = state.selected_node().and_then(|n| state.row_of(n)) {
            state.toggle_expand(row);
        }
    }
}

/// Render the visible slice of rows and return the user's action, if any.
fn render_tree_rows(ui: &mut Ui, state: &AppState, scroll_to: Option<usize>) -> Option<RowAction> {
    // ── Extract theme-adaptive colours once ─────────────────────────────
    let is_dark = ui.visuals().dark_mode;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_selection = ui.visuals().selection.bg_fill;
    let color_hover = if is_dark {
        egui::Color32::from_rgb(0x35, 0x35, 0x4a)
    } else {
        egui::Color32::from_rgba_unmultiplied(
            color_selection.r(),
            color_selection.g(),
            color_selection.b(),
            40,
        )
    };
    let color_drive = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);
    let color_folder = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    let color_file = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);

    let tree = state.tree();
    let total_rows = state.visible_rows.len();
    let total_height = total_rows as f32 * ROW_HEIGHT;

    let mut action: Option<RowAction> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Reserve the full virtual height so the scrollbar is correct.
            let (response, painter) = ui.allocate_painter(
                Vec2::new(ui.available_width(), total_height),
                Sense::click(),
            );

            let top_y = response.rect.top();
            let row_rect_at = |row_idx: usize| {
                Rect::from_min_size(
                    egui::pos2(response.rect.left(), top_y + row_idx as f32 * ROW_HEIGHT),
                    Vec2::new(response.rect.width(), ROW_HEIGHT),
                )
            };

            if let Some(target) = scroll_to.filter(|&t| t < total_rows) {
                ui.scroll_to_rect(row_rect_at(target), None);
            }

            let viewport = ui.clip_rect();
            let first_visible = ((viewport.top() - top_y) / ROW_HEIGHT).floor().max(0.0) as usize;
            let last_visible = ((viewport.bottom() - top_y) / ROW_HEIGHT)
                .ceil()
                .clamp(0.0, total_rows as f32) as usize;

            for row_idx in first_visible..last_visible {
                let row = &state.visible_rows[row_idx];
                let node = tree.node(row.node_index);
                let row_rect = row_rect_at(row_idx);

                if !viewport.intersects(row_rect) {
                    continue;
                }

                let is_selected = state.selected_node() == Some(row.node_index);
                if is_selected {
                    painter.rect_filled(row_rect, 0.0, color_selection);
                }

                let row_response = ui.interact(
                    row_rect,
                    ui.id().with(("tree_row", row_idx)),
                    Sense::click(),
                );

                if row_response.hovered() && !is_selected {
                    painter.rect_filled(row_rect, 0.0, color_hover);
                }

                if row_response.clicked() {
                    action = Some(RowAction::Select(row_idx));
                }
                if row_response.double_clicked() && node.is_dir() {
                    action = Some(RowAction::SelectAndToggle(row_idx));
                }

                row_response
                    .on_hover_text_at_pointer(node.full_path.to_string_lossy().into_owned())
                    .context_menu(|ui| {
                        context_menu(ui, node);
                    });

                let indent = INDENT_PX * row.depth as f32;
                let text_x = row_rect.left() + indent + 18.0;
                let text_y = row_rect.center().y;

                // Expand/collapse arrow. Unloaded folders always get one so
                // they can be opened; loaded empty folders do not.
                if node.shows_arrow() {
                    let arrow_text = if row.is_expanded { "▼" } else { "▶" };
                    let arrow_rect = Rect::from_min_size(
                        egui::pos2(row_rect.left() + indent, row_rect.top()),
                        Vec2::new(16.0, ROW_HEIGHT),
                    );
                    let arrow_response =
                        ui.interact(arrow_rect, ui.id().with(("arrow", row_idx)), Sense::click());
                    if arrow_response.clicked() {
                        action = Some(RowAction::Toggle(row_idx));
                    }
                    painter.text(
                        egui::pos2(row_rect.left() + indent + 2.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        arrow_text,
                        egui::FontId::proportional(11.0),
                        color_weak,
                    );
                }

                let (icon, icon_color) = match node.kind {
                    NodeKind::Drive => ("💽", color_drive),
                    NodeKind::Directory if row.is_expanded => ("📂", color_folder),
                    NodeKind::Directory => ("📁", color_folder),
                    NodeKind::File => ("📄", color_file),
                };
                painter.text(
                    egui::pos2(text_x, text_y),
                    egui::Align2::LEFT_CENTER,
                    icon,
                    egui::FontId::proportional(13.0),
                    icon_color,
                );

                // Name, clipped with an ellipsis if it overruns the row.
                let name_x = text_x + 20.0;
                let max_name_w = (row_rect.right() - name_x - 8.0).max(20.0);
                let name_font = egui::FontId::proportional(13.0);
                let name_galley =
                    painter.layout_no_wrap(node.name.to_string(), name_font, color_normal);
                let name_pos = egui::pos2(name_x, text_y - name_galley.size().y / 2.0);

                if name_galley.size().x <= max_name_w {
                    painter.galley(name_pos, name_galley, color_normal);
                } else {
                    let clip = Rect::from_min_size(
                        egui::pos2(name_x, row_rect.top()),
                        Vec2::new(max_name_w - 12.0, ROW_HEIGHT),
                    );
                    painter
                        .with_clip_rect(painter.clip_rect().intersect(clip))
                        .galley(name_pos, name_galley, color_normal);
                    painter.text(
                        egui::pos2(name_x + max_name_w - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        "…",
                        egui::FontId::proportional(13.0),
                        color_weak,
                    );
                }
            }
        });

    action
}

/// Right-click context menu for a tree node.
fn context_menu(ui: &mut Ui, node: &FileNode) {
    if ui.button("📂 Open in file manager").clicked() {
        if let Err(e) = platform::reveal_in_file_manager(&node.full_path, node.is_dir()) {
            tracing::warn!(
                "Could not open {} in file manager: {}",
                node.full_path.display(),
                e
            );
        }
        ui.close_menu();
    }

    if ui.button("📋 Copy Path").clicked() {
        ui.ctx().copy_text(node.full_path.to_string_lossy().into_owned());
        ui.close_menu();
    }

    if ui.button("📋 Copy Name").clicked() {
        ui.ctx().copy_text(node.name.to_string());
        ui.close_menu();
    }

    ui.separator();

    let kind = match node.kind {
        NodeKind::Drive => "Drive",
        NodeKind::Directory => "Folder",
        NodeKind::File => "File",
    };
    let note = if node.is_expandable_hint() {
        " · not opened yet"
    } else {
        ""
    };
    ui.label(
        egui::RichText::new(format!("{kind}{note}"))
            .size(11.0)
            .color(ui.visuals().weak_text_color()),
    );
}
