/// Main `eframe::App` implementation for FolderView.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::AppState;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so drive
/// enumeration is finished by the time the first frame is drawn.
pub struct FolderViewState {
    pub(crate) inner: AppState,
}

impl FolderViewState {
    /// Enumerate drives. Call this before `eframe::run_native`.
    pub fn build() -> Self {
        let state = AppState::new();
        tracing::info!("{} drives available", state.tree().roots.len());
        Self { inner: state }
    }
}

/// The FolderView application.
pub struct FolderViewApp {
    state: AppState,
}

impl FolderViewApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FolderViewState) -> Self {
        if let Some(fonts) = system_fonts() {
            cc.egui_ctx.set_fonts(fonts);
        }
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self { state: state.inner }
    }
}

/// Register Segoe UI as the primary font when running on Windows.
///
/// Returns `None` (keep egui's defaults) elsewhere or if the font file
/// cannot be read.
fn system_fonts() -> Option<egui::FontDefinitions> {
    if !cfg!(windows) {
        return None;
    }

    let system_root = std::env::var("SystemRoot").unwrap_or_else(|_| "C:\\Windows".to_string());
    let font_path = format!("{}\\Fonts\\segoeui.ttf", system_root);

    let bytes = match std::fs::read(&font_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(
                "Could not load Segoe UI from {}: {} -- using default font",
                font_path,
                e
            );
            return None;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("SegoeUI".to_owned(), egui::FontData::from_owned(bytes).into());
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, "SegoeUI".to_owned());
    tracing::info!("Loaded Segoe UI from {}", font_path);
    Some(fonts)
}

impl eframe::App for FolderViewApp {
    /// Match the GPU clear colour to the panel background so there is no
    /// flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        visuals.panel_fill.to_normalized_gamma_f32()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FolderView")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📁 FolderView")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Browse every drive as a tree.\n\
                             Folders are read the first time you open them.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Right details panel ───────────────────────────────────────────
        if self.state.show_details {
            egui::SidePanel::right("details_panel")
                .default_width(260.0)
                .min_width(180.0)
                .max_width(420.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        panels::details_panel::details_panel(ui, &self.state);
                    });
                });
        }

        // ── Central panel (tree) ──────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tree_panel::tree_panel(ui, &mut self.state);
        });
    }
}
