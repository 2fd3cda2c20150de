//! FolderView application icon generator.
//!
//! Produces a procedural icon: a manila folder with a tab, with three
//! tree-branch lines on its face. The icon is rendered at an arbitrary
//! resolution as RGBA pixel data suitable for use as a window icon.

/// Generate the FolderView icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

const FOLDER_BACK: [u8; 3] = [0xe0, 0xb8, 0x4c];
const FOLDER_FRONT: [u8; 3] = [0xf9, 0xe2, 0xaf];
const BRANCH: [u8; 3] = [0x3a, 0x50, 0x72];

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout (fractions of the icon size) ─────────────────────
    let left = s * 0.08;
    let right = s * 0.92;
    let tab_right = s * 0.45;
    let tab_top = s * 0.16;
    let back_top = s * 0.24;
    let front_top = s * 0.34;
    let bottom = s * 0.84;
    let corner = s * 0.06;

    // Tree branches: a vertical trunk with three horizontal twigs.
    let trunk_x = s * 0.30;
    let line = (s * 0.045).max(1.0);
    let twigs = [s * 0.46, s * 0.58, s * 0.70];
    let twig_end = s * 0.74;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let in_tab = px >= left && px <= tab_right && py >= tab_top && py <= back_top;
            let in_back = inside_rounded(px, py, left, back_top, right, bottom, corner);
            let in_front = inside_rounded(px, py, left, front_top, right, bottom, corner);

            let color = if in_front {
                let on_trunk = (px - trunk_x).abs() <= line / 2.0
                    && py >= front_top + s * 0.06
                    && py <= twigs[2];
                let on_twig = twigs.iter().any(|&ty| {
                    (py - ty).abs() <= line / 2.0 && px >= trunk_x && px <= twig_end
                });
                if on_trunk || on_twig {
                    BRANCH
                } else {
                    FOLDER_FRONT
                }
            } else if in_back || in_tab {
                FOLDER_BACK
            } else {
                continue;
            };

            let i = ((y * size + x) * 4) as usize;
            pixels[i..i + 3].copy_from_slice(&color);
            pixels[i + 3] = 0xff;
        }
    }

    pixels
}

/// Point-in-rounded-rectangle test.
fn inside_rounded(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32, r: f32) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }
    // Distance from the nearest corner centre, only relevant in the corners.
    let cx = px.clamp(x0 + r, x1 - r);
    let cy = py.clamp(y0 + r, y1 - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}
