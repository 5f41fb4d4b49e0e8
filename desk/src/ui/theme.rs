//! # GUI Theme
//!
//! Dark theme with a teal accent, applied once at startup.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

/// Desk color palette
#[derive(Clone)]
pub struct DeskColors {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    /// Primary accent (selection, headings)
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    /// Secondary text
    pub muted: Color32,
}

impl Default for DeskColors {
    fn default() -> Self {
        DeskColors {
            background: Color32::from_rgb(18, 20, 24),
            panel: Color32::from_rgb(26, 29, 35),
            text: Color32::from_rgb(235, 238, 242),
            accent: Color32::from_rgb(0, 168, 150),
            accent_dark: Color32::from_rgb(0, 110, 98),
            border: Color32::from_rgb(55, 60, 70),
            success: Color32::from_rgb(80, 200, 120),
            error: Color32::from_rgb(235, 87, 87),
            warning: Color32::from_rgb(242, 169, 59),
            muted: Color32::from_rgb(150, 155, 165),
        }
    }
}

/// Application theme
pub struct Theme {
    pub colors: DeskColors,
    pub normal: Color32,
    pub selected: Color32,
    pub border: Color32,
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = DeskColors::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.muted,
            success: colors.success,
            error: colors.error,
            warning: colors.warning,
            colors,
        }
    }
}

impl Theme {
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.panel;
        visuals.extreme_bg_color = Color32::from_rgb(12, 13, 16);

        visuals.widgets.noninteractive.bg_fill = colors.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.bg_fill = colors.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);
        visuals.widgets.active.bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = colors.accent_dark;
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the desk theme to an egui context
    ///
    /// Uses `style_mut_of`, the supported way to modify styles in egui 0.33.
    pub fn apply(ctx: &Context) {
        let visuals = Theme::default().visuals();

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied desk theme");
    }
}
