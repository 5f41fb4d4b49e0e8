//! Booking desk binary: logging, configuration, runtime, window.

use booking_desk::ui::theme::Theme;
use booking_desk::{debug, ui, App, DeskConfig};

const WINDOW_TITLE: &str = "Booking Desk";

struct DeskApp {
    app: App,
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app);

        // Results arrive through the event channel, not through input
        if self.app.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    debug::init();

    let config = DeskConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;
    tracing::info!(api = %config.api_base_url, demo = config.demo_data, "Starting booking desk");

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let app = App::new(&config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(DeskApp { app }))
        }),
    )?;

    tracing::info!("Booking desk closed");
    Ok(())
}
