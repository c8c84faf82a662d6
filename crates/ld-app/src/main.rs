//! Lobby display entry point

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::{error, info};

use ld_content::{Doctor, Roster, Testimonial};
use ld_core::{
    AutoAdvance, CarouselContext, CarouselSubscriber, PagedCarousel, RotatingSlideshow,
};
use ld_ui::{apply_theme, DoctorsPanel, TestimonialsPanel, Theme};

mod config;
mod demo;

use config::AppConfig;

/// Wakes the UI whenever a carousel changes, so timer ticks repaint
struct RepaintSubscriber {
    ctx: Context,
}

impl CarouselSubscriber for RepaintSubscriber {
    fn on_carousel_change(&self, _context: &CarouselContext) {
        self.ctx.request_repaint();
    }
}

/// Main application state
struct LobbyDisplayApp {
    /// Doctors page carousel shared with the panel
    doctors: Arc<PagedCarousel<Doctor>>,

    /// Testimonials slideshow shared with the panel and the timer task
    testimonials: Arc<RotatingSlideshow<Testimonial>>,

    /// Section panels
    doctors_panel: DoctorsPanel,
    testimonials_panel: TestimonialsPanel,

    /// Held exactly while the slideshow is playing
    auto_advance: Option<AutoAdvance>,

    rotate_interval: Duration,

    title: String,

    /// Tokio runtime driving the auto-advance task
    runtime: tokio::runtime::Runtime,

    /// Carousels hold only weak references to subscribers
    _repaint: Arc<dyn CarouselSubscriber>,
}

impl LobbyDisplayApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let roster = load_roster(&config);
        info!(
            doctors = roster.doctors.len(),
            testimonials = roster.testimonials.len(),
            "display content ready"
        );

        let doctors = Arc::new(PagedCarousel::new(roster.doctors, config.page_size()));
        let testimonials = Arc::new(RotatingSlideshow::new(roster.testimonials));

        let repaint: Arc<dyn CarouselSubscriber> = Arc::new(RepaintSubscriber {
            ctx: cc.egui_ctx.clone(),
        });
        doctors.subscribe(repaint.clone());
        testimonials.subscribe(repaint.clone());

        let doctors_panel = DoctorsPanel::new(doctors.clone());
        let testimonials_panel = TestimonialsPanel::new(testimonials.clone());

        Self {
            doctors,
            testimonials,
            doctors_panel,
            testimonials_panel,
            auto_advance: None,
            rotate_interval: config.rotate_interval(),
            title: config.title,
            runtime,
            _repaint: repaint,
        }
    }

    /// Hold the timer guard exactly while the slideshow is playing
    fn reconcile_auto_advance(&mut self) {
        match (self.testimonials.is_playing(), self.auto_advance.is_some()) {
            (true, false) => {
                self.auto_advance = Some(AutoAdvance::spawn(
                    self.runtime.handle(),
                    self.testimonials.clone(),
                    self.rotate_interval,
                ));
            }
            (false, true) => {
                self.auto_advance = None;
            }
            _ => {}
        }
    }
}

impl eframe::App for LobbyDisplayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Space) {
                self.testimonials.toggle_autoplay();
            }

            if i.key_pressed(egui::Key::ArrowLeft) {
                self.testimonials.prev();
            }

            if i.key_pressed(egui::Key::ArrowRight) {
                self.testimonials.next();
            }

            if i.key_pressed(egui::Key::PageUp) {
                self.doctors.prev();
            }

            if i.key_pressed(egui::Key::PageDown) {
                self.doctors.next();
            }
        });

        self.reconcile_auto_advance();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(&self.title).strong());
                });
                ui.add_space(20.0);

                self.doctors_panel.ui(ui);

                ui.add_space(24.0);
                ui.separator();
                ui.add_space(24.0);

                self.testimonials_panel.ui(ui);
                ui.add_space(12.0);
            });
        });
    }
}

/// Load the configured roster, falling back to the built-in one
fn load_roster(config: &AppConfig) -> Roster {
    match &config.roster_path {
        Some(path) => match Roster::from_json_file(path) {
            Ok(roster) => roster,
            Err(e) => {
                error!("failed to load roster from {}: {}", path.display(), e);
                demo::builtin_roster()
            }
        },
        None => demo::builtin_roster(),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting lobby display");

    let config = AppConfig::load(Path::new("lobbyview.json"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(LobbyDisplayApp::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
