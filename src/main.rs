use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod app;
mod config;
mod jobs;
mod models;
mod screens;
mod validation;

use app::FitLifeApp;
use config::ApiConfig;

fn main() -> Result<(), eframe::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitlife=info")))
        .with(fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!("FitLife istemcisi başlatılıyor, sunucu: {}", config.base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 780.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FitLife",
        options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles.insert(
                egui::TextStyle::Body,
                egui::FontId::new(15.0, egui::FontFamily::Proportional),
            );
            style.text_styles.insert(
                egui::TextStyle::Button,
                egui::FontId::new(15.0, egui::FontFamily::Proportional),
            );
            style.text_styles.insert(
                egui::TextStyle::Heading,
                egui::FontId::new(24.0, egui::FontFamily::Proportional),
            );
            style.spacing.item_spacing.y = 6.0;
            cc.egui_ctx.set_style(style);

            Ok(Box::new(FitLifeApp::new(config)))
        }),
    )
}
