use std::time::Duration;

use eframe::egui;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::screens::{LoginScreen, Nav, Screen};

/// The whole client: a navigation stack of screens over one API handle.
/// The top screen renders and decides where to go next; popping back to
/// a list screen re-fetches it, which is how the app stays consistent
/// after an add.
pub struct FitLifeApp {
    api: ApiClient,
    stack: Vec<Screen>,
}

impl FitLifeApp {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            stack: vec![Screen::Login(LoginScreen::default())],
        }
    }
}

impl eframe::App for FitLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Self { api, stack } = self;

        let nav = egui::CentralPanel::default()
            .show(ctx, |ui| match stack.last_mut() {
                Some(screen) => screen.show(ui, api),
                None => Nav::None,
            })
            .inner;

        match nav {
            Nav::None => {}
            Nav::Push(screen) => self.stack.push(screen),
            Nav::Back => {
                self.stack.pop();
                if self.stack.is_empty() {
                    self.stack.push(Screen::Login(LoginScreen::default()));
                }
                if let Some(screen) = self.stack.last_mut() {
                    screen.focus_regained(&self.api);
                }
            }
            Nav::Reset(screen) => {
                self.stack.clear();
                self.stack.push(screen);
            }
        }

        // Keep polling while any screen still waits on a request.
        if self.stack.iter().any(Screen::busy) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
