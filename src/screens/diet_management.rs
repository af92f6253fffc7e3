use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Diet, MemberRef};
use crate::screens::{load_error_alert, AddDietScreen, Alert, Nav, Screen};

pub struct DietManagementScreen {
    member: MemberRef,
    diets: Vec<Diet>,
    job: Option<Job<Result<Vec<Diet>, ApiError>>>,
    loaded: bool,
    alert: Option<Alert>,
}

impl DietManagementScreen {
    pub fn new(member: MemberRef, api: &ApiClient) -> Self {
        let mut screen = Self {
            member,
            diets: Vec::new(),
            job: None,
            loaded: false,
            alert: None,
        };
        screen.reload(api);
        screen
    }

    pub fn reload(&mut self, api: &ApiClient) {
        let api = api.clone();
        let member_id = self.member.id.clone();
        self.job = Some(Job::spawn(move || api.list_diets(&member_id)));
    }

    pub fn busy(&self) -> bool {
        self.job.is_some()
    }

    fn shows_empty_state(&self) -> bool {
        self.job.is_none() && self.loaded && self.diets.is_empty()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        if let Some(result) = self.job.as_ref().and_then(Job::poll) {
            self.job = None;
            match result {
                Ok(diets) => {
                    tracing::info!(
                        "{} için diyetler yüklendi: {} diyet",
                        self.member.name,
                        diets.len()
                    );
                    self.diets = diets;
                    self.loaded = true;
                }
                Err(err) => {
                    tracing::warn!("diyetler yüklenemedi: {err}");
                    self.alert = Some(load_error_alert(&err, "Diyetler yüklenemedi!"));
                }
            }
        }

        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.member.name).size(22.0).strong());
            ui.label(RichText::new("Diyet Programı").size(15.0).weak());
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let count = if self.job.is_some() {
                "Yükleniyor...".to_owned()
            } else {
                format!("{} diyet planı mevcut", self.diets.len())
            };
            ui.label(RichText::new(count).size(13.0).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("+ Diyet Ekle").clicked() {
                    nav = Nav::Push(Screen::AddDiet(AddDietScreen::new(self.member.clone())));
                }
            });
        });
        ui.add_space(10.0);

        if self.job.is_some() {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Diyetler yükleniyor...");
            });
            return nav;
        }

        if self.shows_empty_state() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("🥗").size(42.0));
                ui.label(RichText::new("Henüz diyet planı eklenmemiş").size(17.0).strong());
                ui.label(
                    RichText::new("İlk planı eklemek için Diyet Ekle butonuna tıklayın")
                        .size(13.0)
                        .weak(),
                );
            });
            return nav;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for diet in &self.diets {
                diet_card(ui, diet);
            }
        });

        nav
    }
}

fn diet_card(ui: &mut egui::Ui, diet: &Diet) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&diet.meal_name).size(16.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(format!("⏰ {}", diet.meal_time)).size(13.0));
            });
        });
        ui.label(RichText::new(&diet.food_name).size(15.0));
        if let Some(description) = &diet.description {
            ui.label(RichText::new(description).size(13.0).weak());
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("🔥 {} kcal", diet.calories)).size(13.0));
            ui.label(RichText::new(diet.plan_type.label()).size(13.0).weak());
            if let Some(day) = &diet.day_of_week {
                ui.label(RichText::new(day).size(13.0).weak());
            }
        });
    });
    ui.add_space(8.0);
}
