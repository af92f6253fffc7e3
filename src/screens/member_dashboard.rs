use eframe::egui::{self, Align, Layout, RichText, ScrollArea};
use egui_extras::{Column, TableBuilder};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Diet, Exercise};
use crate::screens::{exercise_card, open_video, Alert, LoginScreen, Nav, Screen};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Exercises,
    Diets,
}

/// Read-only view of the signed-in member's assigned programs.
pub struct MemberDashboardScreen {
    user_id: String,
    user_name: String,
    exercises: Vec<Exercise>,
    diets: Vec<Diet>,
    exercises_job: Option<Job<Result<Vec<Exercise>, ApiError>>>,
    diets_job: Option<Job<Result<Vec<Diet>, ApiError>>>,
    tab: Tab,
    alert: Option<Alert>,
}

impl MemberDashboardScreen {
    pub fn new(user_id: String, user_name: String, api: &ApiClient) -> Self {
        tracing::info!("{user_name} ({user_id}) için veriler yükleniyor");

        let exercises_api = api.clone();
        let exercises_id = user_id.clone();
        let diets_api = api.clone();
        let diets_id = user_id.clone();

        Self {
            user_id,
            user_name,
            exercises: Vec::new(),
            diets: Vec::new(),
            exercises_job: Some(Job::spawn(move || exercises_api.list_exercises(&exercises_id))),
            diets_job: Some(Job::spawn(move || diets_api.list_diets(&diets_id))),
            tab: Tab::Exercises,
            alert: None,
        }
    }

    pub fn busy(&self) -> bool {
        self.exercises_job.is_some() || self.diets_job.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        if let Some(result) = self.exercises_job.as_ref().and_then(Job::poll) {
            self.exercises_job = None;
            match result {
                Ok(exercises) => self.exercises = exercises,
                Err(err) => {
                    tracing::warn!("egzersizler yüklenemedi ({}): {err}", self.user_id);
                    self.alert = Some(Alert::error("Veriler yüklenirken hata oluştu!"));
                }
            }
        }
        if let Some(result) = self.diets_job.as_ref().and_then(Job::poll) {
            self.diets_job = None;
            match result {
                Ok(diets) => self.diets = diets,
                Err(err) => {
                    tracing::warn!("diyetler yüklenemedi ({}): {err}", self.user_id);
                    self.alert = Some(Alert::error("Veriler yüklenirken hata oluştu!"));
                }
            }
        }

        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Hoş geldin!").size(14.0));
                ui.label(RichText::new(&self.user_name).size(22.0).strong());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Çıkış").clicked() {
                    nav = Nav::Reset(Screen::Login(LoginScreen::default()));
                }
            });
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.tab == Tab::Exercises, "🏋 Spor Programım")
                .clicked()
            {
                self.tab = Tab::Exercises;
            }
            if ui
                .selectable_label(self.tab == Tab::Diets, "🥗 Diyet Programım")
                .clicked()
            {
                self.tab = Tab::Diets;
            }
        });
        ui.separator();
        ui.add_space(8.0);

        if self.busy() {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Yükleniyor...");
            });
            return nav;
        }

        match self.tab {
            Tab::Exercises => self.show_exercises(ui),
            Tab::Diets => self.show_diets(ui),
        }

        nav
    }

    fn show_exercises(&mut self, ui: &mut egui::Ui) {
        if self.exercises.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("🏋").size(42.0));
                ui.label(RichText::new("Henüz egzersiz programın yok").size(16.0).strong());
            });
            return;
        }

        let mut video_click: Option<String> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for exercise in &self.exercises {
                if exercise_card(ui, exercise) {
                    video_click = exercise.video_url.clone();
                }
            }
        });
        if let Some(url) = video_click {
            self.alert = open_video(ui.ctx(), &url);
        }
    }

    fn show_diets(&mut self, ui: &mut egui::Ui) {
        if self.diets.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("🥗").size(42.0));
                ui.label(RichText::new("Henüz diyet planın yok").size(16.0).strong());
            });
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(55.0))
            .column(Column::auto().at_least(60.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Öğün");
                });
                header.col(|ui| {
                    ui.strong("Saat");
                });
                header.col(|ui| {
                    ui.strong("Yemek");
                });
                header.col(|ui| {
                    ui.strong("Kalori");
                });
                header.col(|ui| {
                    ui.strong("Gün");
                });
            })
            .body(|mut body| {
                for diet in &self.diets {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&diet.meal_name);
                        });
                        row.col(|ui| {
                            ui.label(&diet.meal_time);
                        });
                        row.col(|ui| {
                            ui.label(&diet.food_name);
                        });
                        row.col(|ui| {
                            ui.label(format!("{} kcal", diet.calories));
                        });
                        row.col(|ui| {
                            ui.label(diet.day_of_week.as_deref().unwrap_or("-"));
                        });
                    });
                }
            });
    }
}
