use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Exercise, MemberRef};
use crate::screens::{
    exercise_card, load_error_alert, open_video, AddExerciseScreen, Alert, Nav, Screen,
};

pub struct ExerciseManagementScreen {
    member: MemberRef,
    exercises: Vec<Exercise>,
    job: Option<Job<Result<Vec<Exercise>, ApiError>>>,
    loaded: bool,
    alert: Option<Alert>,
}

impl ExerciseManagementScreen {
    pub fn new(member: MemberRef, api: &ApiClient) -> Self {
        let mut screen = Self {
            member,
            exercises: Vec::new(),
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
        self.job = Some(Job::spawn(move || api.list_exercises(&member_id)));
    }

    pub fn busy(&self) -> bool {
        self.job.is_some()
    }

    fn shows_empty_state(&self) -> bool {
        self.job.is_none() && self.loaded && self.exercises.is_empty()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        if let Some(result) = self.job.as_ref().and_then(Job::poll) {
            self.job = None;
            match result {
                Ok(exercises) => {
                    tracing::info!(
                        "{} için egzersizler yüklendi: {} egzersiz",
                        self.member.name,
                        exercises.len()
                    );
                    self.exercises = exercises;
                    self.loaded = true;
                }
                Err(err) => {
                    tracing::warn!("egzersizler yüklenemedi: {err}");
                    self.alert = Some(load_error_alert(&err, "Egzersizler yüklenemedi!"));
                }
            }
        }

        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.member.name).size(22.0).strong());
            ui.label(RichText::new("Spor Programı").size(15.0).weak());
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let count = if self.job.is_some() {
                "Yükleniyor...".to_owned()
            } else {
                format!("{} egzersiz mevcut", self.exercises.len())
            };
            ui.label(RichText::new(count).size(13.0).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("+ Egzersiz Ekle").clicked() {
                    nav = Nav::Push(Screen::AddExercise(AddExerciseScreen::new(
                        self.member.clone(),
                    )));
                }
            });
        });
        ui.add_space(10.0);

        if self.job.is_some() {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Egzersizler yükleniyor...");
            });
            return nav;
        }

        if self.shows_empty_state() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("🏋").size(42.0));
                ui.label(RichText::new("Henüz egzersiz eklenmemiş").size(17.0).strong());
                ui.label(
                    RichText::new("İlk egzersizi eklemek için Egzersiz Ekle butonuna tıklayın")
                        .size(13.0)
                        .weak(),
                );
            });
            return nav;
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

        nav
    }
}
