use eframe::egui::{self, RichText};

use crate::api::ApiClient;
use crate::models::MemberRef;
use crate::screens::{
    nav_card, DietManagementScreen, ExerciseManagementScreen, Nav, Screen,
};

pub struct MemberDetailScreen {
    member: MemberRef,
}

impl MemberDetailScreen {
    pub fn new(member: MemberRef) -> Self {
        Self { member }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, api: &ApiClient) -> Nav {
        let mut nav = Nav::None;

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.member.name).size(24.0).strong());
            ui.label(RichText::new(&self.member.email).size(14.0).weak());
        });
        ui.add_space(20.0);

        ui.label(RichText::new("Program Yönetimi").size(17.0).strong());
        ui.add_space(8.0);

        if nav_card(
            ui,
            "🏋",
            "Spor Programı",
            "Egzersiz planları ve antrenman programlarını yönet",
        ) {
            nav = Nav::Push(Screen::ExerciseManagement(ExerciseManagementScreen::new(
                self.member.clone(),
                api,
            )));
        }
        ui.add_space(8.0);

        if nav_card(
            ui,
            "🥗",
            "Diyet Programı",
            "Beslenme planları ve diyet programlarını yönet",
        ) {
            nav = Nav::Push(Screen::DietManagement(DietManagementScreen::new(
                self.member.clone(),
                api,
            )));
        }

        ui.add_space(24.0);
        if ui.button("Geri Dön").clicked() {
            nav = Nav::Back;
        }

        nav
    }
}
