use eframe::egui::{self, RichText};

use crate::api::ApiClient;
use crate::screens::{nav_card, Alert, MemberDirectoryScreen, Nav, Screen};

#[derive(Default)]
pub struct AdminPanelScreen {
    alert: Option<Alert>,
}

impl AdminPanelScreen {
    pub fn show(&mut self, ui: &mut egui::Ui, api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        let mut nav = Nav::None;

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Hoş geldin!").size(15.0));
            ui.label(RichText::new("Admin Panel").size(26.0).strong());
            ui.label(RichText::new("FitLife Yönetim Merkezi").size(14.0).weak());
        });
        ui.add_space(20.0);

        if nav_card(
            ui,
            "👥",
            "Üye Yönetimi",
            "Üyeleri görüntüle, yeni üye ekle ve üye bilgilerini düzenle",
        ) {
            nav = Nav::Push(Screen::MemberDirectory(MemberDirectoryScreen::new(api)));
        }
        ui.add_space(8.0);

        if nav_card(
            ui,
            "📊",
            "Raporlar",
            "Üye istatistikleri ve performans raporları görüntüle",
        ) {
            self.alert = Some(Alert::notice("Raporlar yakında eklenecek!"));
        }
        ui.add_space(8.0);

        if nav_card(
            ui,
            "⚙️",
            "Ayarlar",
            "Uygulama ayarları ve sistem yapılandırması",
        ) {
            self.alert = Some(Alert::notice("Ayarlar yakında eklenecek!"));
        }

        ui.add_space(24.0);
        if ui.button("Çıkış").clicked() {
            nav = Nav::Back;
        }

        nav
    }
}
