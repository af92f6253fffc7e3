use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Sense};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Member, MemberRef};
use crate::screens::{
    load_error_alert, AddMemberScreen, Alert, MemberDetailScreen, Nav, Screen,
};

pub struct MemberDirectoryScreen {
    members: Vec<Member>,
    job: Option<Job<Result<Vec<Member>, ApiError>>>,
    loaded: bool,
    alert: Option<Alert>,
}

impl MemberDirectoryScreen {
    pub fn new(api: &ApiClient) -> Self {
        let mut screen = Self {
            members: Vec::new(),
            job: None,
            loaded: false,
            alert: None,
        };
        screen.reload(api);
        screen
    }

    pub fn reload(&mut self, api: &ApiClient) {
        let api = api.clone();
        self.job = Some(Job::spawn(move || api.list_members()));
    }

    pub fn busy(&self) -> bool {
        self.job.is_some()
    }

    /// Empty state only for a settled, empty directory; never while a
    /// request is in flight.
    fn shows_empty_state(&self) -> bool {
        self.job.is_none() && self.loaded && self.members.is_empty()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        if let Some(result) = self.job.as_ref().and_then(Job::poll) {
            self.job = None;
            match result {
                Ok(members) => {
                    tracing::info!("üyeler yüklendi: {} üye", members.len());
                    self.members = members;
                    self.loaded = true;
                }
                Err(err) => {
                    tracing::warn!("üyeler yüklenemedi: {err}");
                    self.alert = Some(load_error_alert(&err, "Üyeler yüklenemedi!"));
                }
            }
        }

        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Üye Yönetimi").size(24.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("+ Yeni Üye").clicked() {
                    nav = Nav::Push(Screen::AddMember(AddMemberScreen::default()));
                }
            });
        });
        ui.add_space(12.0);

        if self.job.is_some() {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Üyeler yükleniyor...");
            });
            return nav;
        }

        if self.shows_empty_state() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("👥").size(42.0));
                ui.label(RichText::new("Henüz üye yok").size(17.0).strong());
                ui.label(
                    RichText::new("İlk üyeyi eklemek için Yeni Üye butonuna tıklayın")
                        .size(13.0)
                        .weak(),
                );
            });
            return nav;
        }

        ui.label(
            RichText::new(format!("Toplam {} üye", self.members.len()))
                .size(13.0)
                .weak(),
        );
        ui.add_space(8.0);

        ScrollArea::vertical().show(ui, |ui| {
            for member in &self.members {
                let response = ui
                    .group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&member.name).size(17.0).strong());
                                ui.label(RichText::new(&member.email).size(13.0));
                                if let Some(date) = member.registration_label() {
                                    ui.label(RichText::new(format!("Kayıt: {date}")).size(12.0).weak());
                                }
                            });
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new("›").size(20.0).weak());
                            });
                        });
                    })
                    .response
                    .interact(Sense::click());

                if response.clicked() {
                    nav = Nav::Push(Screen::MemberDetail(MemberDetailScreen::new(MemberRef {
                        id: member.id.clone(),
                        name: member.name.clone(),
                        email: member.email.clone(),
                    })));
                }
                ui.add_space(8.0);
            }
        });

        nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn settled(members: Vec<Member>) -> MemberDirectoryScreen {
        MemberDirectoryScreen {
            members,
            job: None,
            loaded: true,
            alert: None,
        }
    }

    #[test]
    fn empty_state_needs_a_settled_empty_list() {
        assert!(settled(Vec::new()).shows_empty_state());

        let member: Member =
            serde_json::from_str(r#"{"id":"1","name":"Ayşe","email":"a@b.co"}"#).unwrap();
        assert!(!settled(vec![member]).shows_empty_state());
    }

    #[test]
    fn no_empty_state_while_a_request_is_in_flight() {
        let api = ApiClient::new(ApiConfig::default());
        let screen = MemberDirectoryScreen::new(&api);
        assert!(screen.busy());
        assert!(!screen.shows_empty_state());
    }

    #[test]
    fn focus_regain_restarts_the_load() {
        let api = ApiClient::new(ApiConfig::default());
        let mut screen = settled(Vec::new());
        assert!(!screen.busy());

        screen.reload(&api);
        assert!(screen.busy());
        assert!(!screen.shows_empty_state());
    }
}
