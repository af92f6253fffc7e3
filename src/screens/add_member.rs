use eframe::egui::{self, Button, RichText, TextEdit};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Member, NewMember};
use crate::screens::{screen_title, Alert, AlertAction, Nav, CONNECTION_ERROR};
use crate::validation;

#[derive(Default)]
pub struct AddMemberScreen {
    name: String,
    email: String,
    password: String,
    job: Option<Job<Result<Member, ApiError>>>,
    alert: Option<Alert>,
}

impl AddMemberScreen {
    pub fn busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, api: &ApiClient) -> Nav {
        if let Some(action) = self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())) {
            self.alert = None;
            if action == AlertAction::Back {
                return Nav::Back;
            }
        }

        if let Some(result) = self.job.as_ref().and_then(Job::poll) {
            self.job = None;
            match result {
                Ok(member) => {
                    tracing::info!("yeni üye eklendi: {} ({})", member.name, member.id);
                    self.alert = Some(Alert::success(format!(
                        "{} başarıyla eklendi! ID: {}",
                        member.name, member.id
                    )));
                }
                Err(err) => {
                    tracing::warn!("üye eklenemedi: {err}");
                    self.alert = Some(Alert::error(create_error_message(&err)));
                }
            }
        }

        let busy = self.busy();
        let mut nav = Nav::None;

        ui.add_space(12.0);
        screen_title(ui, "Yeni Üye Ekle", "Aşağıdaki bilgileri doldurun");

        ui.label(RichText::new("Ad Soyad").strong());
        ui.add_enabled(
            !busy,
            TextEdit::singleline(&mut self.name)
                .hint_text("Ad ve soyadınızı girin")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        ui.label(RichText::new("E-posta").strong());
        ui.add_enabled(
            !busy,
            TextEdit::singleline(&mut self.email)
                .hint_text("E-posta adresini girin")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        ui.label(RichText::new("Şifre").strong());
        ui.add_enabled(
            !busy,
            TextEdit::singleline(&mut self.password)
                .password(true)
                .hint_text("Şifre belirleyin (min 6 karakter)")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(20.0);

        let label = if busy { "Ekleniyor..." } else { "Üye Ekle" };
        if ui.add_enabled(!busy, Button::new(label)).clicked() {
            self.submit(api);
        }
        ui.add_space(6.0);
        if ui.add_enabled(!busy, Button::new("İptal")).clicked() {
            nav = Nav::Back;
        }

        nav
    }

    fn submit(&mut self, api: &ApiClient) {
        let payload = match build_payload(&self.name, &self.email, &self.password) {
            Ok(payload) => payload,
            Err(message) => {
                self.alert = Some(Alert::error(message));
                return;
            }
        };

        let api = api.clone();
        self.job = Some(Job::spawn(move || api.create_member(&payload)));
    }
}

fn build_payload(name: &str, email: &str, password: &str) -> Result<NewMember, String> {
    let (Some(name), Some(email), Some(password)) = (
        validation::required(name),
        validation::required(email),
        validation::required(password),
    ) else {
        return Err("Lütfen tüm alanları doldurun!".to_owned());
    };

    if !validation::is_valid_email(email) {
        return Err("Lütfen geçerli bir email adresi girin!".to_owned());
    }

    Ok(NewMember {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn create_error_message(err: &ApiError) -> String {
    if err.is_connection() {
        CONNECTION_ERROR.to_owned()
    } else {
        err.server_text()
            .map(str::to_owned)
            .unwrap_or_else(|| "Üye eklenirken hata oluştu!".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn any_blank_required_field_is_rejected() {
        let message = "Lütfen tüm alanları doldurun!";
        assert_eq!(build_payload("", "a@b.co", "secret1").unwrap_err(), message);
        assert_eq!(build_payload("Ayşe", "   ", "secret1").unwrap_err(), message);
        assert_eq!(build_payload("Ayşe", "a@b.co", "\t").unwrap_err(), message);
    }

    #[test]
    fn malformed_email_is_rejected_after_the_blank_check() {
        assert_eq!(
            build_payload("Ayşe", "ayse-example.com", "secret1").unwrap_err(),
            "Lütfen geçerli bir email adresi girin!"
        );
    }

    #[test]
    fn payload_matches_the_create_member_contract() {
        let payload = build_payload(" Ayşe Demir ", " ayse@example.com ", "secret1").unwrap();
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Ayşe Demir","email":"ayse@example.com","password":"secret1"}"#
        );
    }

    #[test]
    fn server_body_is_surfaced_when_present() {
        let err = ApiError::Status {
            status: StatusCode::CONFLICT,
            body: "Bu email zaten kayıtlı".to_string(),
        };
        assert_eq!(create_error_message(&err), "Bu email zaten kayıtlı");

        let silent = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert_eq!(create_error_message(&silent), "Üye eklenirken hata oluştu!");
    }

    #[test]
    fn validation_failure_never_starts_a_request() {
        let api = ApiClient::new(crate::config::ApiConfig::default());
        let mut screen = AddMemberScreen {
            name: "Ayşe".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        };

        screen.submit(&api);

        assert!(screen.job.is_none());
        assert!(screen.alert.is_some());
    }
}
