use eframe::egui::{self, Button, RichText, TextEdit};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{LoginRequest, LoginResponse, Role};
use crate::screens::{
    Alert, AdminPanelScreen, MemberDashboardScreen, Nav, Screen, CONNECTION_ERROR,
};
use crate::validation;

#[derive(Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    job: Option<Job<Result<LoginResponse, ApiError>>>,
    alert: Option<Alert>,
}

impl LoginScreen {
    pub fn busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, api: &ApiClient) -> Nav {
        if self.alert.as_ref().and_then(|alert| alert.show(ui.ctx())).is_some() {
            self.alert = None;
        }

        let mut nav = Nav::None;
        if let Some(result) = self.job.as_ref().and_then(Job::poll) {
            self.job = None;
            match result {
                Ok(login) => {
                    tracing::info!("giriş başarılı: {} ({:?})", login.name, login.role);
                    nav = match login.role {
                        Role::Admin => Nav::Push(Screen::AdminPanel(AdminPanelScreen::default())),
                        Role::Member => Nav::Push(Screen::MemberDashboard(
                            MemberDashboardScreen::new(login.user_id, login.name, api),
                        )),
                    };
                }
                Err(err) => {
                    tracing::warn!("giriş başarısız: {err}");
                    self.alert = Some(Alert::error(login_error_message(&err)));
                }
            }
        }

        let busy = self.busy();

        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("FitLife").size(42.0).strong());
            ui.label(RichText::new("Sağlıklı yaşam yolculuğun başlasın").size(16.0));
        });
        ui.add_space(48.0);

        ui.label(RichText::new("E-posta").strong());
        ui.add_enabled(
            !busy,
            TextEdit::singleline(&mut self.email)
                .hint_text("E-posta adresinizi girin")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);
        ui.label(RichText::new("Şifre").strong());
        ui.add_enabled(
            !busy,
            TextEdit::singleline(&mut self.password)
                .password(true)
                .hint_text("Şifrenizi girin")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(24.0);

        let label = if busy { "Giriş yapılıyor..." } else { "Giriş Yap" };
        if ui.add_enabled(!busy, Button::new(label)).clicked() {
            self.submit(api);
        }

        nav
    }

    fn submit(&mut self, api: &ApiClient) {
        let (email, password) = match (
            validation::required(&self.email),
            validation::required(&self.password),
        ) {
            (Some(email), Some(password)) => (email.to_owned(), password.to_owned()),
            _ => {
                self.alert = Some(Alert::error("Lütfen email ve şifre girin!"));
                return;
            }
        };

        let api = api.clone();
        self.job = Some(Job::spawn(move || api.login(&LoginRequest { email, password })));
    }
}

fn login_error_message(err: &ApiError) -> String {
    if err.is_connection() {
        CONNECTION_ERROR.to_owned()
    } else {
        err.server_message()
            .unwrap_or_else(|| "Geçersiz email veya şifre!".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn http_errors_prefer_the_server_message() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Hesap kilitli"}"#.to_string(),
        };
        assert_eq!(login_error_message(&err), "Hesap kilitli");
    }

    #[test]
    fn http_errors_without_a_message_fall_back_to_invalid_credentials() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert_eq!(login_error_message(&err), "Geçersiz email veya şifre!");
    }

    #[test]
    fn blank_credentials_never_start_a_request() {
        let api = ApiClient::new(crate::config::ApiConfig::default());
        let mut screen = LoginScreen {
            email: "   ".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        };

        screen.submit(&api);

        assert!(screen.job.is_none());
        assert!(screen.alert.is_some());
    }
}
