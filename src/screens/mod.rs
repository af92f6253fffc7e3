use eframe::egui::{self, Align, Layout, RichText};

use crate::api::{ApiClient, ApiError};
use crate::models::Exercise;
use crate::validation;

mod add_diet;
mod add_exercise;
mod add_member;
mod admin_panel;
mod diet_management;
mod exercise_management;
mod login;
mod member_dashboard;
mod member_detail;
mod member_directory;

pub use add_diet::AddDietScreen;
pub use add_exercise::AddExerciseScreen;
pub use add_member::AddMemberScreen;
pub use admin_panel::AdminPanelScreen;
pub use diet_management::DietManagementScreen;
pub use exercise_management::ExerciseManagementScreen;
pub use login::LoginScreen;
pub use member_dashboard::MemberDashboardScreen;
pub use member_detail::MemberDetailScreen;
pub use member_directory::MemberDirectoryScreen;

pub const CONNECTION_ERROR: &str = "Bağlantı hatası! Sunucunun çalıştığından emin olun.";

/// Navigation request produced by one frame of the active screen.
pub enum Nav {
    None,
    Push(Screen),
    Back,
    /// Drop the whole stack, e.g. logout.
    Reset(Screen),
}

/// One entry of the navigation stack.
pub enum Screen {
    Login(LoginScreen),
    AdminPanel(AdminPanelScreen),
    MemberDirectory(MemberDirectoryScreen),
    AddMember(AddMemberScreen),
    MemberDetail(MemberDetailScreen),
    ExerciseManagement(ExerciseManagementScreen),
    AddExercise(AddExerciseScreen),
    DietManagement(DietManagementScreen),
    AddDiet(AddDietScreen),
    MemberDashboard(MemberDashboardScreen),
}

impl Screen {
    pub fn show(&mut self, ui: &mut egui::Ui, api: &ApiClient) -> Nav {
        match self {
            Screen::Login(screen) => screen.show(ui, api),
            Screen::AdminPanel(screen) => screen.show(ui, api),
            Screen::MemberDirectory(screen) => screen.show(ui, api),
            Screen::AddMember(screen) => screen.show(ui, api),
            Screen::MemberDetail(screen) => screen.show(ui, api),
            Screen::ExerciseManagement(screen) => screen.show(ui, api),
            Screen::AddExercise(screen) => screen.show(ui, api),
            Screen::DietManagement(screen) => screen.show(ui, api),
            Screen::AddDiet(screen) => screen.show(ui, api),
            Screen::MemberDashboard(screen) => screen.show(ui, api),
        }
    }

    /// Called when this screen becomes the top of the stack again after
    /// a child was popped. List screens re-fetch here.
    pub fn focus_regained(&mut self, api: &ApiClient) {
        match self {
            Screen::MemberDirectory(screen) => screen.reload(api),
            Screen::ExerciseManagement(screen) => screen.reload(api),
            Screen::DietManagement(screen) => screen.reload(api),
            _ => {}
        }
    }

    /// Whether a request is in flight, i.e. the UI should keep polling.
    pub fn busy(&self) -> bool {
        match self {
            Screen::Login(screen) => screen.busy(),
            Screen::MemberDirectory(screen) => screen.busy(),
            Screen::AddMember(screen) => screen.busy(),
            Screen::ExerciseManagement(screen) => screen.busy(),
            Screen::AddExercise(screen) => screen.busy(),
            Screen::DietManagement(screen) => screen.busy(),
            Screen::AddDiet(screen) => screen.busy(),
            Screen::MemberDashboard(screen) => screen.busy(),
            Screen::AdminPanel(_) | Screen::MemberDetail(_) => false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Stay,
    Back,
}

/// Modal dialog in the style of the mobile alerts: a title, a message
/// and a single Tamam button.
pub struct Alert {
    title: &'static str,
    message: String,
    action: AlertAction,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Hata",
            message: message.into(),
            action: AlertAction::Stay,
        }
    }

    /// Plain notice without the error title.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            title: "FitLife",
            message: message.into(),
            action: AlertAction::Stay,
        }
    }

    /// Success dialog that navigates back once dismissed.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Başarılı",
            message: message.into(),
            action: AlertAction::Back,
        }
    }

    pub fn show(&self, ctx: &egui::Context) -> Option<AlertAction> {
        let mut action = None;
        egui::Modal::new(egui::Id::new("fitlife_alert")).show(ctx, |ui| {
            ui.set_max_width(280.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.title).heading().strong());
            });
            ui.add_space(8.0);
            ui.label(&self.message);
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button("Tamam").clicked() {
                    action = Some(self.action);
                }
            });
        });
        action
    }
}

/// Error alert for a failed list load: transport problems get the
/// connection text, HTTP errors the screen's own message.
pub(crate) fn load_error_alert(err: &ApiError, http_message: &str) -> Alert {
    if err.is_connection() {
        Alert::error(CONNECTION_ERROR)
    } else {
        Alert::error(http_message)
    }
}

pub(crate) fn screen_title(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).heading().size(24.0).strong());
        if !subtitle.is_empty() {
            ui.label(RichText::new(subtitle).size(15.0));
        }
    });
    ui.add_space(16.0);
}

/// Clickable card with an icon, a title and a description line, used by
/// the menu screens.
pub(crate) fn nav_card(ui: &mut egui::Ui, icon: &str, title: &str, description: &str) -> bool {
    let response = ui
        .group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(26.0));
                ui.add_space(6.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(17.0).strong());
                    ui.label(RichText::new(description).size(13.0).weak());
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new("›").size(20.0).weak());
                });
            });
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}

/// Exercise row as shown to admins and members alike. Returns true when
/// the video button was clicked.
pub(crate) fn exercise_card(ui: &mut egui::Ui, exercise: &Exercise) -> bool {
    let mut video_clicked = false;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&exercise.title).size(17.0).strong());
        ui.label(RichText::new(&exercise.description).size(14.0));
        if exercise.sets.is_some() || exercise.reps.is_some() {
            ui.horizontal(|ui| {
                if let Some(sets) = exercise.sets {
                    ui.label(RichText::new(format!("Set: {sets}")).size(13.0));
                }
                if let Some(reps) = exercise.reps {
                    ui.label(RichText::new(format!("Tekrar: {reps}")).size(13.0));
                }
            });
        }
        if exercise.video_url.is_some() {
            if ui.button("📹 Video İzle (YouTube)").clicked() {
                video_clicked = true;
            }
        }
    });
    ui.add_space(8.0);
    video_clicked
}

/// Hands a video link to the platform opener, or explains why not.
pub(crate) fn open_video(ctx: &egui::Context, url: &str) -> Option<Alert> {
    if validation::is_openable_url(url) {
        ctx.open_url(egui::OpenUrl::new_tab(url));
        None
    } else {
        Some(Alert::error("Video linki açılamıyor!"))
    }
}
