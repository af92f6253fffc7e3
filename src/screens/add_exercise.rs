use eframe::egui::{self, Button, RichText, ScrollArea, TextEdit};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Exercise, MemberRef, NewExercise};
use crate::screens::{Alert, AlertAction, Nav, CONNECTION_ERROR};
use crate::validation;

pub struct AddExerciseScreen {
    member: MemberRef,
    title: String,
    description: String,
    sets: String,
    reps: String,
    video_url: String,
    job: Option<Job<Result<Exercise, ApiError>>>,
    alert: Option<Alert>,
}

impl AddExerciseScreen {
    pub fn new(member: MemberRef) -> Self {
        Self {
            member,
            title: String::new(),
            description: String::new(),
            sets: String::new(),
            reps: String::new(),
            video_url: String::new(),
            job: None,
            alert: None,
        }
    }

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
                Ok(exercise) => {
                    tracing::info!("yeni egzersiz eklendi: {}", exercise.id);
                    self.alert = Some(Alert::success(format!(
                        "{} egzersizi {} için eklendi!",
                        self.title.trim(),
                        self.member.name
                    )));
                }
                Err(err) => {
                    tracing::warn!("egzersiz eklenemedi: {err}");
                    self.alert = Some(Alert::error(create_error_message(&err)));
                }
            }
        }

        let busy = self.busy();
        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.member.name).size(20.0).strong());
            ui.label(RichText::new("Egzersiz Ekle").size(15.0).weak());
        });
        ui.add_space(16.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Egzersiz Adı *").strong());
            ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut self.title)
                    .hint_text("Örn: Squat, Push-up, Plank")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Açıklama *").strong());
            ui.add_enabled(
                !busy,
                TextEdit::multiline(&mut self.description)
                    .hint_text("Egzersizin nasıl yapılacağını açıklayın...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Set Sayısı").strong());
                    ui.add_enabled(
                        !busy,
                        TextEdit::singleline(&mut self.sets)
                            .hint_text("3")
                            .desired_width(120.0),
                    );
                });
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Tekrar Sayısı").strong());
                    ui.add_enabled(
                        !busy,
                        TextEdit::singleline(&mut self.reps)
                            .hint_text("10")
                            .desired_width(120.0),
                    );
                });
            });
            ui.add_space(10.0);

            ui.label(RichText::new("Video URL").strong());
            ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut self.video_url)
                    .hint_text("https://www.youtube.com/watch?v=...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(20.0);

            let label = if busy { "Ekleniyor..." } else { "Egzersiz Ekle" };
            if ui.add_enabled(!busy, Button::new(label)).clicked() {
                self.submit(api);
            }
            ui.add_space(6.0);
            if ui.add_enabled(!busy, Button::new("İptal")).clicked() {
                nav = Nav::Back;
            }
        });

        nav
    }

    fn submit(&mut self, api: &ApiClient) {
        let payload = match build_payload(
            &self.title,
            &self.description,
            &self.sets,
            &self.reps,
            &self.video_url,
        ) {
            Ok(payload) => payload,
            Err(message) => {
                self.alert = Some(Alert::error(message));
                return;
            }
        };

        let api = api.clone();
        let member_id = self.member.id.clone();
        self.job = Some(Job::spawn(move || api.create_exercise(&member_id, &payload)));
    }
}

fn build_payload(
    title: &str,
    description: &str,
    sets: &str,
    reps: &str,
    video_url: &str,
) -> Result<NewExercise, String> {
    let (Some(title), Some(description)) = (
        validation::required(title),
        validation::required(description),
    ) else {
        return Err("Egzersiz adı ve açıklama zorunludur!".to_owned());
    };

    let sets = validation::optional_count(sets)
        .map_err(|_| "Set sayısı geçerli bir rakam olmalıdır!".to_owned())?;
    let reps = validation::optional_count(reps)
        .map_err(|_| "Tekrar sayısı geçerli bir rakam olmalıdır!".to_owned())?;

    Ok(NewExercise {
        title: title.to_owned(),
        description: description.to_owned(),
        sets,
        reps,
        video_url: validation::required(video_url).map(str::to_owned),
    })
}

fn create_error_message(err: &ApiError) -> String {
    if err.is_connection() {
        CONNECTION_ERROR.to_owned()
    } else {
        err.server_text()
            .map(str::to_owned)
            .unwrap_or_else(|| "Egzersiz eklenirken hata oluştu!".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_description_are_mandatory() {
        let message = "Egzersiz adı ve açıklama zorunludur!";
        assert_eq!(build_payload("", "açıklama", "", "", "").unwrap_err(), message);
        assert_eq!(build_payload("Squat", "  ", "", "", "").unwrap_err(), message);
    }

    #[test]
    fn non_numeric_counts_block_submission() {
        assert_eq!(
            build_payload("Squat", "açıklama", "üç", "", "").unwrap_err(),
            "Set sayısı geçerli bir rakam olmalıdır!"
        );
        assert_eq!(
            build_payload("Squat", "açıklama", "3", "on", "").unwrap_err(),
            "Tekrar sayısı geçerli bir rakam olmalıdır!"
        );
    }

    #[test]
    fn blank_optionals_are_left_out_of_the_payload() {
        let payload = build_payload("Squat", "Dizler 90 derece", "", "  ", "").unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("sets"));
        assert!(!object.contains_key("reps"));
        assert!(!object.contains_key("videoUrl"));
    }

    #[test]
    fn filled_optionals_are_coerced_to_numbers() {
        let payload = build_payload(
            " Squat ",
            " Dizler 90 derece ",
            " 3 ",
            "12",
            " https://youtu.be/abc ",
        )
        .unwrap();
        assert_eq!(payload.title, "Squat");
        assert_eq!(payload.sets, Some(3));
        assert_eq!(payload.reps, Some(12));
        assert_eq!(payload.video_url.as_deref(), Some("https://youtu.be/abc"));
    }
}
