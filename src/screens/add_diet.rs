use eframe::egui::{self, Button, ComboBox, RichText, ScrollArea, TextEdit};

use crate::api::{ApiClient, ApiError};
use crate::jobs::Job;
use crate::models::{Diet, MemberRef, NewDiet, PlanType};
use crate::screens::{Alert, AlertAction, Nav, CONNECTION_ERROR};
use crate::validation;

pub const MEAL_OPTIONS: [&str; 6] = [
    "Kahvaltı",
    "Ara Öğün",
    "Öğle Yemeği",
    "İkindi",
    "Akşam Yemeği",
    "Gece Atıştırması",
];

pub const DAY_OPTIONS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

pub struct AddDietScreen {
    member: MemberRef,
    meal_name: String,
    meal_time: String,
    food_name: String,
    calories: String,
    description: String,
    plan_type: PlanType,
    day_of_week: String,
    job: Option<Job<Result<Diet, ApiError>>>,
    alert: Option<Alert>,
}

impl AddDietScreen {
    pub fn new(member: MemberRef) -> Self {
        Self {
            member,
            meal_name: MEAL_OPTIONS[0].to_owned(),
            meal_time: String::new(),
            food_name: String::new(),
            calories: String::new(),
            description: String::new(),
            plan_type: PlanType::Daily,
            day_of_week: DAY_OPTIONS[0].to_owned(),
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
                Ok(diet) => {
                    tracing::info!("yeni diyet planı eklendi: {}", diet.id);
                    self.alert = Some(Alert::success("Diyet planı başarıyla eklendi!"));
                }
                Err(err) => {
                    tracing::warn!("diyet eklenemedi: {err}");
                    let message = if err.is_connection() {
                        CONNECTION_ERROR
                    } else {
                        "Diyet eklenirken hata oluştu!"
                    };
                    self.alert = Some(Alert::error(message));
                }
            }
        }

        let busy = self.busy();
        let mut nav = Nav::None;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.member.name).size(20.0).strong());
            ui.label(RichText::new("Yeni Diyet Planı Ekle").size(15.0).weak());
        });
        ui.add_space(16.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Öğün Adı").strong());
            ui.add_enabled_ui(!busy, |ui| {
                ComboBox::from_id_salt("meal_name")
                    .selected_text(self.meal_name.clone())
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        for option in MEAL_OPTIONS {
                            ui.selectable_value(&mut self.meal_name, option.to_owned(), option);
                        }
                    });
            });
            ui.add_space(10.0);

            ui.label(RichText::new("Öğün Saati").strong());
            ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut self.meal_time)
                    .hint_text("Örn: 08:00, 12:30, 19:00")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Yemek Adı").strong());
            ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut self.food_name)
                    .hint_text("Örn: Yulaf ezmesi, Izgara tavuk")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Kalori").strong());
            ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut self.calories)
                    .hint_text("Örn: 350")
                    .desired_width(120.0),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Açıklama").strong());
            ui.add_enabled(
                !busy,
                TextEdit::multiline(&mut self.description)
                    .hint_text("İsteğe bağlı notlar...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Plan Tipi").strong());
            ui.add_enabled_ui(!busy, |ui| {
                ComboBox::from_id_salt("plan_type")
                    .selected_text(plan_label(self.plan_type))
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.plan_type, PlanType::Daily, "Günlük Plan");
                        ui.selectable_value(&mut self.plan_type, PlanType::Weekly, "Haftalık Plan");
                    });
            });
            ui.add_space(10.0);

            if self.plan_type == PlanType::Weekly {
                ui.label(RichText::new("Gün").strong());
                ui.add_enabled_ui(!busy, |ui| {
                    ComboBox::from_id_salt("day_of_week")
                        .selected_text(self.day_of_week.clone())
                        .width(200.0)
                        .show_ui(ui, |ui| {
                            for option in DAY_OPTIONS {
                                ui.selectable_value(
                                    &mut self.day_of_week,
                                    option.to_owned(),
                                    option,
                                );
                            }
                        });
                });
                ui.add_space(10.0);
            }

            ui.add_space(10.0);
            let label = if busy { "Ekleniyor..." } else { "Diyet Ekle" };
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
            &self.meal_name,
            &self.meal_time,
            &self.food_name,
            &self.calories,
            &self.description,
            self.plan_type,
            &self.day_of_week,
        ) {
            Ok(payload) => payload,
            Err(message) => {
                self.alert = Some(Alert::error(message));
                return;
            }
        };

        let api = api.clone();
        let member_id = self.member.id.clone();
        self.job = Some(Job::spawn(move || api.create_diet(&member_id, &payload)));
    }
}

fn plan_label(plan_type: PlanType) -> &'static str {
    match plan_type {
        PlanType::Daily => "Günlük Plan",
        PlanType::Weekly => "Haftalık Plan",
    }
}

fn build_payload(
    meal_name: &str,
    meal_time: &str,
    food_name: &str,
    calories: &str,
    description: &str,
    plan_type: PlanType,
    day_of_week: &str,
) -> Result<NewDiet, String> {
    let Some(food_name) = validation::required(food_name) else {
        return Err("Lütfen yemek adı girin!".to_owned());
    };
    let Some(meal_time) = validation::required(meal_time) else {
        return Err("Lütfen öğün saati girin! (Örn: 08:00)".to_owned());
    };
    if validation::required(calories).is_none() {
        return Err("Lütfen kalori miktarı girin!".to_owned());
    }
    let calories = validation::positive_count(calories)
        .map_err(|_| "Lütfen geçerli bir kalori sayısı girin!".to_owned())?;

    Ok(NewDiet {
        meal_name: meal_name.to_owned(),
        meal_time: meal_time.to_owned(),
        food_name: food_name.to_owned(),
        calories,
        plan_type,
        description: validation::required(description).map(str::to_owned),
        day_of_week: (plan_type == PlanType::Weekly).then(|| day_of_week.to_owned()),
    })
}
