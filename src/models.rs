use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Member,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub role: Role,
    pub user_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Member {
    /// Registration date as dd.mm.yyyy when the backend timestamp
    /// parses, raw text otherwise.
    pub fn registration_label(&self) -> Option<String> {
        self.created_at.as_deref().map(format_day)
    }
}

fn format_day(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d.%m.%Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    Daily,
    Weekly,
}

impl PlanType {
    pub fn label(self) -> &'static str {
        match self {
            PlanType::Daily => "Günlük",
            PlanType::Weekly => "Haftalık",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diet {
    pub id: String,
    pub meal_name: String,
    pub meal_time: String,
    pub food_name: String,
    pub calories: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub plan_type: PlanType,
    #[serde(default)]
    pub day_of_week: Option<String>,
}

/// Identity of the member a screen operates on. Passed by value when a
/// screen is pushed, never held in any shared place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRef {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiet {
    pub meal_name: String,
    pub meal_time: String,
    pub food_name: String,
    pub calories: u32,
    pub plan_type: PlanType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_member_serializes_exactly_as_the_backend_expects() {
        let payload = NewMember {
            name: "Ayşe Demir".to_string(),
            email: "ayse@example.com".to_string(),
            password: "secret1".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Ayşe Demir","email":"ayse@example.com","password":"secret1"}"#
        );
    }

    #[test]
    fn new_exercise_omits_blank_optionals() {
        let payload = NewExercise {
            title: "Squat".to_string(),
            description: "Dizler 90 dereceye kadar".to_string(),
            sets: None,
            reps: None,
            video_url: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("sets"));
        assert!(!object.contains_key("reps"));
        assert!(!object.contains_key("videoUrl"));
    }

    #[test]
    fn new_exercise_sends_numbers_for_filled_optionals() {
        let payload = NewExercise {
            title: "Squat".to_string(),
            description: "Dizler 90 dereceye kadar".to_string(),
            sets: Some(3),
            reps: Some(10),
            video_url: Some("https://www.youtube.com/watch?v=abc".to_string()),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["sets"], json!(3));
        assert_eq!(value["reps"], json!(10));
        assert_eq!(value["videoUrl"], json!("https://www.youtube.com/watch?v=abc"));
    }

    #[test]
    fn weekly_diet_carries_a_day_daily_does_not() {
        let weekly = NewDiet {
            meal_name: "Kahvaltı".to_string(),
            meal_time: "08:00".to_string(),
            food_name: "Yulaf".to_string(),
            calories: 350,
            plan_type: PlanType::Weekly,
            description: None,
            day_of_week: Some("Pazartesi".to_string()),
        };
        let value = serde_json::to_value(&weekly).unwrap();
        assert_eq!(value["planType"], json!("WEEKLY"));
        assert_eq!(value["dayOfWeek"], json!("Pazartesi"));

        let daily = NewDiet {
            plan_type: PlanType::Daily,
            day_of_week: None,
            ..weekly
        };
        let value = serde_json::to_value(&daily).unwrap();
        assert_eq!(value["planType"], json!("DAILY"));
        assert!(!value.as_object().unwrap().contains_key("dayOfWeek"));
    }

    #[test]
    fn login_response_reads_camel_case_and_upper_case_roles() {
        let admin: LoginResponse =
            serde_json::from_str(r#"{"role":"ADMIN","userId":"1","name":"Yönetici"}"#).unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.user_id, "1");

        let member: LoginResponse =
            serde_json::from_str(r#"{"role":"MEMBER","userId":"7","name":"Ayşe"}"#).unwrap();
        assert_eq!(member.role, Role::Member);
    }

    #[test]
    fn member_created_at_is_optional() {
        let bare: Member =
            serde_json::from_str(r#"{"id":"1","name":"Ayşe","email":"ayse@example.com"}"#).unwrap();
        assert_eq!(bare.created_at, None);
        assert_eq!(bare.registration_label(), None);

        let dated: Member = serde_json::from_str(
            r#"{"id":"1","name":"Ayşe","email":"ayse@example.com","createdAt":"2025-06-17T21:12:00Z"}"#,
        )
        .unwrap();
        assert_eq!(dated.registration_label().as_deref(), Some("17.06.2025"));
    }

    #[test]
    fn unparseable_created_at_falls_back_to_raw_text() {
        assert_eq!(format_day("2025-06-17T21:12:00"), "17.06.2025");
        assert_eq!(format_day("dün"), "dün");
    }

    #[test]
    fn diet_record_reads_optional_fields() {
        let diet: Diet = serde_json::from_str(
            r#"{"id":"d1","mealName":"Kahvaltı","mealTime":"08:00","foodName":"Yulaf","calories":350,"planType":"WEEKLY","dayOfWeek":"Salı"}"#,
        )
        .unwrap();
        assert_eq!(diet.plan_type, PlanType::Weekly);
        assert_eq!(diet.day_of_week.as_deref(), Some("Salı"));
        assert_eq!(diet.description, None);
    }
}
