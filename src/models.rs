use crate::stats::parse_hours;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
    Mathematics,
    Other,
}

impl Subject {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Physics" => Subject::Physics,
            "Chemistry" => Subject::Chemistry,
            "Biology" => Subject::Biology,
            "Mathematics" => Subject::Mathematics,
            _ => Subject::Other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Mathematics => "Mathematics",
            Subject::Other => "Other",
        }
    }

    /// Lowercase token used to build topic ids.
    pub fn token(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Mathematics => "mathematics",
            Subject::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }
}

/// One scheduled study task. Text fields are kept exactly as received so a
/// plan round-trips unchanged; classification happens through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub duration: String,
    pub time_slot: String,
    pub completed: bool,
    pub difficulty: String,
    pub exam_type: String,
}

impl Topic {
    pub fn subject_kind(&self) -> Subject {
        Subject::from_name(&self.subject)
    }

    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_label(&self.difficulty)
    }

    pub fn hours(&self) -> f64 {
        parse_hours(&self.duration)
    }
}

/// Display buckets for one topic. Unrecognized labels land in `Other` and
/// `Unknown` rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicClass {
    pub id: String,
    pub subject: Subject,
    pub difficulty: Difficulty,
}

impl TopicClass {
    pub fn of(topic: &Topic) -> Self {
        Self {
            id: topic.id.clone(),
            subject: topic.subject_kind(),
            difficulty: topic.difficulty_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DaySchedule {
    pub date: String,
    #[serde(default)]
    pub subjects: Vec<Topic>,
}

pub type StudyPlan = Vec<DaySchedule>;

/// Body of `GET /study-plan/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub study_plan: Option<StudyPlan>,
}

/// Body of `POST /progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub user_id: String,
    pub topic_id: String,
    pub date: String,
    pub completed: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub topic_id: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub user_id: String,
    pub study_plan: StudyPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    Past,
    Today,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: String,
    pub phase: DayPhase,
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub subject: String,
    pub total: u32,
    pub completed: u32,
    pub hours: f64,
    pub completed_hours: f64,
    pub completion_rate: u32,
    pub hours_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_subjects: u32,
    pub completed_subjects: u32,
    pub total_hours: f64,
    pub completed_hours: f64,
    pub completion_percentage: u32,
    pub hours_percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct PlanStats {
    pub overall: OverallStats,
    pub subjects: Vec<SubjectStats>,
    pub days: Vec<DaySummary>,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub day: DaySchedule,
    pub stats: DaySummary,
    pub classes: Vec<TopicClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_decodes_camel_case_fields() {
        let topic: Topic = serde_json::from_value(serde_json::json!({
            "id": "physics_2026-01-05",
            "subject": "Physics",
            "topic": "Mechanics",
            "duration": "2 hours",
            "timeSlot": "09:00 - 11:00",
            "completed": true,
            "difficulty": "Hard",
            "examType": "JEE"
        }))
        .unwrap();

        assert_eq!(topic.time_slot, "09:00 - 11:00");
        assert_eq!(topic.exam_type, "JEE");
        assert_eq!(topic.subject_kind(), Subject::Physics);
        assert_eq!(topic.difficulty_level(), Difficulty::Hard);
        assert_eq!(topic.hours(), 2.0);
    }

    #[test]
    fn unrecognized_labels_fall_back() {
        let topic = Topic {
            subject: "Astronomy".to_string(),
            difficulty: "Brutal".to_string(),
            ..Topic::default()
        };
        assert_eq!(topic.subject_kind(), Subject::Other);
        assert_eq!(topic.difficulty_level(), Difficulty::Unknown);
        assert_eq!(topic.difficulty, "Brutal");

        let class = serde_json::to_value(TopicClass::of(&topic)).unwrap();
        assert_eq!(class["subject"], "Other");
        assert_eq!(class["difficulty"], "Unknown");
    }

    #[test]
    fn payload_without_plan_field_decodes() {
        let payload: PlanPayload = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();
        assert_eq!(payload.user_id.as_deref(), Some("u1"));
        assert!(payload.study_plan.is_none());

        let day: DaySchedule = serde_json::from_str(r#"{"date":"2026-01-05"}"#).unwrap();
        assert!(day.subjects.is_empty());
    }

    #[test]
    fn progress_update_serializes_wire_names() {
        let update = ProgressUpdate {
            user_id: "u1".to_string(),
            topic_id: "a".to_string(),
            date: "2026-01-05".to_string(),
            completed: true,
            timestamp: "2026-01-05T10:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["topicId"], "a");
        assert_eq!(value["completed"], true);
        assert_eq!(value["timestamp"], "2026-01-05T10:00:00.000Z");
    }
}
