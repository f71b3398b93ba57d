use crate::models::{DaySchedule, Difficulty, PlanPayload, StudyPlan, Subject, Topic};
use chrono::{Duration, Local, NaiveDate};

pub const FALLBACK_DAYS: usize = 7;

pub fn fallback_payload(user_id: &str) -> PlanPayload {
    fallback_payload_at(Local::now().date_naive(), user_id)
}

pub fn fallback_payload_at(today: NaiveDate, user_id: &str) -> PlanPayload {
    PlanPayload {
        user_id: Some(user_id.to_string()),
        study_plan: Some(fallback_plan_at(today)),
    }
}

struct Slot {
    subject: Subject,
    topics: [&'static str; 2],
    duration: &'static str,
    time_slot: &'static str,
    exam_type: &'static str,
    difficulty: fn(usize) -> Difficulty,
}

const SLOTS: [Slot; 4] = [
    Slot {
        subject: Subject::Physics,
        topics: [
            "Mechanics - Motion in Straight Line",
            "Thermodynamics - Laws of Thermodynamics",
        ],
        duration: "2 hours",
        time_slot: "09:00 - 11:00",
        exam_type: "JEE",
        difficulty: |index| {
            if index % 3 == 0 {
                Difficulty::Hard
            } else if index % 2 == 0 {
                Difficulty::Medium
            } else {
                Difficulty::Easy
            }
        },
    },
    Slot {
        subject: Subject::Chemistry,
        topics: [
            "Organic Chemistry - Hydrocarbons",
            "Physical Chemistry - Atomic Structure",
        ],
        duration: "1.5 hours",
        time_slot: "11:30 - 13:00",
        exam_type: "JEE",
        difficulty: |index| {
            if index % 3 == 0 {
                Difficulty::Medium
            } else {
                Difficulty::Hard
            }
        },
    },
    Slot {
        subject: Subject::Biology,
        topics: [
            "Human Physiology - Circulatory System",
            "Plant Physiology - Photosynthesis",
        ],
        duration: "2 hours",
        time_slot: "14:00 - 16:00",
        exam_type: "NEET",
        difficulty: |_| Difficulty::Medium,
    },
    Slot {
        subject: Subject::Mathematics,
        topics: ["Calculus - Differentiation", "Algebra - Quadratic Equations"],
        duration: "1.5 hours",
        time_slot: "16:30 - 18:00",
        exam_type: "JEE",
        difficulty: |index| {
            if index % 3 == 0 {
                Difficulty::Hard
            } else {
                Difficulty::Medium
            }
        },
    },
];

/// A week of placeholder schedule starting at `today`.
pub fn fallback_plan_at(today: NaiveDate) -> StudyPlan {
    (0..FALLBACK_DAYS)
        .map(|index| {
            let date = (today + Duration::days(index as i64)).to_string();
            let subjects = SLOTS
                .iter()
                .map(|slot| fallback_topic(slot, index, &date))
                .collect();
            DaySchedule { date, subjects }
        })
        .collect()
}

fn fallback_topic(slot: &Slot, index: usize, date: &str) -> Topic {
    Topic {
        id: format!("{}_{}", slot.subject.token(), date),
        subject: slot.subject.name().to_string(),
        topic: slot.topics[index % 2].to_string(),
        duration: slot.duration.to_string(),
        time_slot: slot.time_slot.to_string(),
        completed: false,
        difficulty: (slot.difficulty)(index).label().to_string(),
        exam_type: slot.exam_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 29).unwrap()
    }

    #[test]
    fn week_of_consecutive_days_from_today() {
        let plan = fallback_plan_at(today());
        let dates: Vec<&str> = plan.iter().map(|day| day.date.as_str()).collect();
        assert_eq!(
            dates,
            [
                "2026-12-29",
                "2026-12-30",
                "2026-12-31",
                "2027-01-01",
                "2027-01-02",
                "2027-01-03",
                "2027-01-04",
            ]
        );
        for day in &plan {
            let subjects: Vec<&str> = day.subjects.iter().map(|t| t.subject.as_str()).collect();
            assert_eq!(subjects, ["Physics", "Chemistry", "Biology", "Mathematics"]);
        }
    }

    #[test]
    fn topics_follow_alternation_table() {
        let plan = fallback_plan_at(today());
        let difficulties = |subject: &str| -> Vec<String> {
            plan.iter()
                .map(|day| {
                    day.subjects
                        .iter()
                        .find(|t| t.subject == subject)
                        .unwrap()
                        .difficulty
                        .clone()
                })
                .collect()
        };

        assert_eq!(
            difficulties("Physics"),
            ["Hard", "Easy", "Medium", "Hard", "Medium", "Easy", "Hard"]
        );
        assert_eq!(
            difficulties("Chemistry"),
            ["Medium", "Hard", "Hard", "Medium", "Hard", "Hard", "Medium"]
        );
        assert_eq!(difficulties("Biology"), ["Medium"; 7]);
        assert_eq!(
            difficulties("Mathematics"),
            ["Hard", "Medium", "Medium", "Hard", "Medium", "Medium", "Hard"]
        );

        let first = &plan[0].subjects;
        assert_eq!(first[0].topic, "Mechanics - Motion in Straight Line");
        assert_eq!(first[1].duration, "1.5 hours");
        assert_eq!(first[2].exam_type, "NEET");
        let second = &plan[1].subjects;
        assert_eq!(second[0].topic, "Thermodynamics - Laws of Thermodynamics");
        assert_eq!(second[3].topic, "Algebra - Quadratic Equations");
    }

    #[test]
    fn ids_are_unique_and_incomplete() {
        let plan = fallback_plan_at(today());
        let ids: HashSet<&str> = plan
            .iter()
            .flat_map(|day| day.subjects.iter().map(|t| t.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 28);
        assert!(ids.contains("physics_2026-12-29"));
        assert!(ids.contains("mathematics_2027-01-04"));
        assert!(
            plan.iter()
                .flat_map(|day| day.subjects.iter())
                .all(|t| !t.completed)
        );
    }

    #[test]
    fn payload_carries_requesting_user() {
        let payload = fallback_payload_at(today(), "student-7");
        assert_eq!(payload.user_id.as_deref(), Some("student-7"));
        assert_eq!(payload.study_plan.map(|plan| plan.len()), Some(FALLBACK_DAYS));
    }
}
