use crate::models::{
    DayPhase, DaySchedule, DayStats, DaySummary, OverallStats, PlanStats, StudyPlan, SubjectStats,
};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+").expect("hours pattern is valid")
});

/// Numeric hours encoded in a duration such as "1.5 hours". Uses the first
/// decimal number in the text; 0 when there is none.
pub fn parse_hours(duration: &str) -> f64 {
    HOURS_RE
        .find(duration)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// `round(100 * part / whole)`, defined as 0 for an empty whole.
pub fn percentage(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    (100.0 * part / whole).round() as u32
}

pub fn day_stats(day: &DaySchedule) -> DayStats {
    let total = day.subjects.len() as u32;
    let completed = day.subjects.iter().filter(|topic| topic.completed).count() as u32;
    DayStats {
        completed,
        total,
        percentage: percentage(f64::from(completed), f64::from(total)),
    }
}

pub fn day_hours(day: &DaySchedule) -> f64 {
    day.subjects.iter().map(|topic| topic.hours()).sum()
}

pub fn day_phase(date: &str, today: NaiveDate) -> DayPhase {
    match date.parse::<NaiveDate>() {
        Ok(day) if day < today => DayPhase::Past,
        Ok(day) if day == today => DayPhase::Today,
        _ => DayPhase::Upcoming,
    }
}

pub fn day_summary(day: &DaySchedule, today: NaiveDate) -> DaySummary {
    let stats = day_stats(day);
    DaySummary {
        date: day.date.clone(),
        phase: day_phase(&day.date, today),
        completed: stats.completed,
        total: stats.total,
        percentage: stats.percentage,
        total_hours: day_hours(day),
    }
}

/// Per-subject aggregates across the whole plan, in first-appearance order.
pub fn subject_stats(plan: &StudyPlan) -> Vec<SubjectStats> {
    let mut subjects: Vec<SubjectStats> = Vec::new();

    for topic in plan.iter().flat_map(|day| day.subjects.iter()) {
        let index = match subjects.iter().position(|entry| entry.subject == topic.subject) {
            Some(index) => index,
            None => {
                subjects.push(SubjectStats {
                    subject: topic.subject.clone(),
                    ..SubjectStats::default()
                });
                subjects.len() - 1
            }
        };

        let hours = topic.hours();
        let entry = &mut subjects[index];
        entry.total = entry.total.saturating_add(1);
        entry.hours += hours;
        if topic.completed {
            entry.completed = entry.completed.saturating_add(1);
            entry.completed_hours += hours;
        }
    }

    for entry in &mut subjects {
        entry.completion_rate = percentage(f64::from(entry.completed), f64::from(entry.total));
        entry.hours_rate = percentage(entry.completed_hours, entry.hours);
    }

    subjects
}

pub fn overall_stats(plan: &StudyPlan) -> OverallStats {
    let mut overall = OverallStats::default();

    for topic in plan.iter().flat_map(|day| day.subjects.iter()) {
        let hours = topic.hours();
        overall.total_subjects = overall.total_subjects.saturating_add(1);
        overall.total_hours += hours;
        if topic.completed {
            overall.completed_subjects = overall.completed_subjects.saturating_add(1);
            overall.completed_hours += hours;
        }
    }

    overall.completion_percentage = percentage(
        f64::from(overall.completed_subjects),
        f64::from(overall.total_subjects),
    );
    overall.hours_percentage = percentage(overall.completed_hours, overall.total_hours);
    overall
}

pub fn build_stats(plan: &StudyPlan) -> PlanStats {
    build_stats_at(Local::now().date_naive(), plan)
}

pub fn build_stats_at(today: NaiveDate, plan: &StudyPlan) -> PlanStats {
    PlanStats {
        overall: overall_stats(plan),
        subjects: subject_stats(plan),
        days: plan.iter().map(|day| day_summary(day, today)).collect(),
    }
}
