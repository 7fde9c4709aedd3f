use serde::Serialize;

use super::classify::{RiskTier, Strategy, classify_scenario, ideal_index};
use super::format::{
    NOT_AVAILABLE, fmt_currency, fmt_currency_value, fmt_one_decimal, fmt_one_decimal_or_na,
    fmt_number_or_na,
};
use super::geometry::{TimelineLayout, TimelineTrack, palette_color, timeline_track};
use super::types::{Numeric, Report};

pub const INVESTMENT_CATEGORIES: [&str; 8] = [
    "Renewable energy",
    "Agriculture",
    "Unit trusts",
    "Personal development",
    "Gold",
    "Silver",
    "Treasury bonds",
    "Fixed deposits",
];

pub fn score_color(score: f64) -> &'static str {
    if score >= 80.0 {
        "#059669"
    } else if score >= 60.0 {
        "#2563EB"
    } else if score >= 40.0 {
        "#D97706"
    } else {
        "#DC2626"
    }
}

pub fn score_background(score: f64) -> &'static str {
    if score >= 80.0 {
        "#D1FAE5"
    } else if score >= 60.0 {
        "#DBEAFE"
    } else if score >= 40.0 {
        "#FEF3C7"
    } else {
        "#FEE2E2"
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub current_age: f64,
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub monthly_savings: String,
    pub savings_rate: String,
    pub total_assets: String,
    pub health: HealthView,
    pub allocation: Vec<AllocationRow>,
    pub scenarios: Vec<ScenarioRow>,
    pub ideal_index: Option<usize>,
    pub timeline: Option<TimelineTrack>,
    pub investment_categories: Vec<&'static str>,
    pub recommendations: Vec<RecommendationView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthView {
    pub score: Numeric,
    pub score_label: String,
    pub ring_percent: f64,
    pub color: &'static str,
    pub background: &'static str,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRow {
    pub category: String,
    pub amount: Numeric,
    pub display_amount: String,
    pub percent_of_income: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRow {
    pub roi: Numeric,
    pub display_roi: String,
    pub years_to_fi: String,
    pub age_at_fi: String,
    pub strategy: Strategy,
    pub risk: RiskTier,
    pub profitability: &'static str,
    pub marker_color: &'static str,
    pub ideal: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub title: String,
    pub detail_lines: Vec<String>,
    pub priority_label: String,
    pub high_priority: bool,
}

impl ReportView {
    pub fn build(report: &Report, fallback_age: u32) -> ReportView {
        let current_age = report
            .age
            .positive()
            .unwrap_or_else(|| f64::from(fallback_age));

        ReportView {
            current_age,
            monthly_income: fmt_currency(report.monthly_income),
            monthly_expenses: fmt_currency(report.monthly_expenses),
            monthly_savings: fmt_currency(report.monthly_savings),
            savings_rate: savings_rate(report),
            total_assets: fmt_currency(report.total_assets),
            health: health_view(report),
            allocation: allocation_rows(report),
            scenarios: scenario_rows(report),
            ideal_index: ideal_index(&report.fi_timelines),
            timeline: timeline_track(&report.fi_timelines, current_age, TimelineLayout::default()),
            investment_categories: INVESTMENT_CATEGORIES.to_vec(),
            recommendations: recommendation_views(report),
        }
    }
}

fn savings_rate(report: &Report) -> String {
    match (
        report.monthly_income.positive(),
        report.monthly_savings.value(),
    ) {
        (Some(income), Some(savings)) => {
            format!(
                "{}% savings rate",
                fmt_one_decimal(savings / income * 100.0)
            )
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn health_view(report: &Report) -> HealthView {
    let score = report.financial_health_score;
    let reasons = split_lines(&report.score_reasons);
    HealthView {
        score,
        score_label: fmt_number_or_na(score),
        ring_percent: score.value().map(|v| v.clamp(0.0, 100.0)).unwrap_or(0.0),
        color: score_color(score.or_zero()),
        background: score_background(score.or_zero()),
        reasons,
    }
}

fn allocation_rows(report: &Report) -> Vec<AllocationRow> {
    let mut rows = Vec::with_capacity(report.monthly_breakdown.len() + 1);

    // Consumption leads the breakdown whenever expenses are known.
    if let Some(expenses) = report.monthly_expenses.positive() {
        let percent = report
            .monthly_income
            .positive()
            .map(|income| expenses / income * 100.0);
        rows.push(AllocationRow {
            category: "Consumption".to_string(),
            amount: Numeric::from_f64(expenses),
            display_amount: fmt_currency_value(expenses),
            percent_of_income: match percent {
                Some(p) => format!("{}% of income", fmt_one_decimal(p)),
                None => NOT_AVAILABLE.to_string(),
            },
            color: palette_color(0),
        });
    }

    for item in &report.monthly_breakdown {
        rows.push(AllocationRow {
            category: item.category.clone(),
            amount: item.amount,
            display_amount: fmt_currency(item.amount),
            percent_of_income: match item.percent.value() {
                Some(p) => format!("{p}% of income"),
                None => NOT_AVAILABLE.to_string(),
            },
            color: palette_color(rows.len()),
        });
    }
    rows
}

fn scenario_rows(report: &Report) -> Vec<ScenarioRow> {
    let ideal = ideal_index(&report.fi_timelines);
    report
        .fi_timelines
        .iter()
        .enumerate()
        .map(|(idx, scenario)| {
            let class = classify_scenario(scenario);
            ScenarioRow {
                roi: scenario.roi,
                display_roi: match scenario.roi.value() {
                    Some(v) => format!("{v}%"),
                    None => NOT_AVAILABLE.to_string(),
                },
                years_to_fi: fmt_one_decimal_or_na(scenario.years_to_fi.positive()),
                age_at_fi: fmt_one_decimal_or_na(scenario.age_at_fi.positive()),
                strategy: class.strategy,
                risk: class.risk,
                profitability: class.profitability,
                marker_color: class.marker_color,
                ideal: ideal == Some(idx),
            }
        })
        .collect()
}

fn recommendation_views(report: &Report) -> Vec<RecommendationView> {
    report
        .recommendations
        .iter()
        .map(|rec| RecommendationView {
            title: rec.title.clone(),
            detail_lines: split_lines(&rec.detail),
            priority_label: if rec.priority.is_empty() {
                "PRIORITY".to_string()
            } else {
                rec.priority.to_uppercase()
            },
            high_priority: rec.priority == "high",
        })
        .collect()
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
