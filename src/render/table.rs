use tabled::{Table, builder::Builder};

use crate::core::ReportView;

// Terminal counterpart of the dashboard: summary lines, the allocation and
// scenario tables, and the numbered recommendation list.
pub fn render_report_table(view: &ReportView) -> String {
    let mut out = String::new();

    out.push_str("Current Financial State\n");
    out.push_str(&format!("  Monthly Income:   {}\n", view.monthly_income));
    out.push_str(&format!("  Monthly Expenses: {}\n", view.monthly_expenses));
    out.push_str(&format!(
        "  Monthly Savings:  {} ({})\n",
        view.monthly_savings, view.savings_rate
    ));
    out.push_str(&format!("  Total Assets:     {}\n", view.total_assets));
    out.push_str(&format!(
        "  Health Score:     {}/100\n",
        view.health.score_label
    ));
    for reason in &view.health.reasons {
        out.push_str(&format!("    - {reason}\n"));
    }
    out.push('\n');

    out.push_str("Monthly Allocation Plan\n");
    let mut builder = Builder::default();
    builder.push_record(["Category", "Amount", "Share"]);
    for row in &view.allocation {
        builder.push_record([
            row.category.as_str(),
            &row.display_amount,
            &row.percent_of_income,
        ]);
    }
    out.push_str(&Table::from(builder).to_string());
    out.push_str("\n\n");

    out.push_str("Path to Financial Independence\n");
    let mut builder = Builder::default();
    builder.push_record(["ROI", "Years to FI", "Age at FI", "Strategy", "Risk", "Outlook"]);
    for row in &view.scenarios {
        let strategy = if row.ideal {
            format!("{} (Ideal)", row.strategy.label())
        } else {
            row.strategy.label().to_string()
        };
        builder.push_record([
            row.display_roi.as_str(),
            &format!("{} years", row.years_to_fi),
            &format!("{} years", row.age_at_fi),
            &strategy,
            &format!("{} risk", row.risk.label()),
            row.profitability,
        ]);
    }
    out.push_str(&Table::from(builder).to_string());
    out.push('\n');

    out.push_str("\nPersonalized Recommendations\n");
    if view.recommendations.is_empty() {
        out.push_str("  No action items available.\n");
    } else {
        for (idx, rec) in view.recommendations.iter().enumerate() {
            out.push_str(&format!(
                "  {}. [{}] {}\n",
                idx + 1,
                rec.priority_label,
                rec.title
            ));
            for line in &rec.detail_lines {
                out.push_str(&format!("       {line}\n"));
            }
        }
    }

    out
}
