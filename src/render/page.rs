use crate::core::{PieLayout, ReportView};

use super::svg::{escape, pie_svg, ring_svg, timeline_svg};

const CSS: &str = r#"*{box-sizing:border-box}
body{margin:0;background:#FFFFFF;color:#111827;font-family:system-ui,-apple-system,'Segoe UI',Roboto,Arial,sans-serif;padding:32px 16px}
.page{max-width:1280px;margin:0 auto}
.header{text-align:center;margin-bottom:48px}
.header h1{font-size:36px;font-weight:bold;color:#111827;margin:0}
.header p{font-size:18px;color:#6B7280;margin:0}
.card{background:white;border-radius:6px;border:1px solid #E6E7EA;padding:20px;margin-bottom:20px}
.card h2{font-size:20px;font-weight:600;color:#1F2937;margin:0 0 16px 0}
.stat-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(250px,1fr));gap:24px}
.stat{padding:16px;border-radius:8px;border:1px solid #E6E7EA}
.stat .label{font-size:14px;font-weight:500;margin-bottom:4px}
.stat .value{font-size:24px;font-weight:bold;color:#111827}
.stat .extra{font-size:12px;margin-top:4px;color:#6B7280}
.stat-income{background:linear-gradient(90deg,#EFF6FF,#EEF2FF)}
.stat-income .label{color:#1E40AF}
.stat-expenses{background:linear-gradient(90deg,#F5F3FF,#FBF7FF)}
.stat-expenses .label{color:#6B21A8}
.stat-savings{background:linear-gradient(90deg,#ECFDF5,#F0FDF4)}
.stat-savings .label{color:#065F46}
.stat-assets{background:linear-gradient(90deg,#FFF7ED,#FFFBF0)}
.stat-assets .label{color:#92400E}
.split{display:grid;grid-template-columns:1fr 1fr;gap:16px;margin-bottom:16px;align-items:start}
.split .card{display:flex;flex-direction:column;min-height:340px;margin-bottom:0}
.health-body{display:flex;align-items:center;gap:80px;flex:1}
.health-body ul{margin:8px 0 0 18px;padding:0;color:#374151;font-size:14px;line-height:1.5}
.health-body li{margin-bottom:6px;line-height:1.4}
.allocation-body{display:flex;align-items:center;gap:24px;flex:1}
.allocation-rows{flex:1}
.allocation-row{display:grid;grid-template-columns:1fr 120px;align-items:center;margin-bottom:8px}
.allocation-name{display:flex;align-items:center;gap:8px;font-weight:700;color:#374151}
.swatch{display:inline-block;width:16px;height:16px;border-radius:4px;border:1px solid #e5e7eb}
.allocation-percent{font-size:12px;color:#6B7280}
.allocation-amount{color:#374151;font-weight:600;text-align:right}
.legend{display:flex;gap:12px;align-items:center;margin:8px 0;font-size:13px;color:#374151}
.legend span{display:flex;align-items:center;gap:8px}
.chip{width:10px;height:10px;border-radius:3px;display:inline-block}
table{width:100%;border-collapse:collapse}
th{text-align:left;padding:12px 16px;color:#374151;font-weight:600;border-bottom:2px solid #E5E7EB}
td{padding:16px;color:#374151;border-bottom:1px solid #F3F4F6}
tr:hover{background:#F9FAFB}
tr.ideal{background:#FFFBEB;border-left:4px solid #2563EB}
.roi{font-weight:600;color:#111827}
.badge{border-radius:8px;font-weight:600;font-size:14px;padding:4px 12px;display:inline-block}
.strategy-cell{display:flex;align-items:center;gap:8px}
.ideal-badge{font-size:12px;font-weight:700;background:#10B981;color:#ffffff;padding:4px 8px;border-radius:6px}
.risk-cell{display:flex;flex-direction:column;align-items:flex-start;gap:4px}
.profit{font-size:12px;color:#374151}
.invest-panel{background:linear-gradient(135deg,#F8FAFC 0%,#F1F5F9 100%);border:1px solid #E2E8F0;border-radius:12px;padding:24px;margin-bottom:32px}
.invest-head{display:flex;align-items:center;gap:12px;margin-bottom:20px}
.invest-icon{width:40px;height:40px;background:linear-gradient(135deg,#3B82F6 0%,#8B5CF6 100%);border-radius:10px;display:flex;align-items:center;justify-content:center}
.invest-head h3{font-weight:700;font-size:18px;color:#0F172A;margin:0}
.invest-head p{font-size:14px;color:#64748B;margin:2px 0 0 0}
.invest-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:12px}
.invest-chip{background:#FFFFFF;border:1px solid #E2E8F0;border-radius:8px;padding:12px 16px;display:flex;align-items:center;gap:10px}
.invest-dot{width:8px;height:8px;border-radius:50%;background:linear-gradient(135deg,#3B82F6 0%,#8B5CF6 100%)}
.invest-chip span{font-size:14px;font-weight:500;color:#334155}
.rec-card{background:#FFFFFF;border:1px solid #E6E7EA;border-radius:12px;padding:20px;margin-bottom:16px}
.rec-card ol{margin:0;padding-left:18px}
.rec-card li{margin-bottom:12px}
.rec-row{display:flex;justify-content:space-between;gap:12px}
.rec-main{flex:1}
.rec-title{font-weight:700;color:#0F172A;margin-bottom:6px}
.rec-detail{color:#475569;line-height:1.6}
.rec-detail div{margin-bottom:6px}
.rec-aside{min-width:120px;text-align:right}
.priority{display:inline-block;padding:6px 10px;border-radius:8px;font-weight:700;font-size:12px}
.priority-high{background:#FEE2E2;color:#991B1B;border:1px solid #FCA5A5}
.priority-default{background:#DBEAFE;color:#1E40AF;border:1px solid #93C5FD}
.rec-empty{color:#64748B}
.error-panel{margin-top:24px;background:#FEF2F2;border:1px solid #FCA5A5;border-radius:8px;padding:16px}
.error-panel p{color:#991B1B;margin:0}
"#;

pub fn render_dashboard(view: &ReportView) -> String {
    let mut out = String::with_capacity(16 * 1024);
    write_doc_head(&mut out);
    out.push_str("<div class=\"page\">");
    write_header(&mut out);
    write_stats(&mut out, view);
    write_health_and_allocation(&mut out, view);
    write_fi_path(&mut out, view);
    write_advice(&mut out, view);
    out.push_str("</div></body></html>");
    out
}

pub fn render_error_page(message: &str) -> String {
    let mut out = String::with_capacity(4 * 1024);
    write_doc_head(&mut out);
    out.push_str("<div class=\"page\">");
    write_header(&mut out);
    out.push_str(&format!(
        r#"<div class="error-panel"><p>{}</p></div>"#,
        escape(message)
    ));
    out.push_str("</div></body></html>");
    out
}

fn write_doc_head(out: &mut String) {
    out.push_str(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>Financial Freedom Calculator</title><style>",
    );
    out.push_str(CSS);
    out.push_str("</style></head><body>");
}

fn write_header(out: &mut String) {
    out.push_str(
        "<header class=\"header\"><h1>Financial Freedom Calculator</h1>\
         <p>A simple calculator to plan and reach financial freedom sooner | \
         Enter your numbers and generate a personalized plan.</p></header>",
    );
}

fn write_stats(out: &mut String, view: &ReportView) {
    out.push_str("<section class=\"card\"><h2>Current Financial State</h2><div class=\"stat-grid\">");
    out.push_str(&format!(
        r#"<div class="stat stat-income"><div class="label">Monthly Income</div><div class="value">{}</div></div>"#,
        escape(&view.monthly_income)
    ));
    out.push_str(&format!(
        r#"<div class="stat stat-expenses"><div class="label">Monthly Expenses</div><div class="value">{}</div></div>"#,
        escape(&view.monthly_expenses)
    ));
    out.push_str(&format!(
        r#"<div class="stat stat-savings"><div class="label">Monthly Savings</div><div class="value">{}</div><div class="extra">{}</div></div>"#,
        escape(&view.monthly_savings),
        escape(&view.savings_rate)
    ));
    out.push_str(&format!(
        r#"<div class="stat stat-assets"><div class="label">Total Assets</div><div class="value">{}</div></div>"#,
        escape(&view.total_assets)
    ));
    out.push_str("</div></section>");
}

fn write_health_and_allocation(out: &mut String, view: &ReportView) {
    out.push_str("<div class=\"split\">");

    out.push_str("<section class=\"card\"><h2>Financial Health Score</h2><div class=\"health-body\">");
    out.push_str(&ring_svg(&view.health, 160.0, 16.0));
    if !view.health.reasons.is_empty() {
        out.push_str("<ul>");
        for reason in &view.health.reasons {
            out.push_str(&format!("<li>{}</li>", escape(reason)));
        }
        out.push_str("</ul>");
    }
    out.push_str("</div></section>");

    out.push_str("<section class=\"card\"><h2>Monthly Allocation Plan</h2><div class=\"allocation-body\">");
    out.push_str(&pie_svg(&view.allocation, PieLayout::dashboard()));
    out.push_str("<div class=\"allocation-rows\">");
    for row in &view.allocation {
        out.push_str(&format!(
            r#"<div class="allocation-row"><div><div class="allocation-name"><span class="swatch" style="background:{}"></span>{}</div><div class="allocation-percent">{}</div></div><div class="allocation-amount">{}</div></div>"#,
            row.color,
            escape(&row.category),
            escape(&row.percent_of_income),
            escape(&row.display_amount)
        ));
    }
    out.push_str("</div></div></section>");

    out.push_str("</div>");
}

fn write_fi_path(out: &mut String, view: &ReportView) {
    out.push_str("<section class=\"card\"><h2>Path to Financial Independence</h2>");
    if let Some(track) = &view.timeline {
        out.push_str(&timeline_svg(track));
    }
    out.push_str(
        r##"<div class="legend"><span><span class="chip" style="background:#06b6d4"></span>Conservative (lower ROI)</span><span><span class="chip" style="background:#10B981;border:2px solid #10B981"></span>Balanced</span><span><span class="chip" style="background:#ef4444"></span>Aggressive (higher ROI)</span></div>"##,
    );
    out.push_str(
        "<table><thead><tr><th>Annual Return (ROI %)</th>\
         <th>Years to Financial Independence</th>\
         <th>Age at Financial Independence</th>\
         <th>Suggested Strategy</th>\
         <th>Risk Level / Profitability</th></tr></thead><tbody>",
    );
    for row in &view.scenarios {
        let strategy_badge = row.strategy.badge();
        let risk_badge = row.risk.badge();
        out.push_str(if row.ideal {
            "<tr class=\"ideal\">"
        } else {
            "<tr>"
        });
        out.push_str(&format!(
            r#"<td><span class="roi">{}</span></td>"#,
            escape(&row.display_roi)
        ));
        out.push_str(&format!("<td>{} years</td>", escape(&row.years_to_fi)));
        out.push_str(&format!("<td>{} years</td>", escape(&row.age_at_fi)));
        out.push_str(&format!(
            r#"<td><div class="strategy-cell"><span class="badge" style="background:{};color:{}">{}</span>"#,
            strategy_badge.background,
            strategy_badge.text,
            row.strategy.label()
        ));
        if row.ideal {
            out.push_str(r#"<span class="ideal-badge">Ideal</span>"#);
        }
        out.push_str("</div></td>");
        out.push_str(&format!(
            r#"<td><div class="risk-cell"><span class="badge" style="background:{};color:{}">{} risk</span><div class="profit">{}</div></div></td>"#,
            risk_badge.background,
            risk_badge.text,
            row.risk.label(),
            row.profitability
        ));
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></section>");
}

fn write_advice(out: &mut String, view: &ReportView) {
    out.push_str("<section class=\"card\">");

    out.push_str(
        r##"<div class="invest-panel"><div class="invest-head"><div class="invest-icon"><svg width="20" height="20" viewBox="0 0 24 24" fill="none"><path d="M12 2L2 7l10 5 10-5-10-5z" fill="#fff" opacity="0.8"/><path d="M2 17l10 5 10-5M2 12l10 5 10-5" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg></div><div><h3>Suggested Investment Categories for your portfolio</h3><p>Diversify your portfolio across these recommended areas</p></div></div><div class="invest-grid">"##,
    );
    for category in &view.investment_categories {
        out.push_str(&format!(
            r#"<div class="invest-chip"><div class="invest-dot"></div><span>{}</span></div>"#,
            escape(category)
        ));
    }
    out.push_str("</div></div>");

    out.push_str("<h3>Personalized Recommendations: </h3><div class=\"rec-card\">");
    if view.recommendations.is_empty() {
        out.push_str("<div class=\"rec-empty\">No action items available.</div>");
    } else {
        out.push_str("<ol>");
        for rec in &view.recommendations {
            out.push_str("<li><div class=\"rec-row\"><div class=\"rec-main\">");
            out.push_str(&format!(
                r#"<div class="rec-title">{}</div>"#,
                escape(&rec.title)
            ));
            if !rec.detail_lines.is_empty() {
                out.push_str("<div class=\"rec-detail\">");
                for line in &rec.detail_lines {
                    out.push_str(&format!("<div>{}</div>", escape(line)));
                }
                out.push_str("</div>");
            }
            let priority_class = if rec.high_priority {
                "priority priority-high"
            } else {
                "priority priority-default"
            };
            out.push_str(&format!(
                r#"</div><div class="rec-aside"><span class="{}">{}</span></div></div></li>"#,
                priority_class,
                escape(&rec.priority_label)
            ));
        }
        out.push_str("</ol>");
    }
    out.push_str("</div></section>");
}
