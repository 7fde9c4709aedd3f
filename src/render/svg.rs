use crate::core::{
    AllocationRow, HealthView, NOT_AVAILABLE, PieLayout, TimelineTrack, fmt_one_decimal,
    pie_sectors, ring_dasharray, sector_path,
};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn pie_svg(rows: &[AllocationRow], layout: PieLayout) -> String {
    let amounts: Vec<f64> = rows.iter().map(|row| row.amount.or_zero()).collect();
    let (cx, cy) = layout.center();
    let r = layout.radius();

    let mut out = String::new();
    out.push_str(&format!(
        r##"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" class="pie-chart">"##,
        size = layout.size
    ));
    for sector in pie_sectors(&amounts) {
        out.push_str(&format!(
            r##"<path d="{}" fill="{}" stroke="#fff" stroke-width="1"/>"##,
            sector_path(sector, cx, cy, r),
            sector.color
        ));
    }
    out.push_str(&format!(
        r##"<circle cx="{cx}" cy="{cy}" r="{}" fill="#fff"/>"##,
        layout.inner_radius
    ));
    out.push_str("</svg>");
    out
}

pub fn timeline_svg(track: &TimelineTrack) -> String {
    let layout = track.layout;
    let mid = layout.height / 2.0;

    let mut out = String::new();
    out.push_str(&format!(
        r##"<svg width="100%" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet">"##,
        w = layout.width,
        h = layout.height
    ));
    out.push_str(&format!(
        r##"<line x1="{}" y1="{mid}" x2="{}" y2="{mid}" stroke="#c9cbd2ff" stroke-width="2"/>"##,
        layout.edge_offset,
        layout.width - layout.edge_offset
    ));
    for tick in &track.ticks {
        out.push_str(&format!(
            r##"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="#E6E7EA"/>"##,
            mid - 6.0,
            mid + 6.0,
            x = tick.x
        ));
        out.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="12" fill="#374151" text-anchor="middle">{}</text>"##,
            tick.x,
            mid + 20.0,
            tick.age
        ));
    }
    for marker in &track.markers {
        // Balanced markers get a highlight ring around the dot.
        if marker.balanced {
            out.push_str(&format!(
                r##"<circle cx="{}" cy="{mid}" r="13" fill="none" stroke="#10B981" stroke-width="4"/>"##,
                marker.x
            ));
        }
        out.push_str(&format!(
            r##"<circle cx="{}" cy="{mid}" r="7" fill="{}"/>"##,
            marker.x, marker.color
        ));
        let roi_label = match marker.roi {
            Some(roi) => format!("{roi}%"),
            None => NOT_AVAILABLE.to_string(),
        };
        out.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="11" fill="#0f172a" text-anchor="middle">{}</text>"##,
            marker.x,
            mid - 14.0,
            roi_label
        ));
        let age_label = match marker.age_at_fi {
            Some(age) => fmt_one_decimal(age),
            None => NOT_AVAILABLE.to_string(),
        };
        out.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="11" fill="#374151" text-anchor="middle">Age {}</text>"##,
            marker.x,
            mid + 34.0,
            age_label
        ));
    }
    out.push_str("</svg>");
    out
}

pub fn ring_svg(health: &HealthView, size: f64, stroke: f64) -> String {
    let ring = ring_dasharray(health.ring_percent, size, stroke);
    let half = size / 2.0;

    let mut out = String::new();
    out.push_str(&format!(
        r##"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}">"##
    ));
    out.push_str(&format!(r##"<g transform="translate({half},{half})">"##));
    out.push_str(&format!(
        r##"<circle r="{}" fill="#F8FAFC" stroke="#F1F5F9" stroke-width="{stroke}"/>"##,
        ring.radius
    ));
    out.push_str(&format!(
        r##"<circle r="{}" fill="transparent" stroke="{}" stroke-width="{stroke}" stroke-linecap="round" stroke-dasharray="{} {}" stroke-dashoffset="{}" transform="rotate(-90)"/>"##,
        ring.radius, health.color, ring.dash, ring.gap, ring.offset
    ));
    out.push_str(&format!(
        r##"<text x="0" y="6" font-size="20" font-weight="700" text-anchor="middle" fill="#0F172A">{}</text>"##,
        escape(&health.score_label)
    ));
    out.push_str(
        r##"<text x="0" y="26" font-size="11" text-anchor="middle" fill="#6B7280">/100</text>"##,
    );
    out.push_str("</g></svg>");
    out
}
