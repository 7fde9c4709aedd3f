mod classify;
mod decode;
mod format;
mod geometry;
mod types;
mod view;

pub use classify::{
    BadgePalette, Classification, RiskTier, Strategy, classify, classify_scenario, ideal_index,
};
pub use decode::{DecodeError, decode_report};
pub use format::{
    NOT_AVAILABLE, fmt_currency, fmt_currency_value, fmt_number_or_na, fmt_one_decimal,
    fmt_one_decimal_or_na,
};
pub use geometry::{
    ALLOCATION_PALETTE, PieLayout, PieSector, RingGeometry, TimelineLayout, TimelineMarker,
    TimelineTick, TimelineTrack, palette_color, pie_sectors, ring_dasharray, sector_path,
    timeline_track,
};
pub use types::{BreakdownItem, Numeric, Recommendation, Report, Scenario};
pub use view::{
    AllocationRow, HealthView, INVESTMENT_CATEGORIES, RecommendationView, ReportView, ScenarioRow,
    score_background, score_color,
};
