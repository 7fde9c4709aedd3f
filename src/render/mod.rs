mod page;
mod svg;
mod table;

pub use page::{render_dashboard, render_error_page};
pub use svg::{escape, pie_svg, ring_svg, timeline_svg};
pub use table::render_report_table;
