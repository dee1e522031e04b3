use crate::dom;
use crate::markup::{DASHBOARD_ID, LEGEND_ID, LEGEND_TOGGLE_ID, SPLASH_ID};
use web_sys as web;

/// Swap the boot splash for the dashboard, or back.
pub fn show_splash(document: &web::Document, shown: bool) {
    dom::set_visible(document, SPLASH_ID, shown);
    dom::set_visible(document, DASHBOARD_ID, !shown);
}

/// Show or hide the ring legend and flip the toggle button's icon.
pub fn set_legend(document: &web::Document, shown: bool) {
    dom::set_visible(document, LEGEND_ID, shown);
    dom::set_html(document, LEGEND_TOGGLE_ID, crate::markup::legend_icon(shown));
}

