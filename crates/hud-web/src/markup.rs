// HTML fragments for the dashboard shell and its static widgets.
// Kept free of web-sys so host tests can include this file directly.

use hud_core::boot::BOOT_LINES;
use hud_core::dashboard::{StatTile, VolumeGauge, XpProgress};
use hud_core::{Progress, Status};

// Element ids shared between markup and DOM wiring
pub const ROOT_ID: &str = "app";
pub const SPLASH_ID: &str = "boot-splash";
pub const BOOT_LINES_ID: &str = "boot-lines";
pub const DASHBOARD_ID: &str = "dashboard";
pub const RESET_BUTTON_ID: &str = "reset-demo";
pub const CANVAS_ID: &str = "hud-canvas";
pub const CANVAS_WRAP_ID: &str = "hud-canvas-wrap";
pub const LEGEND_TOGGLE_ID: &str = "legend-toggle";
pub const LEGEND_ID: &str = "legend-overlay";
pub const STATUS_ID: &str = "status-badge";
pub const LIVE_DOT_ID: &str = "live-dot";
pub const SCORE_ID: &str = "center-score";
pub const FREQ_ID: &str = "badge-freq";
pub const VOL_ID: &str = "badge-vol";
pub const STATS_ID: &str = "stats-grid";
pub const XP_ID: &str = "xp-bar";
pub const GAUGE_ID: &str = "volume-gauge";

pub fn shell() -> String {
    format!(
        "<div id='{splash}' class='splash'>\
           <div class='splash-box'>\
             <div class='splash-head'><span class='blink'>NEON.FIT SYSTEM</span><span class='spin'>&#x23FB;</span></div>\
             <div id='{boot}' class='boot-lines'>{lines}</div>\
             <div class='boot-track'><div class='boot-fill'></div></div>\
           </div>\
         </div>\
         <div id='{dash}' class='dashboard' style='display:none'>\
           <header class='topbar'>\
             <h1>NEON<span class='cyan'>.FIT</span></h1>\
             <button id='{reset}' class='round-btn' title='Reset demo'>&#x21BA;</button>\
           </header>\
           <main class='column'>{tracker}\
             <section class='grid-card'><div id='{stats}' class='stats-grid'></div><div id='{xp}'></div></section>\
             <section id='{gauge}' class='gauge-card'></section>\
           </main>\
           <footer class='footer'>// SYSTEM OPTIMIZED //</footer>\
         </div>",
        splash = SPLASH_ID,
        boot = BOOT_LINES_ID,
        lines = boot_lines(0),
        dash = DASHBOARD_ID,
        reset = RESET_BUTTON_ID,
        tracker = tracker_card(),
        stats = STATS_ID,
        xp = XP_ID,
        gauge = GAUGE_ID,
    )
}

pub fn boot_lines(step: u8) -> String {
    BOOT_LINES
        .iter()
        .map(|line| {
            let class = if line.is_lit(step) { "boot-line lit" } else { "boot-line" };
            format!("<div class='{}'>{}</div>", class, line.text)
        })
        .collect()
}

pub fn tracker_card() -> String {
    format!(
        "<section class='tracker'>\
           <div class='hud'>\
             <div class='hud-head'>\
               <h2><span class='cyan spin'>&#x2316;</span> FIGHTER.HUD</h2>\
               <div class='hud-actions'>\
                 <button id='{toggle}' class='round-btn cyan'>{icon}</button>\
                 <div id='{status}'></div>\
               </div>\
             </div>\
             <div class='telemetry'><span id='{dot}' class='live-dot'></span>LIVE TELEMETRY</div>\
             <div id='{wrap}' class='canvas-wrap'><canvas id='{canvas}'></canvas></div>\
             <div class='center-data'>\
               <div class='locked'>TARGET LOCKED</div>\
               <div id='{score}' class='big-score'>0</div>\
               <div class='center-rule'></div>\
             </div>\
             <div class='badge badge-left'><div class='badge-label indigo'>&#x21BB; FREQ</div><div id='{freq}' class='badge-value'></div></div>\
             <div class='badge badge-right'><div class='badge-label fuchsia'>&#x2630; VOL</div><div id='{vol}' class='badge-value'></div></div>\
             <div id='{legend}' class='legend' style='display:none'>{legend_body}</div>\
           </div>\
         </section>",
        toggle = LEGEND_TOGGLE_ID,
        icon = legend_icon(false),
        status = STATUS_ID,
        dot = LIVE_DOT_ID,
        wrap = CANVAS_WRAP_ID,
        canvas = CANVAS_ID,
        score = SCORE_ID,
        freq = FREQ_ID,
        vol = VOL_ID,
        legend = LEGEND_ID,
        legend_body = legend(),
    )
}

pub fn legend_icon(shown: bool) -> &'static str {
    if shown {
        "&#x2715;"
    } else {
        "&#x2139;"
    }
}

pub fn legend() -> String {
    const ROWS: [(&str, &str, &str, &str); 3] = [
        ("indigo", "&#x21BB;", "FREQUENCY", "Weekly Sessions / Goal"),
        ("fuchsia", "&#x2630;", "VOLUME", "Total Sets / Capacity"),
        ("yellow", "&#x2316;", "INTENSITY", "Global Performance Score"),
    ];
    let rows: String = ROWS
        .iter()
        .map(|(accent, icon, title, hint)| {
            format!(
                "<div class='legend-row'><div class='legend-ring ring-{a}'>{i}</div>\
                 <div><div class='legend-title {a}'>{t}</div><div class='legend-hint'>{h}</div></div></div>",
                a = accent,
                i = icon,
                t = title,
                h = hint
            )
        })
        .collect();
    format!("<h3>LEGEND</h3>{}", rows)
}

pub fn score_value(score: f64) -> String {
    if score.is_finite() {
        format!("{}", score.round() as i64)
    } else {
        "0".to_string()
    }
}

pub fn badge_value(progress: &Progress) -> String {
    format!(
        "{}<span class='dim'>/{}</span>",
        count(progress.current),
        count(progress.max)
    )
}

pub fn status_badge(status: Status) -> String {
    let class = match status {
        Status::Consistent => "status ok",
        Status::Warning => "status warn",
    };
    format!("<div class='{}'>{}</div>", class, status.label())
}

pub fn stats_grid(tiles: &[StatTile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            let (text, [r, g, b]) = tile.accent.palette();
            format!(
                "<div class='tile' style='border-color:rgba({r},{g},{b},0.4);box-shadow:0 0 15px rgba({r},{g},{b},0.1)'>\
                 <div class='tile-value'>{value}</div>\
                 <div class='tile-label' style='color:{text}'>{label}</div></div>",
                r = r,
                g = g,
                b = b,
                text = text,
                value = tile.value,
                label = tile.label,
            )
        })
        .collect()
}

pub fn xp_bar(xp: &XpProgress) -> String {
    format!(
        "<div class='xp-head'><span class='cyan'>XP LEVEL {}</span><span class='dim'>{} / {}</span></div>\
         <div class='bar'><div class='bar-fill xp-fill' style='width:{}'></div></div>",
        xp.level,
        xp.current,
        xp.next_level,
        percent(xp.ratio())
    )
}

pub fn volume_gauge(gauge: &VolumeGauge) -> String {
    format!(
        "<div class='gauge-head'><span>VOLUME</span><span class='dim'>{} / {} kg</span></div>\
         <div class='bar'><div class='bar-fill gauge-fill' style='width:{}'></div></div>\
         <div class='gauge-stats'>\
           <div><div class='tile-value'>{}</div><div class='tile-label'>SETS</div></div>\
           <div><div class='tile-value'>{}s</div><div class='tile-label'>TUT</div></div>\
           <div><div class='tile-value'>{}</div><div class='tile-label'>SESSIONS</div></div>\
         </div>",
        count(gauge.volume),
        count(gauge.max_volume),
        percent(gauge.ratio()),
        count(gauge.sets),
        count(gauge.time_under_tension_sec),
        count(gauge.sessions),
    )
}

/// Opacity of the live-telemetry dot for a pulse phase in \[0, 1\].
pub fn live_dot_opacity(pulse: f64) -> String {
    format!("{:.3}", 0.35 + 0.65 * pulse.clamp(0.0, 1.0))
}

fn count(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0}", value)
    } else {
        "0".to_string()
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
