//! Dashboard shell: boot splash, widgets, tracker lifecycle and demo reset.

use crate::dom::{self, Timeout};
use crate::markup::{
    self, BOOT_LINES_ID, FREQ_ID, GAUGE_ID, ROOT_ID, SCORE_ID, STATS_ID, STATUS_ID, VOL_ID, XP_ID,
};
use crate::overlay;
use crate::tracker::Tracker;
use hud_core::boot::{self, BootEvent};
use hud_core::dashboard::{DashboardState, STAT_TILES, XP_PROGRESS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

pub struct App {
    document: web::Document,
    dashboard: DashboardState,
    tracker: Option<Tracker>,
    boot_timers: Vec<Timeout>,
    seed: Option<u64>,
}

impl App {
    pub fn start(document: web::Document) -> anyhow::Result<SharedApp> {
        let root = document
            .get_element_by_id(ROOT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ID))?;
        let seed = root
            .get_attribute("data-seed")
            .and_then(|s| s.trim().parse::<u64>().ok());
        if let Some(s) = seed {
            log::info!("particle seed pinned to {}", s);
        }
        root.set_inner_html(&markup::shell());

        let app = Rc::new(RefCell::new(App {
            document,
            dashboard: DashboardState::default(),
            tracker: None,
            boot_timers: Vec::new(),
            seed,
        }));
        app.borrow().render_widgets();
        App::begin_boot(&app, false);
        Ok(app)
    }

    /// Show the splash and schedule its timeline. Pending timers from an
    /// earlier run are cleared first.
    fn begin_boot(app: &SharedApp, after_reset: bool) {
        {
            let mut a = app.borrow_mut();
            a.boot_timers.clear();
            overlay::show_splash(&a.document, true);
            a.render_boot_step(0);
        }
        let weak = Rc::downgrade(app);
        let timers: Vec<Timeout> = boot::schedule(after_reset)
            .into_iter()
            .filter_map(|(at, event)| {
                let weak = weak.clone();
                Timeout::schedule(at, move || {
                    if let Some(app) = weak.upgrade() {
                        App::on_boot_event(&app, event);
                    }
                })
            })
            .collect();
        app.borrow_mut().boot_timers = timers;
    }

    fn on_boot_event(app: &SharedApp, event: BootEvent) {
        let mut a = app.borrow_mut();
        match event {
            BootEvent::Step(step) => a.render_boot_step(step),
            BootEvent::RestoreDemo => {
                a.dashboard.restore();
                a.render_widgets();
            }
            BootEvent::Complete => {
                a.boot_timers.clear();
                overlay::show_splash(&a.document, false);
                if let Err(e) = a.mount_tracker() {
                    log::error!("tracker mount error: {:?}", e);
                }
            }
        }
    }

    pub fn reset_demo(app: &SharedApp) {
        log::info!("demo reset");
        {
            let mut a = app.borrow_mut();
            a.unmount_tracker();
            a.dashboard.reset();
            a.render_widgets();
        }
        App::begin_boot(app, true);
    }

    pub fn toggle_legend(&self) {
        if let Some(tracker) = &self.tracker {
            let shown = tracker.toggle_legend();
            overlay::set_legend(&self.document, shown);
        }
    }

    pub fn hide_legend(&self) {
        if let Some(tracker) = &self.tracker {
            tracker.hide_legend();
            overlay::set_legend(&self.document, false);
        }
    }

    /// Page teardown: stop everything that is still scheduled.
    pub fn shutdown(&mut self) {
        self.unmount_tracker();
        self.boot_timers.clear();
    }

    fn mount_tracker(&mut self) -> anyhow::Result<()> {
        self.unmount_tracker();
        let props = self.dashboard.tracker_props();
        overlay::set_legend(&self.document, false);
        self.tracker = Some(Tracker::mount(&self.document, &props, self.seed)?);
        Ok(())
    }

    fn unmount_tracker(&mut self) {
        if let Some(mut tracker) = self.tracker.take() {
            tracker.unmount();
        }
        overlay::set_legend(&self.document, false);
    }

    fn render_boot_step(&self, step: u8) {
        dom::set_html(&self.document, BOOT_LINES_ID, &markup::boot_lines(step));
    }

    fn render_widgets(&self) {
        let props = self.dashboard.tracker_props();
        let doc = &self.document;
        dom::set_html(doc, SCORE_ID, &markup::score_value(props.score));
        dom::set_html(doc, FREQ_ID, &markup::badge_value(&props.sessions));
        dom::set_html(doc, VOL_ID, &markup::badge_value(&props.sets));
        dom::set_html(doc, STATUS_ID, &markup::status_badge(props.status));
        dom::set_html(doc, STATS_ID, &markup::stats_grid(&STAT_TILES));
        dom::set_html(doc, XP_ID, &markup::xp_bar(&XP_PROGRESS));
        dom::set_html(doc, GAUGE_ID, &markup::volume_gauge(&self.dashboard.volume_gauge()));
        if let Some(tracker) = &self.tracker {
            tracker.set_props(&props);
        }
    }
}
