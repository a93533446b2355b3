//! Render scheduler and frame composition: one poll-and-redraw cycle per
//! fixed-period tick on the single rendering context.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, symbols::Marker, widgets::canvas::Canvas, Terminal};
use tokio::time::sleep;

use crystal_telemetry::{Sample, SampleChannel};

use crate::layout::{self, MIN_SURFACE};
use crate::surface::{Rgb, Surface, TextStyle};
use crate::term::CanvasSurface;
use crate::ui::{bar, footer, gauge, panel, theme, util};

/// Default redraw period.
pub const TICK: Duration = Duration::from_millis(80);

pub struct App {
    channel: SampleChannel,
    current: Option<Sample>,
    frame: u64,
    should_quit: bool,
    tick: Duration,
}

impl App {
    pub fn new(channel: SampleChannel) -> Self {
        Self {
            channel,
            current: None,
            frame: 0,
            should_quit: false,
            tick: TICK,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// One scheduler tick: adopt the newest available sample, or keep
    /// displaying the last known one.
    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if let Some(sample) = self.channel.try_take() {
            self.current = Some(sample);
        }
    }

    pub fn current(&self) -> Option<&Sample> {
        self.current.as_ref()
    }

    /// Full stateless redraw. Degenerate surfaces are skipped outright so no
    /// renderer ever sees zero or negative dimensions.
    pub fn draw_frame<S: Surface>(&self, s: &mut S, w: f64, h: f64) {
        if w < MIN_SURFACE || h < MIN_SURFACE {
            return;
        }
        match &self.current {
            Some(sample) => draw_sample(s, w, h, sample),
            None => draw_loading(s, w, h, self.frame),
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        loop {
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    let ctrl_c = k.code == KeyCode::Char('c')
                        && k.modifiers.contains(KeyModifiers::CONTROL);
                    if matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                        || ctrl_c
                    {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            self.on_tick();

            terminal.draw(|f| {
                let area = f.area();
                // Braille cells give 2x4 dots each; those dots stand in for
                // device pixels on this backend.
                let w = f64::from(area.width) * 2.0;
                let h = f64::from(area.height) * 4.0;
                let canvas = Canvas::default()
                    .marker(Marker::Braille)
                    .x_bounds([0.0, w])
                    .y_bounds([0.0, h])
                    .paint(|ctx| {
                        let mut surface = CanvasSurface::new(ctx, h);
                        self.draw_frame(&mut surface, w, h);
                    });
                f.render_widget(canvas, area);
            })?;

            sleep(self.tick).await;
        }
        Ok(())
    }
}

/// Compose a full frame from one sample: glass panel, RAM/GPU gauges,
/// CPU/DISK/NET bars, divider, footer.
pub fn draw_sample<S: Surface>(s: &mut S, w: f64, h: f64, sample: &Sample) {
    let geo = layout::layout(w, h);

    panel::draw_glass_panel(s, 2.0, 2.0, w - 2.0, h - 2.0, geo.panel_radius);

    let ram_value = format!("{:.1}/{:.0}G", sample.ram_used_gb, sample.ram_total_gb);
    gauge::draw_gauge(
        s,
        geo.gauge_left_cx,
        geo.gauge_cy,
        geo.gauge_radius,
        f64::from(sample.ram_pct.clamp(0.0, 100.0)) / 100.0,
        theme::RAM,
        "RAM",
        &ram_value,
    );

    let (gpu_frac, gpu_value) = match sample.gpu_pct {
        Some(v) => (f64::from(v.clamp(0.0, 100.0)) / 100.0, format!("{v:.0}%")),
        None => (0.0, "N/A".to_string()),
    };
    gauge::draw_gauge(
        s,
        geo.gauge_right_cx,
        geo.gauge_cy,
        geo.gauge_radius,
        gpu_frac,
        theme::GPU,
        "GPU",
        &gpu_value,
    );

    s.line(
        geo.pad + 10.0,
        geo.divider_y,
        w - geo.pad - 10.0,
        geo.divider_y,
        1.0,
        theme::DIVIDER,
    );

    let rows: [(&str, f64, String, Rgb); 4] = [
        (
            "CPU",
            f64::from(sample.cpu_pct.clamp(0.0, 100.0)) / 100.0,
            format!("{:.0}%", sample.cpu_pct),
            theme::CPU,
        ),
        (
            "DISK",
            f64::from(sample.disk_pct.clamp(0.0, 100.0)) / 100.0,
            format!("{:.0}/{:.0}G", sample.disk_used_gb, sample.disk_total_gb),
            theme::DISK,
        ),
        (
            "\u{2191}NET",
            util::network_fraction(sample.net_up_bps),
            format!("{}/s", util::format_bytes(sample.net_up_bps)),
            theme::NET_UP,
        ),
        (
            "\u{2193}NET",
            util::network_fraction(sample.net_dn_bps),
            format!("{}/s", util::format_bytes(sample.net_dn_bps)),
            theme::NET_DN,
        ),
    ];

    let slot = (geo.bars_bottom - geo.bars_top) / rows.len() as f64;
    for (i, (label, frac, value, color)) in rows.iter().enumerate() {
        let cy = geo.bars_top + i as f64 * slot + slot / 2.0;
        bar::draw_bar(
            s,
            geo.pad,
            w - geo.pad,
            cy - geo.bar_height / 2.0,
            cy + geo.bar_height / 2.0,
            label,
            *frac,
            value,
            *color,
            &geo,
        );
    }

    let clock = Local::now().format("%H:%M:%S").to_string();
    footer::draw_footer(s, &geo, w, &clock, sample.uptime_secs);
}

/// Placeholder frame shown until the first sample arrives.
pub fn draw_loading<S: Surface>(s: &mut S, w: f64, h: f64, frame: u64) {
    let geo = layout::layout(w, h);
    panel::draw_glass_panel(s, 2.0, 2.0, w - 2.0, h - 2.0, geo.panel_radius);
    let dots = ".".repeat(1 + (frame % 4) as usize);
    s.text(
        w / 2.0,
        h / 2.0,
        &format!("Loading{dots}"),
        TextStyle::new(9.0, theme::FG2),
    );
}
