use bevy::prelude::*;

use crate::config::ClockConfig;
use crate::visual::feed::DigitFeed;
use crate::visual::setup::{
    Canvas, ClockDisplay, RenderTick, RetargetTick, report_config_fallback, setup_canvas,
    setup_display,
};

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockConfig>()
            .add_systems(
                Startup,
                (report_config_fallback, (setup_display, setup_canvas).chain()),
            )
            // Independent: a render may see the previous or the new targets
            .add_systems(Update, (retarget_display, render_display));
    }
}

/// Feed the next reading to the display once per retarget interval
fn retarget_display(
    time: Res<Time>,
    config: Res<ClockConfig>,
    mut tick: ResMut<RetargetTick>,
    mut feed: ResMut<DigitFeed>,
    display: Option<ResMut<ClockDisplay>>,
) {
    if !tick.0.tick(time.delta()).just_finished() {
        return;
    }
    let Some(mut display) = display else {
        return;
    };

    if let Err(e) = feed.push(&mut display.0, config.blink_separators) {
        error!("Retarget skipped, keeping previous digits: {}", e);
    }
}

/// Advance the hands, redraw the canvas and upload it when pixels changed
fn render_display(
    time: Res<Time>,
    config: Res<ClockConfig>,
    mut tick: ResMut<RenderTick>,
    mut images: ResMut<Assets<Image>>,
    display: Option<ResMut<ClockDisplay>>,
    canvas: Option<ResMut<Canvas>>,
) {
    if !tick.0.tick(time.delta()).just_finished() {
        return;
    }
    let (Some(mut display), Some(mut canvas)) = (display, canvas) else {
        return;
    };
    let canvas = &mut *canvas;

    display
        .0
        .render_all(&mut canvas.surface, time.elapsed(), config.redraw);

    if canvas.surface.take_dirty() {
        if let Some(image) = images.get_mut(&canvas.image) {
            image.data = Some(canvas.surface.pixels().to_vec());
        }
    }
}
