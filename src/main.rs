use bevy::prelude::*;
use bevy::window::WindowResolution;

use clock_of_clocks::camera::CameraPlugin;
use clock_of_clocks::config::ClockConfig;
use clock_of_clocks::visual::{ClockPlugin, ConfigFallback};

fn main() {
    // Logging is not up yet; the fallback is reported once the app starts
    let (config, fallback) = match ClockConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ClockConfig::default(), Some(ConfigFallback(e.to_string()))),
    };

    let [r, g, b] = config.background;
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Clock of Clocks".into(),
            resolution: WindowResolution::new(config.canvas.width, config.canvas.height),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
    .insert_resource(config)
    .add_plugins(CameraPlugin)
    .add_plugins(ClockPlugin);

    if let Some(fallback) = fallback {
        app.insert_resource(fallback);
    }

    app.run();
}
