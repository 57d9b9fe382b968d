use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::config::ClockConfig;
use crate::layout::Layout;
use crate::surface::RasterSurface;
use crate::visual::feed::DigitFeed;

/// The clock display driven by the retarget and render systems
#[derive(Resource)]
pub struct ClockDisplay(pub Layout);

/// Pixel canvas the display is drawn into, and the image it is uploaded to
#[derive(Resource)]
pub struct Canvas {
    pub surface: RasterSurface,
    pub image: Handle<Image>,
}

#[derive(Component)]
pub struct CanvasSprite;

/// Gates `render_display`
#[derive(Resource)]
pub struct RenderTick(pub Timer);

/// Gates `retarget_display`
#[derive(Resource)]
pub struct RetargetTick(pub Timer);

/// Why the built-in configuration is in use instead of the requested one
#[derive(Resource)]
pub struct ConfigFallback(pub String);

pub fn setup_display(mut commands: Commands, config: Res<ClockConfig>) {
    let mut feed = DigitFeed::from_kind(config.source);

    match Layout::from_config(&config) {
        Ok(mut layout) => {
            if let Err(e) = feed.push(&mut layout, config.blink_separators) {
                error!("Initial digits rejected: {}", e);
            }
            info!(
                "{:?} display ready: {} digits, {:?} source",
                layout.arrangement(),
                layout.digit_count(),
                config.source
            );
            commands.insert_resource(ClockDisplay(layout));
        }
        Err(e) => error!("Cannot lay out the display: {}", e),
    }

    commands.insert_resource(feed);
    commands.insert_resource(RenderTick(Timer::new(
        config.render_interval(),
        TimerMode::Repeating,
    )));
    commands.insert_resource(RetargetTick(Timer::new(
        config.retarget_interval(),
        TimerMode::Repeating,
    )));
}

pub fn setup_canvas(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<ClockConfig>,
) {
    let (width, height) = (config.canvas.width, config.canvas.height);
    let [r, g, b] = config.background;
    let surface = RasterSurface::new(
        width,
        height,
        config.background,
        config.ink,
        config.stroke_width,
    );

    let image = Image::new_fill(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[r, g, b, u8::MAX],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    let handle = images.add(image);

    commands.spawn((
        Sprite::from_image(handle.clone()),
        Transform::default(),
        CanvasSprite,
        Name::new("Clock Canvas"),
    ));
    commands.insert_resource(Canvas {
        surface,
        image: handle,
    });

    info!("Canvas {}x{} spawned", width, height);
}

pub fn report_config_fallback(fallback: Option<Res<ConfigFallback>>) {
    if let Some(fallback) = fallback {
        warn!("Using the built-in configuration: {}", fallback.0);
    }
}
