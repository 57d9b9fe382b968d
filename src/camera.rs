use bevy::prelude::*;

use crate::config::ClockConfig;
use crate::visual::CanvasSprite;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasFit>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, fit_canvas_to_window);
    }
}

/// How the canvas sprite is scaled to fill the window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    pub window: Vec2,
    pub scale: f32,
}

impl Default for CanvasFit {
    fn default() -> Self {
        Self {
            window: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Largest uniform scale at which `canvas` still fits inside `window`
pub fn fit_scale(window: Vec2, canvas: Vec2) -> f32 {
    if window.min_element() <= 0.0 || canvas.min_element() <= 0.0 {
        return 1.0;
    }
    (window / canvas).min_element()
}

#[derive(Component)]
pub struct MainCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Rescale the canvas when the window size changes or the sprite appears
fn fit_canvas_to_window(
    mut fit: ResMut<CanvasFit>,
    config: Res<ClockConfig>,
    windows: Query<&Window>,
    mut sprites: Query<(&mut Transform, Ref<CanvasSprite>)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());

    let resized = (size - fit.window).abs().max_element() >= 0.5;
    let spawned = sprites.iter().any(|(_, sprite)| sprite.is_added());
    if !resized && !spawned {
        return;
    }

    let canvas = Vec2::new(config.canvas.width as f32, config.canvas.height as f32);
    fit.window = size;
    fit.scale = fit_scale(size, canvas);

    for (mut transform, _) in &mut sprites {
        transform.scale = Vec3::new(fit.scale, fit.scale, 1.0);
    }
    debug!("Canvas fit updated: {:?}", *fit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale() {
        let canvas = Vec2::new(1024.0, 720.0);
        assert_eq!(fit_scale(canvas, canvas), 1.0);
        assert_eq!(fit_scale(Vec2::new(512.0, 720.0), canvas), 0.5);
        assert_eq!(fit_scale(Vec2::new(2048.0, 1440.0), canvas), 2.0);
        assert_eq!(fit_scale(Vec2::ZERO, canvas), 1.0);
    }
}
