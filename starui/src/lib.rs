mod surface;

use piston_window::{
    clear, EventLoop, EventSettings, PistonWindow, RenderEvent, UpdateEvent, Window,
    WindowSettings,
};
use starcore::Animation;
use thiserror::Error;

pub use surface::{color_arr, PistonSurface, BACKGROUND};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open window: {0}")]
    Window(String),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Logic ticks per second; rendering is capped to the same rate.
    pub ups: u64,
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            title: "Shooting Stars".to_owned(),
            width: 800,
            height: 600,
            ups: 40,
            fullscreen: false,
        }
    }
}

// One update per elapsed period; a late tick is dropped, never replayed.
fn event_settings(settings: &Settings) -> EventSettings {
    EventSettings::new()
        .ups(settings.ups)
        .max_fps(settings.ups)
        .ups_reset(1)
}

pub struct Runner {}

impl Runner {
    pub fn run<T: Animation>(anim: &mut T, settings: &Settings) -> Result<(), RunError> {
        let mut window: PistonWindow =
            WindowSettings::new(settings.title.clone(), [settings.width, settings.height])
                .fullscreen(settings.fullscreen)
                .exit_on_esc(true)
                .build()
                .map_err(|e| RunError::Window(e.to_string()))?;

        window.set_event_settings(event_settings(settings));
        log::info!(
            "window open at {}x{}, {} ticks/s",
            settings.width,
            settings.height,
            settings.ups
        );

        while let Some(e) = window.next() {
            if e.update_args().is_some() {
                let size = window.size();
                anim.step(size.width as u32, size.height as u32);
            }

            if let Some(args) = e.render_args() {
                let size = (args.window_size[0] as u32, args.window_size[1] as u32);
                window.draw_2d(&e, |c, g, _| {
                    clear(BACKGROUND, g);
                    anim.draw(&mut PistonSurface::new(c, g, size));
                });
            }
        }

        log::info!("window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_settings_run_one_update_per_tick() {
        let settings = Settings {
            ups: 25,
            ..Default::default()
        };
        let events = event_settings(&settings);
        assert_eq!(events.ups, 25);
        assert_eq!(events.max_fps, 25);
        assert_eq!(events.ups_reset, 1);
    }
}
