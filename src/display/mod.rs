mod pixel_buffer;

pub use pixel_buffer::{Pixel, PixelBuffer};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

/// Keys the game understands. Everything else maps to `Unhandled` and is
/// ignored by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Escape,
    Unhandled,
}

/// Closed set of platform events, drained per poll.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Quit,
    KeyDown(GameKey),
    KeyUp(GameKey),
    MouseMove { x: i32, y: i32 },
}

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
}

impl Display {
    /// Create the window and event pump. SDL errors surface as strings.
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload raw BGRA bytes to the streaming texture and present. The
    /// texture format is ARGB8888, which packs to B,G,R,A byte order on
    /// little-endian - the exact layout the pixel buffer produces, so the
    /// bytes pass through untouched.
    pub fn present(&mut self, target: &mut RenderTarget, pixel_data: &[u8]) -> Result<(), String> {
        target
            .texture
            .update(None, pixel_data, (target.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain all currently queued platform events without blocking.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(map_keycode(k))),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyUp(map_keycode(k))),
                Event::MouseMotion { x, y, .. } => events.push(InputEvent::MouseMove { x, y }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture, width })
    }
}

fn map_keycode(keycode: Keycode) -> GameKey {
    match keycode {
        Keycode::W | Keycode::Up => GameKey::MoveUp,
        Keycode::S | Keycode::Down => GameKey::MoveDown,
        Keycode::A | Keycode::Left => GameKey::MoveLeft,
        Keycode::D | Keycode::Right => GameKey::MoveRight,
        Keycode::Space => GameKey::TogglePause,
        Keycode::Escape => GameKey::Escape,
        _ => GameKey::Unhandled,
    }
}
