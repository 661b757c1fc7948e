mod controller;
mod geometry;
mod patterns;
mod renderer;
mod scene;

use std::sync::Arc;

use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use controller::{Command, Controller};
use renderer::WgpuRenderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Fractal Gallery")
        .with_inner_size(winit::dpi::PhysicalSize::new(512, 512))
        .build(&event_loop)?;
    let window = Arc::new(window);

    let mut renderer = pollster::block_on(WgpuRenderer::new(window.clone()))?;
    let mut controller = Controller::new();
    controller.upload(&mut renderer);

    println!("1: Squares and Diamonds");
    println!("2: Spiral");
    println!("3: Sierpinski Triangles");
    println!("4: Barnsley Fern");
    println!("5: Koch Snowflake");
    println!("\nUp: increment detail\nDown: decrement detail\nEsc: quit");

    let win_id = window.id();
    let win_clone = window.clone();
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run(move |event, target| match event {
        Event::WindowEvent { event, window_id } if window_id == win_id => match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                win_clone.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => match key_command(&event) {
                Some(Command::Quit) => target.exit(),
                Some(command) => {
                    controller.handle(command, &mut renderer);
                    win_clone.request_redraw();
                }
                None => {}
            },
            WindowEvent::RedrawRequested => {
                if let Err(e) = renderer.draw() {
                    log::error!("draw failed: {e}");
                }
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}

/// One command per key press edge; repeats and releases are ignored.
fn key_command(event: &KeyEvent) -> Option<Command> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    match code {
        KeyCode::Digit1 => Some(Command::SelectPattern(1)),
        KeyCode::Digit2 => Some(Command::SelectPattern(2)),
        KeyCode::Digit3 => Some(Command::SelectPattern(3)),
        KeyCode::Digit4 => Some(Command::SelectPattern(4)),
        KeyCode::Digit5 => Some(Command::SelectPattern(5)),
        KeyCode::ArrowUp => Some(Command::Increment),
        KeyCode::ArrowDown => Some(Command::Decrement),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}
