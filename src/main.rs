use std::env;
use std::thread;
use std::time::Duration;

use sdl2::keyboard::Keycode;

use wirerast::prelude::*;

const DEFAULT_MODEL: &str = "models/cube.obj";
const SCREENSHOT_PATH: &str = "frame.png";

fn main() -> Result<(), String> {
    let model_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_MODEL.into());

    let mesh = Mesh::from_obj(&model_path)
        .map_err(|e| format!("ERROR: can't load model '{model_path}': {e}"))?;
    println!(
        "INFO: loaded {} ({} vertices, {} faces)",
        model_path,
        mesh.vertices().len(),
        mesh.faces().len()
    );

    let mut window = Window::new("wirerast", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut renderer = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT, mesh);
    renderer.render();

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                renderer.resize(w, h);
                renderer.render();
            }
            WindowEvent::Key(Keycode::Num1) => {
                renderer.set_mode(RenderMode::Wireframe);
                renderer.render();
            }
            WindowEvent::Key(Keycode::Num2) => {
                renderer.set_mode(RenderMode::Filled);
                renderer.render();
            }
            WindowEvent::Key(Keycode::Num3) => {
                renderer.set_mode(RenderMode::Shaded);
                renderer.render();
            }
            WindowEvent::Key(Keycode::S) => match renderer.surface().save_png(SCREENSHOT_PATH) {
                Ok(()) => println!("INFO: saved frame to {SCREENSHOT_PATH}"),
                Err(e) => eprintln!("ERROR: can't save frame: {e}"),
            },
            WindowEvent::Key(_) | WindowEvent::None => {}
        }

        present_frame(&mut window, renderer.surface())?;
        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
