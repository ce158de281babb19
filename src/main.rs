use log::info;
use rand::rng;

use wirewalk::prelude::*;
use wirewalk::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    env_logger::init();

    let mut window = Window::new("Wirewalk", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut game = Game::new(&mut rng());
    let renderer = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut target = RasterTarget::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut limiter = FrameLimiter::new(&window);

    info!("starting render loop at {}x{}", WINDOW_WIDTH, WINDOW_HEIGHT);

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Input(action) => game.handle_input(action),
            }
        }

        renderer.render(game.scene(), game.camera(), &mut target);
        window.present(target.as_bytes())?;

        if game.won() {
            info!("you won!");
            break;
        }

        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
