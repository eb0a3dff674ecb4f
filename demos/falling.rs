use arena_physics::{
    bodies::ColorPair,
    render::{RenderOutput, RenderPass},
    BodyBuilder, FrameClock, Level, SimulationConfig, Vector,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::io::{stdout, Stdout, Write};
use std::time::Instant;

const TICKS: u32 = 300;
const CRATES: [(char, u8); 5] = [('#', 1), ('@', 2), ('%', 3), ('&', 4), ('$', 5)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;

    let config = SimulationConfig::default();
    let mut clock = FrameClock::new(config.tick_rate)?;

    let mut level = Level::new("falling").with_config(config).with_body(
        BodyBuilder::wall()
            .position(Vector::relative(0.0, 0.9))
            .size(Vector::relative(1.0, 0.1))
            .solid('=', ColorPair::new(7, 0)),
    );
    for (i, (glyph, fg)) in CRATES.iter().enumerate() {
        level = level.with_body(
            BodyBuilder::falling()
                .position(Vector::relative(0.15 * (i + 1) as f32, 0.0))
                .size(Vector::new(3.0, 2.0))
                .velocity(Vector::new(0.2 * i as f32 - 0.4, 0.0))
                .gravity(Vector::new(0.0, 0.05))
                .elasticity(0.6)
                .mass(1.0 + i as f32)
                .z(1)
                .solid(*glyph, ColorPair::new(*fg, 0)),
        );
    }
    let mut scene = level.build()?;

    for _ in 0..TICKS {
        clock.begin_tick(Instant::now());

        let (width, height) = size()?;
        let frame = scene.refresh_display(width as f32, height as f32, 0.0, 0.0);
        scene.tick();

        let mut pass = RenderPass::new(frame);
        pass.draw_scene(&scene);
        draw(&mut stdout, &pass.finish())?;

        clock.wait();
    }

    stdout.execute(ResetColor)?;
    stdout.execute(Show)?;
    Ok(())
}

fn draw(stdout: &mut Stdout, output: &RenderOutput) -> std::io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    for tile in output.tiles.iter() {
        let Some(color) = output.palette.get(tile.slot as usize - 1) else {
            continue;
        };
        stdout
            .queue(MoveTo(tile.x as u16, tile.y as u16))?
            .queue(SetForegroundColor(Color::AnsiValue(color.fg)))?
            .queue(SetBackgroundColor(Color::AnsiValue(color.bg)))?
            .queue(Print(tile.glyph))?;
    }
    stdout.queue(ResetColor)?;
    stdout.flush()
}
