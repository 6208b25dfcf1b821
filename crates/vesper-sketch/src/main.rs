//! Demo sketch: a row of pulsing, color-cycling circles.

use std::f32::consts::PI;

use anyhow::Result;

use vesper_engine::coords::Rgba;
use vesper_engine::logging::{LoggingConfig, init_logging};
use vesper_engine::render::Canvas;
use vesper_engine::window::{FrameInfo, Runtime, RuntimeConfig, Sketch};

struct ManyCircles {
    steps: u32,
}

impl Sketch for ManyCircles {
    fn frame(&mut self, canvas: &mut Canvas, info: &FrameInfo) {
        canvas.background(Rgba::value(0.0, 1.0));

        let t = info.elapsed;
        let (x0, x1) = (info.width * 0.2, info.width * 0.8);
        let y = info.center().y;

        for i in 0..=self.steps {
            let id = i as f32 / self.steps as f32;
            let x = x0 + (x1 - x0) * id;

            let radius = ((t + id * 5.0).sin() * 0.5 + 0.5) * 100.0 + 10.0;
            let r = (t * 1.2 + id * 3.0).sin() * 0.5 + 0.5;
            let g = (t * 0.5 + id * 4.0 + PI).sin() * 0.5 + 0.5;
            let b = (t * 0.7 + id * 2.0 + PI * 1.5).sin() * 0.5 + 0.5;

            canvas.circle().xy((x, y)).radius(radius).rgb(r, g, b);
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting many-circles sketch");

    Runtime::run(
        RuntimeConfig {
            title: "vesper · many circles".to_string(),
            ..Default::default()
        },
        ManyCircles { steps: 500 },
    )
}
