use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use arcdraw::*;
use rgb::{RGB8, RGBA8, ComponentBytes};
use std::time::Instant;

fn gauge(center: Point, start: Float, end: Float, color: RGB8) -> ArcDescriptor {
	ArcDescriptor {
		fill: Fill::Color(color),
		width: 18,
		start_angle: start,
		end_angle: end,
		center,
		radius: 100,
		rounded: true,
		..ArcDescriptor::new()
	}
}

fn main() {
	let png_name = args().nth(1).unwrap_or("arcs.png".into());
	let (w, h) = (300, 300);
	let center = Point::new(150, 150);

	let mut layer = Layer::new();
	draw_rect(&mut layer, &RectDescriptor::new(Area::new(0, 0, w as i32 - 1, h as i32 - 1), RGB8::new(24, 24, 32)));
	draw_arc(&mut layer, &ArcDescriptor {
		opacity: 80,
		..gauge(center, 135.0, 45.0, RGB8::new(200, 200, 200))
	});

	let mut renderer = SoftwareRenderer::new(w, h);
	let mut canvas = vec![RGBA8::new(0, 0, 0, 0); w * h];

	let runs = 10;
	let now = Instant::now();
	for i in 0..runs {
		// the value arc grows from 135° by 27° per frame
		let end = 135.0 + 27.0 * (i + 1) as Float;
		let value = gauge(center, 135.0, end, RGB8::new(255, 140, 0));
		println!("frame {}: invalidate {:?}", i, value.area());

		let mut frame = layer.clone();
		draw_arc(&mut frame, &value);
		renderer.render::<6, 36, _>(&mut frame, &NoImages, &mut canvas, w, true).unwrap();
	}
	println!("rendered {} times in {}ms.", runs, now.elapsed().as_millis());

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.as_bytes()).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
