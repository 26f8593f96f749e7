use crate::area::Area;
use crate::computing::polar;
use crate::computing::sin_cos_deg;
use crate::computing::Couple;
use crate::computing::Float;
use crate::drawing::DrawDescriptor;
use crate::drawing::DrawTask;
use crate::drawing::Layer;
use crate::primitive::ArcDescriptor;
use crate::primitive::Fill;
use crate::primitive::ImageId;
use crate::primitive::LineDescriptor;
use crate::primitive::Opacity;
use crate::primitive::RectDescriptor;

use wizdraw::push_cubic_bezier_segments;
use wizdraw::stroke;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use rgb::{RGB8, RGBA8};

use alloc::{vec, vec::Vec, boxed::Box};

/// Provides the pixels of images referenced by [`Fill::Image`].
///
/// Coordinates are relative to the top left corner of the primitive's
/// bounding square (`center - radius` for arcs); implementations decide
/// how to handle coordinates outside of the image (tile, clamp, ...).
pub trait ImageSource {
    /// `None` if `image` is unknown.
    fn sample(&self, image: ImageId, x: i32, y: i32) -> Option<RGBA8>;
}

/// An [`ImageSource`] without any image.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn sample(&self, _image: ImageId, _x: i32, _y: i32) -> Option<RGBA8> {
        None
    }
}

use RenderError::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderError {
    BufferTooSmall,
    MissingImage(ImageId),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Rasterizes draw tasks into an RGBA8 buffer, on the CPU.
pub struct SoftwareRenderer {
    width: usize,
    height: usize,
    mask: Box<[u8]>,
    scratch: Box<[u8]>,
    flat: Vec<Couple>,
}

impl SoftwareRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let length = width * height;
        Self {
            width,
            height,
            mask: vec![0; length].into_boxed_slice(),
            scratch: vec![0; length].into_boxed_slice(),
            flat: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn screen(&self) -> Option<Area> {
        match self.width > 0 && self.height > 0 {
            true => Some(Area::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)),
            false => None,
        }
    }

    /// Consumes every pending task of `layer`, in order.
    ///
    /// `dst` holds `height` lines of `stride` pixels.
    /// With `alpha_blend`, tasks are composited over the existing pixels.
    pub fn render<const SSAA: usize, const SSAA_SQ: usize, I: ImageSource>(
        &mut self,
        layer: &mut Layer,
        images: &I,
        dst: &mut [RGBA8],
        stride: usize,
        alpha_blend: bool,
    ) -> RenderResult<()> {
        if stride < self.width || dst.len() < stride * self.height {
            return Err(BufferTooSmall);
        }

        let tasks = layer.take_tasks();
        log::debug!("rendering {} draw tasks", tasks.len());

        for task in tasks {
            self.render_task::<SSAA, SSAA_SQ, I>(&task, images, dst, stride, alpha_blend)?;
        }

        Ok(())
    }

    pub fn render_task<const SSAA: usize, const SSAA_SQ: usize, I: ImageSource>(
        &mut self,
        task: &DrawTask,
        images: &I,
        dst: &mut [RGBA8],
        stride: usize,
        alpha_blend: bool,
    ) -> RenderResult<()> {
        if stride < self.width || dst.len() < stride * self.height {
            return Err(BufferTooSmall);
        }

        let area = task.area();
        let visible = match self.screen().and_then(|s| s.intersection(&area)) {
            Some(visible) => visible,
            None => {
                log::trace!("{} task off screen: {:?}", task.task_type().as_text(), area);
                return Ok(());
            }
        };

        self.mask.fill(0);

        match task.descriptor() {
            DrawDescriptor::Arc(arc) => {
                self.arc_mask::<SSAA, SSAA_SQ>(arc);
                let origin = (
                    arc.center.x - arc.radius as i32,
                    arc.center.y - arc.radius as i32,
                );
                self.paint(visible, arc.fill, arc.opacity, origin, images, dst, stride, alpha_blend)
            },
            DrawDescriptor::Line(line) => {
                self.line_mask::<SSAA>(line);
                self.paint(visible, Fill::Color(line.color), line.opacity, (0, 0), images, dst, stride, alpha_blend)
            },
            DrawDescriptor::Rect(rect) => {
                self.rect_mask::<SSAA, SSAA_SQ>(rect);
                self.paint(visible, Fill::Color(rect.color), rect.opacity, (0, 0), images, dst, stride, alpha_blend)
            },
        }
    }

    fn mask_size(&self) -> Vec2<usize> {
        Vec2::new(self.width, self.height)
    }

    /// Fills the current flat path into the scratch mask,
    /// then merges it into the main mask.
    fn fill_flat<const SSAA: usize, const SSAA_SQ: usize>(&mut self) {
        if self.flat.len() < 3 {
            return;
        }

        let mask_size = self.mask_size();
        self.scratch.fill(0);
        fill::<SSAA, SSAA_SQ>(&self.flat, &mut self.scratch, mask_size);

        for (m, s) in self.mask.iter_mut().zip(self.scratch.iter()) {
            *m = (*m).max(*s);
        }
    }

    fn close_flat(&mut self) {
        if let Some(first) = self.flat.first().copied() {
            self.flat.push(first);
        }
    }

    fn arc_mask<const SSAA: usize, const SSAA_SQ: usize>(&mut self, arc: &ArcDescriptor) {
        let span = arc.span();
        let r = arc.radius as Float;
        // the inner edge collapses into the center
        let w = (arc.width.max(0) as Float).min(r);
        if w <= 0.0 {
            return;
        }

        let center = Couple::new(arc.center.x as Float, arc.center.y as Float);

        if !span.is_empty() {
            let from = span.start;
            let to = span.start + span.sweep();

            self.flat.clear();
            push_arc(&mut self.flat, center, r, from, to);
            push_arc(&mut self.flat, center, r - w, to, from);
            self.close_flat();
            self.fill_flat::<SSAA, SSAA_SQ>();
        }

        if arc.rounded {
            let cap = w / 2.0;
            for angle in [span.start, span.end] {
                self.flat.clear();
                push_arc(&mut self.flat, polar(center, r - cap, angle), cap, 0.0, 360.0);
                self.close_flat();
                self.fill_flat::<SSAA, SSAA_SQ>();
            }
        }
    }

    fn line_mask<const SSAA: usize>(&mut self, line: &LineDescriptor) {
        let [p1, p2] = line.points;
        self.flat.clear();
        self.flat.push(Couple::new(p1.x as Float, p1.y as Float));
        self.flat.push(Couple::new(p2.x as Float, p2.y as Float));

        let mask_size = self.mask_size();
        stroke::<SSAA>(&self.flat, &mut self.mask, mask_size, line.width as Float);
    }

    fn rect_mask<const SSAA: usize, const SSAA_SQ: usize>(&mut self, rect: &RectDescriptor) {
        let Area { x1, y1, x2, y2 } = rect.area;
        let (x1, y1) = (x1 as Float, y1 as Float);
        // inclusive corners: the last pixel ends one unit further
        let (x2, y2) = (x2 as Float + 1.0, y2 as Float + 1.0);

        self.flat.clear();
        self.flat.push(Couple::new(x1, y1));
        self.flat.push(Couple::new(x2, y1));
        self.flat.push(Couple::new(x2, y2));
        self.flat.push(Couple::new(x1, y2));
        self.close_flat();
        self.fill_flat::<SSAA, SSAA_SQ>();
    }

    #[allow(clippy::too_many_arguments)]
    fn paint<I: ImageSource>(
        &self,
        visible: Area,
        fill: Fill,
        opacity: Opacity,
        origin: (i32, i32),
        images: &I,
        dst: &mut [RGBA8],
        stride: usize,
        alpha_blend: bool,
    ) -> RenderResult<()> {
        for y in visible.y1..=visible.y2 {
            let mask_line = (y as usize) * self.width;
            let dst_line = (y as usize) * stride;

            for x in visible.x1..=visible.x2 {
                let q = self.mask[mask_line + x as usize];
                if q == 0 {
                    continue;
                }

                let color = match fill {
                    Fill::Color(color) => with_opacity(opaque(color), opacity),
                    Fill::Image(id) => {
                        let texel = images
                            .sample(id, x - origin.0, y - origin.1)
                            .ok_or(MissingImage(id))?;
                        with_opacity(texel, opacity)
                    }
                };

                blend_pixel(&mut dst[dst_line + x as usize], color, q, alpha_blend);
            }
        }

        Ok(())
    }
}

fn with_opacity(color: RGBA8, opacity: Opacity) -> RGBA8 {
    let a = ((color.a as u32) * (opacity as u32)) / 255;
    RGBA8::new(color.r, color.g, color.b, a as u8)
}

/// Flattens a circular arc of `radius` around `center`, from `from` to
/// `to` (degrees, clockwise when `to > from`), into `flat`.
///
/// Each piece of at most 90° is approximated by a cubic curve with
/// control points at distance `4/3 * tan(θ / 4) * radius` along the
/// tangents.
pub fn push_arc(flat: &mut Vec<Couple>, center: Couple, radius: Float, from: Float, to: Float) {
    if radius <= 0.0 {
        flat.push(center);
        return;
    }

    let delta = to - from;
    let pieces = ((delta.abs() / 90.0).ceil() as usize).max(1);
    let step = delta / pieces as Float;
    let k = (4.0 / 3.0) * (step.to_radians() / 4.0).tan() * radius;

    let mut angle = from;
    for _ in 0..pieces {
        let next = angle + step;
        let (s0, c0) = sin_cos_deg(angle);
        let (s1, c1) = sin_cos_deg(next);

        let start = Couple::new(center.x + radius * c0, center.y + radius * s0);
        let end = Couple::new(center.x + radius * c1, center.y + radius * s1);

        let curve = CubicBezier2 {
            start,
            ctrl0: Couple::new(start.x - k * s0, start.y + k * c0),
            ctrl1: Couple::new(end.x + k * s1, end.y - k * c1),
            end,
        };

        flat.push(start);
        push_cubic_bezier_segments::<8>(&curve, 0.4, flat);
        flat.push(end);

        angle = next;
    }
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8, alpha_blend_dst: bool) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
    let u8_max = u8::MAX as u32;
    let dst_alpha = u8_max - src_alpha;

    let for_each = |src: u8, dst: &mut u8| {
        let src_scaled = (src as u32) * src_alpha;
        *dst = match alpha_blend_dst {
            true => ((src_scaled + (*dst as u32) * dst_alpha) / u8_max) as u8,
            false => (src_scaled / u8_max) as u8,
        };
    };

    for_each(src_pixel.r, &mut dst_pixel.r);
    for_each(src_pixel.g, &mut dst_pixel.g);
    for_each(src_pixel.b, &mut dst_pixel.b);
    for_each(src_pixel.a, &mut dst_pixel.a);
}

/// Converts a flat color to an opaque pixel.
pub fn opaque(color: RGB8) -> RGBA8 {
    RGBA8::new(color.r, color.g, color.b, 255)
}
