use crate::area::Area;
use crate::computing::ArcSpan;
use crate::primitive::ArcDescriptor;
use crate::primitive::LineDescriptor;
use crate::primitive::RectDescriptor;
use crate::primitive::OPA_TRANSP;

use alloc::vec::Vec;
use core::mem::take;

use DrawTaskType::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawTaskType {
    Arc,
    Line,
    Rect,
}

pub const DRAW_TASK_TYPES: [DrawTaskType; 3] = [Arc, Line, Rect];

impl DrawTaskType {
    pub fn as_u32(self) -> u32 {
        match self {
            Arc => 0,
            Line => 1,
            Rect => 2,
        }
    }

    pub fn as_text(self) -> &'static str {
        match self {
            Arc => "Arc",
            Line => "Line",
            Rect => "Rect",
        }
    }
}

/// Payload of a [`DrawTask`]; the variant is the task's type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawDescriptor {
    Arc(ArcDescriptor),
    Line(LineDescriptor),
    Rect(RectDescriptor),
}

impl DrawDescriptor {
    pub fn task_type(&self) -> DrawTaskType {
        match self {
            DrawDescriptor::Arc(_) => Arc,
            DrawDescriptor::Line(_) => Line,
            DrawDescriptor::Rect(_) => Rect,
        }
    }

    /// Pixels this descriptor may touch
    pub fn area(&self) -> Area {
        match self {
            DrawDescriptor::Arc(arc) => arc.area(),
            DrawDescriptor::Line(line) => line.area(),
            DrawDescriptor::Rect(rect) => rect.area,
        }
    }
}

impl From<ArcDescriptor> for DrawDescriptor {
    fn from(d: ArcDescriptor) -> Self {
        DrawDescriptor::Arc(d)
    }
}

impl From<LineDescriptor> for DrawDescriptor {
    fn from(d: LineDescriptor) -> Self {
        DrawDescriptor::Line(d)
    }
}

impl From<RectDescriptor> for DrawDescriptor {
    fn from(d: RectDescriptor) -> Self {
        DrawDescriptor::Rect(d)
    }
}

/// A pending instruction to render one primitive.
///
/// `area` always covers the descriptor's pixels: it is recomputed
/// whenever the descriptor changes and can only be grown from outside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawTask {
    area: Area,
    descriptor: DrawDescriptor,
}

impl DrawTask {
    pub fn new<D: Into<DrawDescriptor>>(descriptor: D) -> Self {
        let descriptor = descriptor.into();
        Self {
            area: descriptor.area(),
            descriptor,
        }
    }

    pub fn task_type(&self) -> DrawTaskType {
        self.descriptor.task_type()
    }

    pub fn descriptor(&self) -> &DrawDescriptor {
        &self.descriptor
    }

    /// Pixels this task may touch
    pub fn area(&self) -> Area {
        self.area
    }

    /// Widens the task's area, e.g. to force a larger region to be redrawn.
    pub fn expand_area(&mut self, area: &Area) {
        self.area = self.area.union(area);
    }

    /// `None` if this isn't an arc task.
    pub fn as_arc(&self) -> Option<&ArcDescriptor> {
        match &self.descriptor {
            DrawDescriptor::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    /// Edits the arc in place, then recomputes the task's area.
    ///
    /// Returns `false` (and leaves the task alone) if this isn't an arc task.
    pub fn update_arc<F: FnOnce(&mut ArcDescriptor)>(&mut self, update: F) -> bool {
        match &mut self.descriptor {
            DrawDescriptor::Arc(arc) => {
                update(arc);
                self.area = arc.area();
                log::trace!("arc task updated, area {:?}", self.area);
                true
            },
            _ => false,
        }
    }

    pub fn as_line(&self) -> Option<&LineDescriptor> {
        match &self.descriptor {
            DrawDescriptor::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&RectDescriptor> {
        match &self.descriptor {
            DrawDescriptor::Rect(rect) => Some(rect),
            _ => None,
        }
    }
}

/// Ordered list of tasks waiting for a rasterizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    tasks: Vec<DrawTask>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, task: DrawTask) {
        log::trace!("{} task queued, area {:?}", task.task_type().as_text(), task.area());
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[DrawTask] {
        &self.tasks
    }

    /// Hands every pending task over to the caller, leaving the layer empty.
    pub fn take_tasks(&mut self) -> Vec<DrawTask> {
        take(&mut self.tasks)
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("flushing {} pending draw tasks", self.tasks.len());
        }
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Union of every pending task's area
    pub fn area(&self) -> Option<Area> {
        self.tasks.iter().map(DrawTask::area).reduce(|a, b| a.union(&b))
    }
}

/// Queues an arc on `layer`.
///
/// The descriptor is copied, so the caller may reuse it right away.
/// Angles are reduced into `[0, 360)`; a sweep of 360° or more is kept
/// as `start, start + 360`. A negative width counts as zero.
///
/// Nothing is queued when the arc can't produce any pixel (no radius
/// and no width, or fully transparent).
pub fn draw_arc(layer: &mut Layer, descriptor: &ArcDescriptor) {
    let mut arc = *descriptor;
    arc.width = arc.width.max(0);

    if arc.radius == 0 && arc.width == 0 {
        log::trace!("skipping arc at {:?}: no radius and no width", arc.center);
        return;
    }

    if arc.opacity == OPA_TRANSP {
        log::trace!("skipping transparent arc at {:?}", arc.center);
        return;
    }

    let span = ArcSpan::new(arc.start_angle, arc.end_angle);
    arc.start_angle = span.start;
    arc.end_angle = match span.full {
        true => span.start + 360.0,
        false => span.end,
    };

    layer.add_task(DrawTask::new(arc));
}

pub fn draw_line(layer: &mut Layer, descriptor: &LineDescriptor) {
    let mut line = *descriptor;
    line.width = line.width.max(0);

    if line.width == 0 || line.opacity == OPA_TRANSP {
        log::trace!("skipping invisible line {:?}", line.points);
        return;
    }

    layer.add_task(DrawTask::new(line));
}

pub fn draw_rect(layer: &mut Layer, descriptor: &RectDescriptor) {
    let rect = *descriptor;
    let Area { x1, y1, x2, y2 } = rect.area;

    if x1 > x2 || y1 > y2 || rect.opacity == OPA_TRANSP {
        log::trace!("skipping invisible rect {:?}", rect.area);
        return;
    }

    layer.add_task(DrawTask::new(rect));
}
