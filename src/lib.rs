#![no_std]
extern crate alloc;

pub mod area;
pub mod computing;
pub mod drawing;
pub mod primitive;
pub mod rendering;


#[doc(inline)]
pub use {
    area::Area,
    computing::arc_area,
    computing::ArcSpan,
    computing::Couple,
    computing::Float,
    computing::Point,
    drawing::draw_arc,
    drawing::draw_line,
    drawing::draw_rect,
    drawing::DrawDescriptor,
    drawing::DrawTask,
    drawing::DrawTaskType,
    drawing::Layer,
    primitive::ArcDescriptor,
    primitive::Fill,
    primitive::ImageId,
    primitive::LineDescriptor,
    primitive::RectDescriptor,
    primitive::OPA_COVER,
    primitive::OPA_TRANSP,
    rendering::ImageSource,
    rendering::NoImages,
    rendering::RenderError,
    rendering::SoftwareRenderer,
};
