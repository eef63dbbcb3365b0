use cairo::{Context, ImageSurface};
use sketchboard::draw::{CanvasSize, RenderStyle, color};
use sketchboard::input::{EditorSettings, EditorState, Tool, ToolState};
use sketchboard::util::Point;

const CANVAS: CanvasSize = CanvasSize {
    width: 200,
    height: 120,
};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Returns (r, g, b, a) of one pixel of an ARGB32 surface.
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
        (word >> 24) as u8,
    )
}

fn editor_with_rectangle() -> EditorState {
    let mut editor = EditorState::new(
        ToolState::new(Tool::Rectangle, false),
        EditorSettings::default(),
    );
    editor.on_pointer_down(Point::new(10.0, 10.0));
    editor.on_pointer_up(Point::new(110.0, 60.0));
    editor
}

#[test]
fn render_fills_background_and_clears_redraw_flag() {
    let mut editor = EditorState::default();
    let (mut surface, ctx) = surface_with_context(CANVAS.width as i32, CANVAS.height as i32);

    assert!(editor.needs_redraw());
    editor.render(&ctx, &RenderStyle::default(), CANVAS);
    drop(ctx);

    assert!(!editor.needs_redraw());
    assert_eq!(pixel(&mut surface, 5, 5), (255, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 199, 119), (255, 255, 255, 255));
}

#[test]
fn selected_rectangle_renders_highlight_and_handle() {
    let mut editor = editor_with_rectangle();
    editor.tools_mut().set_tool(Tool::Select);
    editor.on_pointer_down(Point::new(50.0, 30.0));
    editor.on_pointer_up(Point::new(50.0, 30.0));
    assert_eq!(editor.selected(), Some(0));

    let (mut surface, ctx) = surface_with_context(CANVAS.width as i32, CANVAS.height as i32);
    editor.render(&ctx, &RenderStyle::default(), CANVAS);
    drop(ctx);

    // 3px red outline straddles x = 10.
    assert_eq!(pixel(&mut surface, 10, 30), (255, 0, 0, 255));
    // Interior stays background.
    assert_eq!(pixel(&mut surface, 50, 30), (255, 255, 255, 255));
    // Handle square centred on the bottom-right corner.
    assert_eq!(pixel(&mut surface, 113, 63), (0, 0, 255, 255));
    assert_eq!(pixel(&mut surface, 107, 57), (0, 0, 255, 255));
}

#[test]
fn unselected_shape_uses_base_stroke() {
    let mut editor = editor_with_rectangle();
    let style = RenderStyle {
        stroke_color: color::GREEN,
        stroke_width: 4.0,
        ..RenderStyle::default()
    };

    let (mut surface, ctx) = surface_with_context(CANVAS.width as i32, CANVAS.height as i32);
    editor.render(&ctx, &style, CANVAS);
    drop(ctx);

    let (r, g, b, a) = pixel(&mut surface, 10, 30);
    assert_eq!((r, b, a), (0, 0, 255));
    assert!(g > 0);
    // No handle without a selection.
    assert_eq!(pixel(&mut surface, 113, 63), (255, 255, 255, 255));
}

#[test]
fn annotations_draw_text_pixels_only_when_visible() {
    let mut editor = editor_with_rectangle();
    let label_region = |surface: &mut ImageSurface| {
        (15..80)
            .flat_map(|x| (0..8).map(move |y| (x, y)))
            .any(|(x, y)| pixel(surface, x, y) != (255, 255, 255, 255))
    };

    let (mut hidden, ctx) = surface_with_context(CANVAS.width as i32, CANVAS.height as i32);
    editor.render(&ctx, &RenderStyle::default(), CANVAS);
    drop(ctx);
    assert!(!label_region(&mut hidden));

    editor.tools_mut().set_annotations_visible(true);
    assert!(editor.needs_redraw());

    let (mut shown, ctx) = surface_with_context(CANVAS.width as i32, CANVAS.height as i32);
    editor.render(&ctx, &RenderStyle::default(), CANVAS);
    drop(ctx);
    assert!(label_region(&mut shown));
}
