use docfixture::{
    encoder, Canvas, Color, EncodeOptions, FileFontSource, FontResolver, FontTier, Rectangle,
    TypeScale, DEFAULT_FONT_PATH,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the preferred font, degrading to the bitmap face if it is missing
    let source = FileFontSource::new(DEFAULT_FONT_PATH);
    let (typeface, resolution) = FontResolver::resolve(&source);
    println!("Font: {resolution:?}");

    // Lay out a small badge
    let mut canvas = Canvas::new(320, 180, Color::white())?;
    canvas
        .fill_rect(Rectangle::from_corners(0, 0, 320, 36), Color::from_hex("#1F4E79")?)
        .text((12, 8), "VISITOR BADGE", FontTier::Large, Color::white())
        .text((12, 56), "Name: KATRINA UUENI", FontTier::Medium, Color::black())
        .text((12, 80), "Valid: 2025-03-14", FontTier::Medium, Color::black())
        .text((12, 150), "Not a real document", FontTier::Small, Color::gray())
        .stroke_rect(Rectangle::from_corners(0, 0, 319, 179), Color::blue(), 2);

    // Paint and write it
    let fonts = typeface.with_scale(TypeScale::new(20.0, 14.0, 10.0));
    let image = canvas.render(&fonts);
    let bytes = encoder::write_image("visitor_badge.png", &image, EncodeOptions::png())?;

    println!("Created visitor_badge.png ({bytes} bytes)");
    Ok(())
}
